//! A forward-chaining reasoning engine for RDFS entailment,
//! over the [`Graph`](rdf_rs_api::model::Graph)s of [`rdf_rs_api`].
//!
//! A reasoner ([`BaseReasoner`]) is a set of [`Entailment`] rules,
//! applied repeatedly to the asserted triples until no new triple is inferred
//! (or a maximum number of rounds is reached).
//! See [`RdfsReasoner`] and [`InferenceExt`].
#![deny(missing_docs)]

mod _blank_nodes;
pub use _blank_nodes::*;
mod _entailment;
pub use _entailment::*;
mod _graph_impl;
pub use _graph_impl::*;
mod _reasoner;
pub use _reasoner::*;

pub mod ruleset;
pub use ruleset::RdfsReasoner;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
