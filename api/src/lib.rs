//! This crate is part of [rdf_rs],
//! a small [RDF] toolkit in Rust.
//!
//! It defines the triple model shared by the other crates
//! ([`model`]), the standard namespaces ([`ns`])
//! and a simple filtering [query builder](query::QueryBuilder).
//!
//! [rdf_rs]: https://docs.rs/rdf_rs/latest/rdf_rs/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/

#![deny(missing_docs)]

pub mod error;
pub mod model;
pub mod ns;
pub mod query;

pub use error::ModelError;

#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
