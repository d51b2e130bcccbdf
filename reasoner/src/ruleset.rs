//! I define the entailment regimes implementing [`BaseReasoner`](crate::BaseReasoner).
use rdf_rs_api::model::{Triple, Uri};
use rdf_rs_api::ns::{rdf, NsTerm};

mod _rdfs;
pub use _rdfs::RdfsReasoner;

/// `term`, written the same way as `like`:
/// expanded if `like` is a full IRI, prefixed otherwise.
fn spelled_like(term: &NsTerm, like: &Uri) -> Uri {
    if like.is_full() {
        term.full()
    } else {
        term.prefixed()
    }
}

/// Whether `t` states that its subject has `rdf:type` `class`.
fn has_type(t: &Triple, class: &NsTerm) -> bool {
    t.predicate.0.is(&rdf::type_) && t.object.resource().is_some_and(|o| o.is(class))
}
