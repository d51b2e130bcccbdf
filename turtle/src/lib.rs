//! Parser and serializer for the [Turtle] concrete syntax of RDF,
//! producing and consuming the [`Graph`](rdf_rs_api::model::Graph) of [`rdf_rs_api`].
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
#![deny(missing_docs)]

pub mod parser;

pub mod serializer;


#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
