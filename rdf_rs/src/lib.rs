//! A small toolkit for working with [RDF] in Rust.
//!
//! Each piece of knowledge in RDF (a *statement*) is a [`Triple`](model::Triple):
//! a [`Resource`](model::Resource) has some [`Relationship`](model::Relationship)
//! with an [`Object`](model::Object), either a [`Literal`](model::Literal)
//! or another resource.
//! Triples are gathered in a [`Graph`](model::Graph), together with the
//! `@base` and `@prefix` metadata of the document they come from.
//!
//! This crate re-exports the crates of the toolkit:
//! * [`model`] and [`ns`]: the triple model and the standard namespaces;
//! * [`parsing`] and [`serializing`]: reading and writing [Turtle];
//! * [`querying`]: filtering triples by chained conditions;
//! * [`reasoning`]: forward-chaining RDFS entailment.
//!
//! # Getting started
//!
//! ```
//! use rdf_rs::prelude::*;
//!
//! # fn main() -> Result<(), ParserError> {
//! let mut graph = TurtleParser::default().graph(r#"
//!     @prefix ex: <http://example.org/> .
//!     ex:Student rdfs:subClassOf ex:Person .
//!     ex:alice a ex:Student ; ex:name "Alice" .
//! "#)?;
//!
//! // asserted triples only
//! let name = graph.query().subject(|s| s == "ex:alice").predicate(|p| p == "ex:name").value();
//! assert_eq!(name, Some(Literal::from("Alice").into()));
//!
//! // asserted and inferred triples
//! let types = graph.start_query(5).subject(|s| s == "ex:alice").predicate(|p| p == "rdf:type").values();
//! assert!(types.unwrap().contains(&Uri::new("ex:", "Person", UriType::Prefixed).into()));
//!
//! // expand all URIs, and write the graph back
//! graph.apply_metadata()?;
//! let ttl = rdf_rs::serializing::to_turtle_string(&graph);
//! assert!(ttl.contains("<http://example.org/name> \"Alice\""));
//! # Ok(())
//! # }
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [Turtle]: https://www.w3.org/TR/turtle/
#![deny(missing_docs)]

pub use rdf_rs_api::{model, ns, ModelError};

/// Filtering the triples of a graph (see [`QueryBuilder`](querying::QueryBuilder)).
pub use rdf_rs_api::query as querying;

/// Parsing RDF documents (see [`RdfParser`](parsing::RdfParser)).
pub use rdf_rs_turtle::parser as parsing;

/// Writing RDF documents (see [`TurtleSerializer`](serializing::TurtleSerializer)).
pub use rdf_rs_turtle::serializer as serializing;

/// RDFS reasoning (see [`InferenceExt`](reasoning::InferenceExt)).
pub use rdf_rs_reasoner as reasoning;

/// The types and traits needed in most programs using this toolkit.
pub mod prelude {
    pub use crate::model::{
        Graph, Literal, Object, Relationship, Resource, Triple, Uri, UriType,
    };
    pub use crate::ns::{rdf, rdfs, xsd};
    pub use crate::parsing::{ParserError, RdfParser, TurtleParser};
    pub use crate::querying::QueryBuilder;
    pub use crate::reasoning::{BaseReasoner, InferenceExt, RdfsReasoner};
    pub use crate::serializing::{to_turtle_string, TurtleSerializer};
}


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
