//! Serializers write a [`Graph`](rdf_rs_api::model::Graph) in some RDF concrete syntax.

pub mod turtle;
pub use self::turtle::{to_turtle_string, TurtleSerializer};
