//! A minimal query API, filtering triples by chaining conditions.
//!
//! ```
//! # use rdf_rs_api::model::*;
//! let mut g = Graph::new();
//! let john = Uri::new("ex:", "John", UriType::Prefixed);
//! let name = Uri::new("foaf:", "name", UriType::Prefixed);
//! g.insert(Triple::new(john.clone(), name.clone(), Literal::from("John")));
//! g.insert(Triple::new(john, Uri::new("foaf:", "age", UriType::Prefixed), Literal::from("42")));
//!
//! let value = g.query()
//!     .subject(|s| s == "ex:John")
//!     .predicate(|p| p == "foaf:name")
//!     .value();
//! assert_eq!(value, Some(Literal::from("John").into()));
//! ```

use crate::model::{Object, Triple};

/// Narrows down a list of triples, one condition at a time.
///
/// The conditions on [`subject`](Self::subject), [`predicate`](Self::predicate)
/// and [`object`](Self::object) receive the `Display` form of the corresponding
/// position (e.g. `ex:John`, `<http://example.org/John>` or `"John"@en`).
#[derive(Clone, Debug, Default)]
pub struct QueryBuilder {
    triples: Vec<Triple>,
}

impl QueryBuilder {
    /// Start a query over the given triples.
    pub fn start(triples: Vec<Triple>) -> Self {
        Self { triples }
    }

    /// Keep the triples satisfying `condition`.
    pub fn select<F>(mut self, condition: F) -> Self
    where
        F: Fn(&Triple) -> bool,
    {
        self.triples.retain(condition);
        self
    }

    /// Keep the triples whose subject satisfies `condition`.
    pub fn subject<F>(mut self, condition: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        self.triples.retain(|t| condition(&t.subject.to_string()));
        self
    }

    /// Keep the triples whose predicate satisfies `condition`.
    pub fn predicate<F>(mut self, condition: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        self.triples.retain(|t| condition(&t.predicate.to_string()));
        self
    }

    /// Keep the triples whose object satisfies `condition`.
    pub fn object<F>(mut self, condition: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        self.triples.retain(|t| condition(&t.object.to_string()));
        self
    }

    /// The object of the first remaining triple, if any.
    pub fn value(self) -> Option<Object> {
        self.triples.into_iter().next().map(|t| t.object)
    }

    /// The objects of all remaining triples, or `None` if there is none.
    pub fn values(self) -> Option<Vec<Object>> {
        if self.triples.is_empty() {
            None
        } else {
            Some(self.triples.into_iter().map(|t| t.object).collect())
        }
    }

    /// The remaining triples.
    pub fn query(self) -> Vec<Triple> {
        self.triples
    }
}
