use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use oxiri::Iri;
use regex::Regex;

use super::{Triple, Uri, UriType};
use crate::error::{ModelError, Result};
use crate::ns::{rdf, rdfs, standard_namespace, xsd};
use crate::query::QueryBuilder;

lazy_static! {
    /// Prefix labels, as in Turtle's `PNAME_NS` (colon included).
    static ref PREFIX_LABEL: Regex = Regex::new(r"^(?:[A-Za-z][\w.\-]*)?:$").unwrap();
}

/// The triples of a document, together with the metadata
/// (`@base` and `@prefix` directives) needed to expand their [`Uri`]s.
///
/// Prefix labels are stored with their trailing colon (e.g. `"foaf:"`).
/// A new graph already knows the `rdf:`, `rdfs:` and `xsd:` prefixes.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    /// The base IRI, against which relative IRIs are resolved.
    pub base_prefix: Option<String>,
    /// Prefix labels and the namespaces they stand for.
    pub prefixes: HashMap<String, String>,
    /// The triples of this graph, in insertion order.
    pub triples: Vec<Triple>,
}

impl Default for Graph {
    fn default() -> Self {
        let prefixes = [
            (rdf::LABEL, rdf::PREFIX),
            (rdfs::LABEL, rdfs::PREFIX),
            (xsd::LABEL, xsd::PREFIX),
        ]
        .into_iter()
        .map(|(label, ns)| (label.to_string(), ns.to_string()))
        .collect();
        Graph {
            base_prefix: None,
            prefixes,
            triples: Vec::new(),
        }
    }
}

impl Graph {
    /// An empty graph without base, knowing only the default prefixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty graph with the given base IRI.
    pub fn with_base(base: &str) -> Result<Self> {
        check_absolute(base)?;
        Ok(Graph {
            base_prefix: Some(base.into()),
            ..Self::default()
        })
    }

    /// Declare (or redeclare) a prefix.
    ///
    /// `prefix` must end with a colon, and `namespace` must be an absolute IRI.
    pub fn add_prefix(&mut self, prefix: &str, namespace: &str) -> Result<()> {
        if !PREFIX_LABEL.is_match(prefix) {
            return Err(ModelError::InvalidPrefix(prefix.into()));
        }
        check_absolute(namespace)?;
        self.prefixes.insert(prefix.into(), namespace.into());
        Ok(())
    }

    /// Number of triples in this graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether this graph has no triple.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over the triples of this graph.
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Whether this graph contains the given triple.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Add a triple, unless it is already present.
    ///
    /// Return whether the triple was added.
    /// This is linear in the size of the graph;
    /// use [`Extend`] to add many triples at once.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.contains(&triple) {
            false
        } else {
            self.triples.push(triple);
            true
        }
    }

    /// Start a [`QueryBuilder`] over (a copy of) the triples of this graph.
    pub fn query(&self) -> QueryBuilder {
        QueryBuilder::start(self.triples.clone())
    }

    /// Expand `uri` into an absolute IRI (or blank node),
    /// using the base and prefixes of this graph.
    ///
    /// * relative IRIs are resolved against the base;
    /// * `:name` uses the empty prefix if declared, and the base otherwise;
    /// * `pfx:name` uses the declared namespace of `pfx:`,
    ///   except for the `_:` pseudo-prefix, which denotes blank nodes;
    /// * `rdf:`, `rdfs:` and `xsd:` stand for their standard namespaces
    ///   when they are not declared.
    pub fn resolve(&self, uri: &Uri) -> Result<Uri> {
        match uri.uri_type {
            UriType::Full | UriType::BlankNode => Ok(uri.clone()),
            UriType::Relative => {
                let base = self
                    .base_prefix
                    .as_deref()
                    .ok_or_else(|| ModelError::MissingBase(uri.value()))?;
                let base = Iri::parse(base).map_err(|err| invalid_iri(base, err))?;
                let reference = uri.value();
                let resolved = base
                    .resolve(&reference)
                    .map_err(|err| invalid_iri(&reference, err))?;
                Ok(Uri::full(resolved.as_str()))
            }
            UriType::PrefixedWithBase => self
                .prefixes
                .get(":")
                .or(self.base_prefix.as_ref())
                .map(|ns| Uri::new(ns, &uri.name, UriType::Full))
                .ok_or_else(|| ModelError::UndefinedPrefix(":".into())),
            UriType::Prefixed if uri.prefix.starts_with('_') => Ok(Uri::blank(&uri.name)),
            UriType::Prefixed => self
                .prefixes
                .get(&uri.prefix)
                .map(String::as_str)
                .or_else(|| standard_namespace(&uri.prefix))
                .map(|ns| Uri::new(ns, &uri.name, UriType::Full))
                .ok_or_else(|| ModelError::UndefinedPrefix(uri.prefix.clone())),
        }
    }

    /// Expand every [`Uri`] of `triple` (see [`Graph::resolve`]).
    pub fn resolve_triple(&self, triple: &Triple) -> Result<Triple> {
        triple.try_map_uris(|uri| self.resolve(uri))
    }

    /// The labels among `rdf:`, `rdfs:` and `xsd:`
    /// that this graph binds to a non-standard namespace.
    pub fn rebound_prefixes(&self) -> Vec<&'static str> {
        [rdf::LABEL, rdfs::LABEL, xsd::LABEL]
            .into_iter()
            .filter(|label| {
                self.prefixes
                    .get(*label)
                    .is_some_and(|ns| Some(ns.as_str()) != standard_namespace(label))
            })
            .collect()
    }

    /// Expand all the URIs of this graph to have full paths for each resource.
    ///
    /// On error, the graph is left unchanged.
    pub fn apply_metadata(&mut self) -> Result<()> {
        let triples = self
            .triples
            .iter()
            .map(|t| self.resolve_triple(t))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("expanded the URIs of {} triples", triples.len());
        self.triples = triples;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        let mut seen: HashSet<Triple> = self.triples.iter().cloned().collect();
        for triple in iter {
            if !seen.contains(&triple) {
                seen.insert(triple.clone());
                self.triples.push(triple);
            }
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

fn check_absolute(iri: &str) -> Result<()> {
    Iri::parse(iri).map(|_| ()).map_err(|err| invalid_iri(iri, err))
}

fn invalid_iri<E: std::fmt::Display>(iri: &str, err: E) -> ModelError {
    ModelError::InvalidIri {
        iri: iri.into(),
        reason: err.to_string(),
    }
}
