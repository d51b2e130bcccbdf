use std::collections::HashSet;

use rdf_rs_api::model::{Graph, Triple, Uri, UriType};
use rdf_rs_api::ns::standard_namespace;
use rdf_rs_api::query::QueryBuilder;

use crate::{BaseReasoner, RdfsReasoner};

/// Reasoning on a [`Graph`].
///
/// The plain methods use [`RdfsReasoner`];
/// the `_with` variants accept any [`BaseReasoner`].
///
/// When the graph binds `rdf:`, `rdfs:` or `xsd:` to another namespace,
/// names using that label are not mistaken for vocabulary terms,
/// and inferred vocabulary terms are written in full.
pub trait InferenceExt {
    /// Start a query over the asserted triples of this graph,
    /// followed by those inferred by RDFS entailment in at most `depth` rounds.
    ///
    /// The graph itself is left unchanged.
    fn start_query(&self, depth: usize) -> QueryBuilder {
        self.start_query_with::<RdfsReasoner>(depth)
    }

    /// Add to this graph the triples inferred by RDFS entailment in at most `depth` rounds.
    ///
    /// Return the number of added triples.
    fn saturate(&mut self, depth: usize) -> usize {
        self.saturate_with::<RdfsReasoner>(depth)
    }

    /// Same as [`start_query`](InferenceExt::start_query), with reasoner `R`.
    fn start_query_with<R: BaseReasoner>(&self, depth: usize) -> QueryBuilder;

    /// Same as [`saturate`](InferenceExt::saturate), with reasoner `R`.
    fn saturate_with<R: BaseReasoner>(&mut self, depth: usize) -> usize;
}

impl InferenceExt for Graph {
    fn start_query_with<R: BaseReasoner>(&self, depth: usize) -> QueryBuilder {
        let mut triples = self.triples.clone();
        triples.extend(inferred::<R>(self, depth));
        QueryBuilder::start(triples)
    }

    fn saturate_with<R: BaseReasoner>(&mut self, depth: usize) -> usize {
        let inferred = inferred::<R>(self, depth);
        let count = inferred.len();
        self.triples.extend(inferred);
        log::debug!("saturated graph with {count} inferred triple(s)");
        count
    }
}

fn inferred<R: BaseReasoner>(graph: &Graph, depth: usize) -> Vec<Triple> {
    let rebound = graph.rebound_prefixes();
    if rebound.is_empty() {
        return R::inferred_triples(&graph.triples, depth);
    }
    let shadowed = |uri: &Uri| {
        uri.uri_type == UriType::Prefixed && rebound.iter().any(|label| *label == uri.prefix)
    };
    // premises only use shadowed labels in expanded form
    let premises: Vec<Triple> = graph
        .triples
        .iter()
        .map(|t| {
            t.map_uris(|uri| {
                if shadowed(uri) {
                    graph.resolve(uri).unwrap_or_else(|_| uri.clone())
                } else {
                    uri.clone()
                }
            })
        })
        .collect();
    let mut seen: HashSet<Triple> = premises.iter().cloned().collect();
    R::inferred_triples(&premises, depth)
        .into_iter()
        .map(|t| {
            t.map_uris(|uri| match standard_namespace(&uri.prefix) {
                Some(ns) if shadowed(uri) => Uri::new(ns, &uri.name, UriType::Full),
                _ => uri.clone(),
            })
        })
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
