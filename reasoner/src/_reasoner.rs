use std::collections::HashSet;

use rdf_rs_api::model::Triple;

use crate::{BlankNodeAllocator, Entailment};

/// A [`BaseReasoner`] implements an entailment regime as a list of [`Entailment`] rules.
///
/// Implementors only provide the rules;
/// forward chaining is done by [`inferred_triples`](BaseReasoner::inferred_triples).
pub trait BaseReasoner {
    /// The rules of this entailment regime, in the order they are tried.
    fn entailment_patterns() -> Vec<Entailment>;

    /// The triples entailed by `triples` that are not already among them,
    /// in the order they were discovered.
    ///
    /// Each round applies unary rules to every triple,
    /// and binary rules to every ordered pair of triples,
    /// asserted or inferred by a previous round.
    /// Saturation stops when a round infers nothing new,
    /// or after `depth` rounds.
    fn inferred_triples(triples: &[Triple], depth: usize) -> Vec<Triple> {
        let rules = Self::entailment_patterns();
        let (unary, binary): (Vec<_>, Vec<_>) = rules.iter().partition(|r| r.arity() == 1);
        let mut blank_nodes = BlankNodeAllocator::new();

        let mut seen: HashSet<Triple> = triples.iter().cloned().collect();
        let mut known: Vec<Triple> = triples.to_vec();
        let asserted = known.len();
        // triples before `frontier` were already combined with each other
        let mut frontier = 0;

        for round in 1..=depth {
            let mut found = vec![];
            {
                let mut keep = |candidates: Vec<Triple>| {
                    for t in candidates {
                        if seen.insert(t.clone()) {
                            found.push(t);
                        }
                    }
                };
                for t in &known[frontier..] {
                    for rule in &unary {
                        keep(rule.apply_to_one(t, &mut blank_nodes));
                    }
                }
                for (i, t1) in known.iter().enumerate() {
                    for (j, t2) in known.iter().enumerate() {
                        if i < frontier && j < frontier {
                            continue;
                        }
                        for rule in &binary {
                            keep(rule.apply_to_pair(t1, t2, &mut blank_nodes));
                        }
                    }
                }
            }
            log::debug!("round {round}: {} new triple(s)", found.len());
            if found.is_empty() {
                break;
            }
            frontier = known.len();
            known.extend(found);
            if round == depth {
                log::warn!(
                    "reasoning stopped after {depth} round(s), possibly before reaching a fixpoint"
                );
            }
        }
        known.split_off(asserted)
    }
}
