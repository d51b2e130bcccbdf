use std::fmt;

use rdf_rs_api::model::Triple;

use crate::BlankNodeAllocator;

type UnaryPremise = dyn Fn(&Triple) -> bool + Send + Sync;
type UnaryConclusion = dyn Fn(&Triple, &mut BlankNodeAllocator) -> Vec<Triple> + Send + Sync;
type BinaryPremise = dyn Fn(&Triple, &Triple) -> bool + Send + Sync;
type BinaryConclusion =
    dyn Fn(&Triple, &Triple, &mut BlankNodeAllocator) -> Vec<Triple> + Send + Sync;

/// An entailment rule: when its premises hold for one (or two) triples,
/// its conclusion gives the triples they entail.
pub struct Entailment {
    name: &'static str,
    pattern: Pattern,
}

enum Pattern {
    Unary(Box<UnaryPremise>, Box<UnaryConclusion>),
    Binary(Box<BinaryPremise>, Box<BinaryConclusion>),
}

impl Entailment {
    /// A rule with a single premise.
    pub fn unary<P, C>(name: &'static str, premise: P, conclusion: C) -> Self
    where
        P: Fn(&Triple) -> bool + Send + Sync + 'static,
        C: Fn(&Triple, &mut BlankNodeAllocator) -> Vec<Triple> + Send + Sync + 'static,
    {
        Entailment {
            name,
            pattern: Pattern::Unary(Box::new(premise), Box::new(conclusion)),
        }
    }

    /// A rule with two premises, matched in order.
    pub fn binary<P, C>(name: &'static str, premise: P, conclusion: C) -> Self
    where
        P: Fn(&Triple, &Triple) -> bool + Send + Sync + 'static,
        C: Fn(&Triple, &Triple, &mut BlankNodeAllocator) -> Vec<Triple> + Send + Sync + 'static,
    {
        Entailment {
            name,
            pattern: Pattern::Binary(Box::new(premise), Box::new(conclusion)),
        }
    }

    /// The name of this rule (e.g. `rdfs9`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The number of premises of this rule.
    pub fn arity(&self) -> usize {
        match self.pattern {
            Pattern::Unary(..) => 1,
            Pattern::Binary(..) => 2,
        }
    }

    /// Whether `input` satisfies the premises of this rule.
    ///
    /// Always false if `input` does not contain exactly [`arity`](Self::arity) triples.
    pub fn verify(&self, input: &[Triple]) -> bool {
        match (&self.pattern, input) {
            (Pattern::Unary(premise, _), [t]) => premise(t),
            (Pattern::Binary(premise, _), [t1, t2]) => premise(t1, t2),
            _ => false,
        }
    }

    /// The triples entailed by `input`, empty if `input` does not [verify](Self::verify) this rule.
    pub fn apply(&self, input: &[Triple], blank_nodes: &mut BlankNodeAllocator) -> Vec<Triple> {
        match (&self.pattern, input) {
            (Pattern::Unary(premise, conclusion), [t]) if premise(t) => conclusion(t, blank_nodes),
            (Pattern::Binary(premise, conclusion), [t1, t2]) if premise(t1, t2) => {
                conclusion(t1, t2, blank_nodes)
            }
            _ => Vec::new(),
        }
    }

    /// Same as `apply(&[t], ..)`, without building the slice.
    pub(crate) fn apply_to_one(
        &self,
        t: &Triple,
        blank_nodes: &mut BlankNodeAllocator,
    ) -> Vec<Triple> {
        match &self.pattern {
            Pattern::Unary(premise, conclusion) if premise(t) => conclusion(t, blank_nodes),
            _ => Vec::new(),
        }
    }

    /// Same as `apply(&[t1, t2], ..)`, without cloning the triples.
    pub(crate) fn apply_to_pair(
        &self,
        t1: &Triple,
        t2: &Triple,
        blank_nodes: &mut BlankNodeAllocator,
    ) -> Vec<Triple> {
        match &self.pattern {
            Pattern::Binary(premise, conclusion) if premise(t1, t2) => {
                conclusion(t1, t2, blank_nodes)
            }
            _ => Vec::new(),
        }
    }
}

impl fmt::Debug for Entailment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entailment")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish()
    }
}
