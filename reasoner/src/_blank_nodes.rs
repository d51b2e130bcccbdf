use std::collections::HashMap;

use rdf_rs_api::model::{Literal, Uri};

/// Allocates the blank nodes introduced by entailment rules.
///
/// Fresh nodes are labelled `_:inferred1`, `_:inferred2`, ...
/// A given literal is always represented by the same node.
#[derive(Clone, Debug, Default)]
pub struct BlankNodeAllocator {
    count: usize,
    literals: HashMap<Literal, Uri>,
}

impl BlankNodeAllocator {
    /// A new allocator, starting at `_:inferred1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A blank node that this allocator never returned before.
    pub fn fresh(&mut self) -> Uri {
        self.count += 1;
        Uri::blank(&format!("inferred{}", self.count))
    }

    /// The blank node standing for `literal`.
    pub fn for_literal(&mut self, literal: &Literal) -> Uri {
        if let Some(node) = self.literals.get(literal) {
            return node.clone();
        }
        let node = self.fresh();
        self.literals.insert(literal.clone(), node.clone());
        node
    }

    /// Number of blank nodes allocated so far.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no blank node was allocated yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
