use std::cmp::Ordering;

use crate::{Miles, Position, Segment};

/// Candidate step of the search, owned by the per-call arena
#[derive(Debug, Clone, Copy)]
pub(super) struct SearchNode<'a> {
    pub(super) position: &'a Position,
    /// Arena index of the node this one was reached from
    pub(super) parent: Option<usize>,
    /// Segment leading from the parent to `position`
    pub(super) via: Option<&'a Segment>,
    pub(super) g: Miles,
    pub(super) h: Miles,
}

impl SearchNode<'_> {
    pub(super) fn f(&self) -> Miles {
        self.g + self.h
    }
}

/// Frontier entry. `node` is the arena index, which also records insertion
/// order and breaks ties between equal costs (earlier node first).
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) cost: Miles,
    pub(super) node: usize,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
