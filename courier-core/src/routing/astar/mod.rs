//! A* search over the street index.
//!
//! All search nodes of one call live in a single arena and refer to their
//! parent by index; the arena, frontier and cost map are dropped together
//! when the search returns, whatever the outcome.

mod state;

use std::collections::BinaryHeap;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use log::{debug, trace};

use crate::{Geometry, Miles, Position, Segment, StreetIndex};
use state::{SearchNode, State};

/// Finds a sequence of segments from `start` to `end`, or `None` if the
/// frontier is exhausted first.
///
/// A child is discarded when a node already admitted at the same position
/// (in the frontier or visited) has an f-cost lower or equal to the child's.
/// The goal is tested when a child is generated rather than when it is
/// expanded. Both rules trade strict A* optimality for less work; with a
/// consistent heuristic and straight segments the path found is still the
/// shortest one.
pub(crate) fn astar<'a, G>(
    index: &'a StreetIndex,
    geometry: &G,
    start: &'a Position,
    end: &Position,
) -> Option<Vec<&'a Segment>>
where
    G: Geometry + ?Sized,
{
    let mut arena: Vec<SearchNode<'a>> = Vec::new();
    let mut frontier = BinaryHeap::new();
    // Lowest f-cost of any node admitted at a position
    let mut best_cost: HashMap<&'a Position, Miles> = HashMap::new();
    let mut expanded = 0usize;

    let seed = SearchNode {
        position: start,
        parent: None,
        via: None,
        g: 0.0,
        h: geometry.distance(start, end),
    };
    best_cost.insert(start, seed.f());
    frontier.push(State {
        cost: seed.f(),
        node: 0,
    });
    arena.push(seed);

    while let Some(State { cost, node }) = frontier.pop() {
        expanded += 1;
        let current = arena[node];
        trace!("Expanding {} (f = {cost:.4})", current.position);

        let Some(departures) = index.segments_from(current.position) else {
            continue;
        };

        for segment in departures {
            let child = SearchNode {
                position: &segment.end,
                parent: Some(node),
                via: Some(segment),
                g: current.g + geometry.length(segment),
                h: geometry.distance(&segment.end, end),
            };

            if child.position == end {
                debug!(
                    "Route from {start} to {end} found after {expanded} expansions ({} nodes)",
                    arena.len()
                );
                return Some(reconstruct(&arena, child));
            }

            let f = child.f();
            match best_cost.entry(child.position) {
                Entry::Occupied(mut entry) => {
                    if *entry.get() <= f {
                        continue;
                    }
                    entry.insert(f);
                }
                Entry::Vacant(entry) => {
                    entry.insert(f);
                }
            }

            frontier.push(State {
                cost: f,
                node: arena.len(),
            });
            arena.push(child);
        }
    }

    debug!(
        "No route from {start} to {end}: frontier exhausted after {expanded} expansions ({} nodes)",
        arena.len()
    );
    None
}

/// Follows parent links back to the seed, returning segments in travel order
fn reconstruct<'a>(arena: &[SearchNode<'a>], last: SearchNode<'a>) -> Vec<&'a Segment> {
    let mut path = Vec::new();
    let mut current = last;

    while let (Some(segment), Some(parent)) = (current.via, current.parent) {
        path.push(segment);
        current = arena[parent];
    }

    path.reverse();
    path
}
