//! A* search over planar road maps.
//!
//! This module provides:
//! - [`Route`] - a partial path with its `g`, `h` and `f` bookkeeping
//! - [`Frontier`] - min-priority queue of open routes keyed by `f`
//! - [`shortest_path`] - the search engine itself
//!
//! The engine expands routes in ascending `f` order using the straight-line
//! distance to the goal as heuristic. Two behaviours differ from textbook A*:
//! candidates are pruned against the cheapest goal-reaching route found so far
//! rather than per-node best costs, and an intersection is never reopened once
//! it has been closed. The fixture routes depend on both.

mod frontier;
mod route;

pub use frontier::Frontier;
pub use route::Route;

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Error, InvalidNodeReason, NodeRole, Result};
use crate::geometry::Point;
use crate::graph::{NodeId, RoadMap};

/// Find the cheapest route from `start` to `goal`.
///
/// Returns `[start]` when both ends coincide and an empty vector when the goal
/// is unreachable. Fails with [`Error::InvalidNode`] before any search work if
/// either endpoint is not an intersection of `graph`.
pub fn shortest_path(graph: &RoadMap, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
    let start_position = endpoint_position(graph, NodeRole::Start, start)?;
    let goal_position = endpoint_position(graph, NodeRole::Goal, goal)?;

    if start == goal {
        return Ok(vec![start]);
    }

    debug!(start, goal, "starting route search");

    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut best: Option<Route> = None;
    let mut frontier = Frontier::new();
    frontier.push(Route::new(start, start_position, goal_position));

    let mut popped = 0usize;
    while let Some(route) = frontier.pop() {
        popped += 1;
        let current = route.last();
        closed.insert(current);

        for next in graph.neighbours(current) {
            if closed.contains(&next) {
                continue;
            }
            let Some(next_position) = graph.position(next) else {
                continue;
            };

            let candidate = route.clone().extend(next, next_position);
            let improves = best
                .as_ref()
                .map_or(true, |best| candidate.total_cost() < best.total_cost());

            if next == goal {
                if improves {
                    best = Some(candidate);
                }
            } else if improves {
                frontier.push(candidate);
            }
        }
    }

    debug!(
        start,
        goal,
        popped,
        closed = closed.len(),
        cost = best.as_ref().map(Route::cost_so_far),
        "route search finished"
    );

    Ok(best.map(Route::into_path).unwrap_or_default())
}

fn endpoint_position(graph: &RoadMap, role: NodeRole, node: NodeId) -> Result<Point> {
    graph
        .position(node)
        .ok_or_else(|| Error::invalid_node(role, node.to_string(), InvalidNodeReason::NotInGraph))
}
