//! Route planning entry points.
//!
//! This module provides:
//! - [`RouteRequest`] - raw start/goal arguments as supplied by a caller
//! - [`RoutePlan`] - the resolved endpoints, the route and its length
//! - [`resolve_node`] - argument validation against a road map
//! - [`plan_route`] - main entry point for computing routes
//!
//! # Example
//!
//! ```
//! use wayfinder_lib::{fixtures, plan_route, RouteRequest};
//!
//! let plan = plan_route(fixtures::map_10(), &RouteRequest::new("6", "4"))?;
//! assert_eq!(plan.steps, vec![6, 0, 5, 3, 4]);
//! # Ok::<(), wayfinder_lib::Error>(())
//! ```

use std::num::{IntErrorKind, ParseIntError};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, InvalidNodeReason, NodeRole, Result};
use crate::graph::{NodeId, RoadMap};
use crate::search::shortest_path;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
///
/// An empty `steps` list means the goal cannot be reached from the start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    /// Summed road length along `steps`.
    pub distance: f64,
}

impl RoutePlan {
    pub fn is_found(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Number of roads travelled.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a raw intersection argument, returning an error for values that are
/// not integers or not part of the map.
pub fn resolve_node(graph: &RoadMap, role: NodeRole, raw: &str) -> Result<NodeId> {
    let node: NodeId = raw.trim().parse().map_err(|err: ParseIntError| {
        // Too large for a node id, but still an integer.
        let reason = match err.kind() {
            IntErrorKind::PosOverflow => InvalidNodeReason::NotInGraph,
            _ => InvalidNodeReason::NotAnInteger,
        };
        Error::invalid_node(role, raw, reason)
    })?;

    if !graph.contains(node) {
        return Err(Error::invalid_node(
            role,
            raw,
            InvalidNodeReason::NotInGraph,
        ));
    }

    Ok(node)
}

/// Compute the cheapest route for a request.
pub fn plan_route(graph: &RoadMap, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_node(graph, NodeRole::Start, &request.start)?;
    let goal = resolve_node(graph, NodeRole::Goal, &request.goal)?;

    let steps = shortest_path(graph, start, goal)?;
    let distance = graph.walk_length(&steps).unwrap_or_default();
    debug!(start, goal, hops = steps.len().saturating_sub(1), distance, "planned route");

    Ok(RoutePlan {
        start,
        goal,
        steps,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn resolve_node_accepts_known_ids() {
        let map = fixtures::map_10();
        assert_eq!(resolve_node(map, NodeRole::Start, "7").unwrap(), 7);
        assert_eq!(resolve_node(map, NodeRole::Goal, " 0 ").unwrap(), 0);
    }

    #[test]
    fn resolve_node_names_the_failing_argument() {
        let map = fixtures::map_10();
        let error = resolve_node(map, NodeRole::Goal, "3.5").expect_err("not an integer");
        assert_eq!(
            error.to_string(),
            "the goal intersection \"3.5\" must be a non-negative integer"
        );

        let error = resolve_node(map, NodeRole::Start, "10").expect_err("not in map");
        assert_eq!(
            error.to_string(),
            "the start intersection \"10\" is not an intersection of the given map"
        );
    }

    #[test]
    fn route_plan_counts_hops() {
        let plan = RoutePlan {
            start: 1,
            goal: 3,
            steps: vec![1, 2, 3],
            distance: 2.0,
        };
        assert!(plan.is_found());
        assert_eq!(plan.hop_count(), 2);

        let empty = RoutePlan {
            steps: Vec::new(),
            ..plan
        };
        assert!(!empty.is_found());
        assert_eq!(empty.hop_count(), 0);
    }
}
