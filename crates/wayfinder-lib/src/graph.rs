use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Numeric identifier for an intersection.
pub type NodeId = u32;

/// Undirected road map whose intersections carry planar coordinates.
///
/// A `RoadMap` can only be produced through a validating constructor, so every
/// value upholds the invariants the search relies on: each intersection has a
/// finite position, every road endpoint is a known intersection, no
/// intersection is its own neighbour, and adjacency is symmetric. Road cost is
/// the Euclidean distance between the two endpoints.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    positions: Arc<BTreeMap<NodeId, Point>>,
    adjacency: Arc<BTreeMap<NodeId, BTreeSet<NodeId>>>,
}

impl RoadMap {
    /// Validate and assemble a road map from its two mappings.
    ///
    /// Intersections missing from `adjacency` are treated as isolated.
    pub fn new(
        positions: BTreeMap<NodeId, Point>,
        mut adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    ) -> Result<Self> {
        for (&id, position) in &positions {
            if !position.is_finite() {
                return Err(Error::invalid_graph(format!(
                    "intersection {id} has a non-finite position ({}, {})",
                    position.x, position.y
                )));
            }
        }

        for (&id, neighbours) in &adjacency {
            if !positions.contains_key(&id) {
                return Err(Error::invalid_graph(format!(
                    "roads are listed for unknown intersection {id}"
                )));
            }
            for &neighbour in neighbours {
                if neighbour == id {
                    return Err(Error::invalid_graph(format!(
                        "intersection {id} lists itself as a neighbour"
                    )));
                }
                let Some(back) = adjacency.get(&neighbour) else {
                    return Err(Error::invalid_graph(format!(
                        "road {id} -> {neighbour} points at an unknown intersection"
                    )));
                };
                if !back.contains(&id) {
                    return Err(Error::invalid_graph(format!(
                        "road {id} -> {neighbour} has no matching road {neighbour} -> {id}"
                    )));
                }
            }
        }

        for &id in positions.keys() {
            adjacency.entry(id).or_default();
        }

        Ok(Self {
            positions: Arc::new(positions),
            adjacency: Arc::new(adjacency),
        })
    }

    /// Whether `node` is an intersection of this map.
    pub fn contains(&self, node: NodeId) -> bool {
        self.positions.contains_key(&node)
    }

    /// Position of the given intersection.
    pub fn position(&self, node: NodeId) -> Option<Point> {
        self.positions.get(&node).copied()
    }

    /// Return the neighbours of a given intersection in ascending id order.
    pub fn neighbours(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().copied())
    }

    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbours| neighbours.contains(&b))
    }

    /// All intersection ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.positions.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of undirected roads.
    pub fn road_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Intersections without any road.
    pub fn isolated_nodes(&self) -> Vec<NodeId> {
        self.adjacency
            .iter()
            .filter(|(_, neighbours)| neighbours.is_empty())
            .map(|(&id, _)| id)
            .collect()
    }

    /// Length of a walk through the map, or `None` if a step is not a road.
    pub fn walk_length(&self, walk: &[NodeId]) -> Option<f64> {
        let mut total = 0.0;
        for pair in walk.windows(2) {
            if !self.is_adjacent(pair[0], pair[1]) {
                return None;
            }
            let from = self.position(pair[0])?;
            let to = self.position(pair[1])?;
            total += from.distance_to(&to);
        }
        Some(total)
    }
}

/// Incremental builder for [`RoadMap`] that records roads in both directions.
#[derive(Debug, Default, Clone)]
pub struct RoadMapBuilder {
    positions: BTreeMap<NodeId, Point>,
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl RoadMapBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intersection(mut self, id: NodeId, x: f64, y: f64) -> Self {
        self.positions.insert(id, Point::new(x, y));
        self
    }

    pub fn road(mut self, a: NodeId, b: NodeId) -> Self {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        self
    }

    pub fn build(self) -> Result<RoadMap> {
        RoadMap::new(self.positions, self.adjacency)
    }
}
