use crate::geometry::Point;
use crate::graph::NodeId;

/// A partial path through the map together with its A* bookkeeping.
///
/// `g` is the accumulated road length, `h` the straight-line distance from the
/// last intersection to the goal, and `f = g + h`. Routes are forked with
/// [`Clone`] before each expansion so frontier entries never share a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    path: Vec<NodeId>,
    g: f64,
    h: f64,
    f: f64,
    current: Point,
    goal: Point,
}

impl Route {
    /// Start a route at `start`, aimed at the intersection located at `goal`.
    pub fn new(start: NodeId, start_position: Point, goal: Point) -> Self {
        let h = start_position.distance_to(&goal);
        Self {
            path: vec![start],
            g: 0.0,
            h,
            f: h,
            current: start_position,
            goal,
        }
    }

    /// Extend the route by one road to `next`.
    #[must_use]
    pub fn extend(mut self, next: NodeId, next_position: Point) -> Self {
        self.path.push(next);
        self.g += self.current.distance_to(&next_position);
        self.h = next_position.distance_to(&self.goal);
        self.f = self.g + self.h;
        self.current = next_position;
        self
    }

    /// Estimated total cost `f`.
    pub fn total_cost(&self) -> f64 {
        self.f
    }

    /// Road length travelled so far (`g`).
    pub fn cost_so_far(&self) -> f64 {
        self.g
    }

    /// Straight-line distance remaining to the goal (`h`).
    pub fn estimate(&self) -> f64 {
        self.h
    }

    /// Last intersection on the route.
    pub fn last(&self) -> NodeId {
        // The path is seeded with the start node and only ever grows.
        self.path[self.path.len() - 1]
    }

    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn into_path(self) -> Vec<NodeId> {
        self.path
    }
}
