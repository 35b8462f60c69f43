use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::route::Route;

/// Open routes ordered by ascending `f`, ties broken by the smaller path.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, route: Route) {
        self.heap.push(FrontierEntry(route));
    }

    /// Remove the route with the lowest total cost.
    pub fn pop(&mut self) -> Option<Route> {
        self.heap.pop().map(|entry| entry.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[derive(Debug)]
struct FrontierEntry(Route);

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .0
            .total_cost()
            .total_cmp(&self.0.total_cost())
            .then_with(|| other.0.path().cmp(self.0.path()))
    }
}
