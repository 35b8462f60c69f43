//! Shared helpers for route integration tests.

use std::collections::{HashSet, VecDeque};

use wayfinder_lib::{NodeId, RoadMap};

/// Whether `goal` can be reached from `start` by following roads.
pub fn reachable(map: &RoadMap, start: NodeId, goal: NodeId) -> bool {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            return true;
        }
        for next in map.neighbours(current) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}

/// Assert that `route` is a valid walk from `start` to `goal` in `map`.
pub fn assert_valid_walk(map: &RoadMap, start: NodeId, goal: NodeId, route: &[NodeId]) {
    assert_eq!(route.first(), Some(&start), "route {route:?} must begin at {start}");
    assert_eq!(route.last(), Some(&goal), "route {route:?} must end at {goal}");
    for pair in route.windows(2) {
        assert!(
            map.is_adjacent(pair[0], pair[1]),
            "route {route:?} uses missing road {} -> {}",
            pair[0],
            pair[1]
        );
    }
    let unique: HashSet<_> = route.iter().collect();
    assert_eq!(unique.len(), route.len(), "route {route:?} revisits a node");
}
