//! Wayfinder library entry points.
//!
//! This crate exposes the planar road map model, JSON map loading, the
//! built-in fixture maps, and the A* route search. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod fixtures;
pub mod geometry;
pub mod graph;
pub mod map_file;
pub mod routing;
pub mod search;

pub use error::{Error, InvalidNodeReason, NodeRole, Result};
pub use geometry::Point;
pub use graph::{NodeId, RoadMap, RoadMapBuilder};
pub use map_file::{load_road_map, save_road_map, MapDocument};
pub use routing::{plan_route, resolve_node, RoutePlan, RouteRequest};
pub use search::{shortest_path, Frontier, Route};
