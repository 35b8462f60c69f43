//! JSON persistence for road maps.
//!
//! A map file holds an `intersections` object keyed by decimal node id with
//! `[x, y]` positions, and a `roads` array whose entry `i` lists the
//! neighbours of intersection `i`:
//!
//! ```json
//! {
//!   "intersections": { "0": [0.78, 0.69], "1": [0.76, 0.33] },
//!   "roads": [[1], [0]]
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::graph::{NodeId, RoadMap};

/// On-disk representation of a [`RoadMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    pub intersections: BTreeMap<String, [f64; 2]>,
    pub roads: Vec<Vec<NodeId>>,
}

impl MapDocument {
    fn into_road_map(self) -> Result<RoadMap> {
        let mut positions = BTreeMap::new();
        for (key, [x, y]) in self.intersections {
            let id: NodeId = key.trim().parse().map_err(|_| {
                Error::invalid_graph(format!(
                    "intersection key {key:?} is not a non-negative integer"
                ))
            })?;
            if positions.insert(id, Point::new(x, y)).is_some() {
                return Err(Error::invalid_graph(format!(
                    "intersection key {key:?} duplicates id {id}"
                )));
            }
        }

        let expected = positions.len();
        for (index, &id) in positions.keys().enumerate() {
            if u64::from(id) != index as u64 {
                return Err(Error::invalid_graph(format!(
                    "intersection ids must be contiguous from 0; found {id} at position {index}"
                )));
            }
        }
        if self.roads.len() != expected {
            return Err(Error::invalid_graph(format!(
                "expected {expected} road lists, one per intersection, found {}",
                self.roads.len()
            )));
        }

        let adjacency: BTreeMap<NodeId, BTreeSet<NodeId>> = self
            .roads
            .into_iter()
            .zip(positions.keys().copied())
            .map(|(neighbours, id)| (id, neighbours.into_iter().collect()))
            .collect();

        RoadMap::new(positions, adjacency)
    }
}

impl From<&RoadMap> for MapDocument {
    fn from(map: &RoadMap) -> Self {
        let mut intersections = BTreeMap::new();
        let mut roads = Vec::with_capacity(map.node_count());
        for id in map.nodes() {
            if let Some(position) = map.position(id) {
                intersections.insert(id.to_string(), [position.x, position.y]);
            }
            roads.push(map.neighbours(id).collect());
        }
        Self {
            intersections,
            roads,
        }
    }
}

impl RoadMap {
    /// Build a road map from an already-parsed JSON value.
    ///
    /// Any value that is not a map document (numbers, arrays, `null`, missing
    /// fields) is reported as [`Error::InvalidGraph`].
    pub fn from_json_value(value: Value) -> Result<Self> {
        let document: MapDocument = serde_json::from_value(value).map_err(|err| {
            Error::invalid_graph(format!(
                "expected an object with `intersections` and `roads`: {err}"
            ))
        })?;
        document.into_road_map()
    }

    /// Parse a road map from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    /// Render the map as pretty-printed JSON.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&MapDocument::from(self))?)
    }
}

/// Load a road map from a JSON file on disk.
pub fn load_road_map(path: &Path) -> Result<RoadMap> {
    if !path.exists() {
        return Err(Error::MapNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading road map");
    let text = fs::read_to_string(path)?;
    let map = RoadMap::from_json_str(&text)?;

    info!(
        path = %path.display(),
        intersections = map.node_count(),
        roads = map.road_count(),
        "loaded road map"
    );
    let isolated = map.isolated_nodes();
    if !isolated.is_empty() {
        warn!(?isolated, "road map contains intersections without roads");
    }

    Ok(map)
}

/// Write a road map to disk as JSON.
pub fn save_road_map(map: &RoadMap, path: &Path) -> Result<()> {
    fs::write(path, map.to_json_string_pretty()?)?;
    debug!(path = %path.display(), "saved road map");
    Ok(())
}
