// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. The main.rs dispatches to
// these handlers, keeping the entry point focused on parsing and coordination.

pub mod fixtures;
pub mod route;
pub mod validate;

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use wayfinder_lib::{fixtures as builtin, load_road_map, RoadMap};

/// Where the road map for a command comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    /// JSON map file on disk.
    File(PathBuf),
    /// Built-in fixture by name.
    Fixture(String),
}

impl MapSource {
    /// Pick the map source: an explicit file wins over the fixture name.
    pub fn resolve(map: Option<PathBuf>, fixture: &str) -> Self {
        match map {
            Some(path) => MapSource::File(path),
            None => MapSource::Fixture(fixture.to_string()),
        }
    }

    /// Label used in command output.
    pub fn label(&self) -> String {
        match self {
            MapSource::File(path) => path.display().to_string(),
            MapSource::Fixture(name) => name.clone(),
        }
    }

    /// Load the road map this source points at.
    pub fn load(&self) -> Result<Cow<'static, RoadMap>> {
        debug!(source = %self.label(), "resolving road map");
        match self {
            MapSource::File(path) => {
                let map = load_road_map(path)
                    .with_context(|| format!("failed to load road map from {}", path.display()))?;
                Ok(Cow::Owned(map))
            }
            MapSource::Fixture(name) => builtin::by_name(name).map(Cow::Borrowed).ok_or_else(|| {
                anyhow!(
                    "unknown fixture '{}'; expected one of: {}",
                    name,
                    builtin::FIXTURE_NAMES.join(", ")
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_map_wins_over_fixture() {
        let source = MapSource::resolve(Some(PathBuf::from("roads.json")), "map-40");
        assert_eq!(source, MapSource::File(PathBuf::from("roads.json")));
        assert_eq!(
            MapSource::resolve(None, "map-40"),
            MapSource::Fixture("map-40".to_string())
        );
    }

    #[test]
    fn fixtures_load_without_io() {
        let map = MapSource::Fixture("map-40".to_string()).load().unwrap();
        assert_eq!(map.node_count(), 40);
    }

    #[test]
    fn unknown_fixture_lists_alternatives() {
        let error = MapSource::Fixture("map-3".to_string())
            .load()
            .expect_err("unknown fixture");
        assert!(error.to_string().contains("map-10, map-40"));
    }
}
