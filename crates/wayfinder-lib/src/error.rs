use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Wayfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which endpoint of a route request an argument belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Start,
    Goal,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NodeRole::Start => "start",
            NodeRole::Goal => "goal",
        };
        f.write_str(value)
    }
}

/// Why a node argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNodeReason {
    /// The value does not parse as a non-negative integer.
    NotAnInteger,
    /// The value is an integer but the map has no such intersection.
    NotInGraph,
}

impl fmt::Display for InvalidNodeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            InvalidNodeReason::NotAnInteger => "must be a non-negative integer",
            InvalidNodeReason::NotInGraph => "is not an intersection of the given map",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied map does not have the shape required for routing.
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    /// A start or goal argument was rejected before any search work began.
    #[error("the {role} intersection {value:?} {reason}")]
    InvalidNode {
        role: NodeRole,
        value: String,
        reason: InvalidNodeReason,
    },

    /// Map file could not be located at the resolved path.
    #[error("map file not found at {path}")]
    MapNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON syntax errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_graph(reason: impl Into<String>) -> Self {
        Error::InvalidGraph {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_node(
        role: NodeRole,
        value: impl Into<String>,
        reason: InvalidNodeReason,
    ) -> Self {
        Error::InvalidNode {
            role,
            value: value.into(),
            reason,
        }
    }
}
