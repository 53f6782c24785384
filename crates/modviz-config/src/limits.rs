//! Bounds on traversal work per call.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// CPU bounds for the graph traversals.
///
/// These cap the work a single query can do on pathological graphs; hitting a
/// bound yields a partial result, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalLimits {
    /// Maximum depth when collecting the subgraph under a filter node.
    #[serde(default = "default_subgraph_max_depth")]
    pub subgraph_max_depth: usize,

    /// Maximum depth when enumerating paths between modules.
    #[serde(default = "default_path_max_depth")]
    pub path_max_depth: usize,

    /// How many search hits to use as pathfinding start candidates.
    #[serde(default = "default_start_candidates")]
    pub start_candidates: usize,

    /// How many search hits to use as pathfinding end candidates.
    #[serde(default = "default_end_candidates")]
    pub end_candidates: usize,
}

pub fn default_subgraph_max_depth() -> usize {
    20
}

pub fn default_path_max_depth() -> usize {
    40
}

pub fn default_start_candidates() -> usize {
    2
}

pub fn default_end_candidates() -> usize {
    4
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self {
            subgraph_max_depth: default_subgraph_max_depth(),
            path_max_depth: default_path_max_depth(),
            start_candidates: default_start_candidates(),
            end_candidates: default_end_candidates(),
        }
    }
}

impl TraversalLimits {
    /// Reject zero bounds, which would make every query empty.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("limits.subgraph_max_depth", self.subgraph_max_depth),
            ("limits.path_max_depth", self.path_max_depth),
            ("limits.start_candidates", self.start_candidates),
            ("limits.end_candidates", self.end_candidates),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    hint: Some("must be at least 1".to_string()),
                });
            }
        }
        Ok(())
    }
}
