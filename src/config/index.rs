//! Index configuration module.
//!
//! Sizing for the prefix index arena, including the optional node budget
//! that turns unbounded growth into a reported error.

use super::{ConfigResult, Validate};
use crate::data_structures::{PrefixIndex, PrefixIndexConfig};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Prefix index configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndexConfig {
    /// Number of nodes to pre-allocate
    pub initial_capacity: usize,

    /// Maximum number of nodes, root included (None for unbounded)
    pub max_nodes: Option<usize>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        let defaults = PrefixIndexConfig::default();
        Self {
            initial_capacity: defaults.initial_capacity,
            max_nodes: defaults.max_nodes,
        }
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity > PrefixIndex::MAX_NODES {
            return Err(ConfigError::ValueOutOfRange {
                key: "index.initial_capacity".to_string(),
                message: format!("must be at most {}", PrefixIndex::MAX_NODES),
            });
        }

        let Some(max_nodes) = self.max_nodes else {
            return Ok(());
        };

        // The root alone takes one node
        if max_nodes == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "index.max_nodes".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.initial_capacity > max_nodes {
            return Err(ConfigError::ValidationError(format!(
                "index.initial_capacity ({}) exceeds index.max_nodes ({})",
                self.initial_capacity, max_nodes
            )));
        }

        Ok(())
    }
}

impl From<&IndexConfig> for PrefixIndexConfig {
    fn from(config: &IndexConfig) -> Self {
        Self {
            initial_capacity: config.initial_capacity,
            max_nodes: config.max_nodes,
        }
    }
}
