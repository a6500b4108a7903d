//! Dictionary configuration module.
//!
//! Controls which word lists are loaded at startup and how their lines are
//! turned into words.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word list files loaded in order, one word per line
    pub paths: Vec<PathBuf>,

    /// Whether to strip surrounding whitespace from each line
    pub trim: bool,

    /// Whether blank lines are skipped instead of inserting the empty word
    pub skip_blank_lines: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            trim: true,
            skip_blank_lines: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = self.paths.iter().find(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "dictionary.paths contains an empty path: {path:?}"
            )));
        }
        Ok(())
    }
}
