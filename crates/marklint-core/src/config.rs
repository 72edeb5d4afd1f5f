//! Configuration file loading for marklint.
//!
//! Reads `marklint.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::MetadataError;

/// Top-level marklint configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarklintConfig {
    #[serde(default)]
    pub rules: RuleConfig,
    /// Interface names excluded from validation entirely.
    #[serde(default)]
    pub ignore_interfaces: Vec<String>,
}

/// Per-rule toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_true")]
    pub conflict: bool,
    #[serde(default = "default_true")]
    pub completeness: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            conflict: true,
            completeness: true,
        }
    }
}

impl MarklintConfig {
    /// Load config from a `marklint.json` file. A missing file yields defaults;
    /// a present-but-malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| MetadataError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| MetadataError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn is_ignored(&self, interface: &str) -> bool {
        self.ignore_interfaces.iter().any(|i| i == interface)
    }
}
