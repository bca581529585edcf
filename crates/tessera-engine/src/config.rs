//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use tessera_core::types::Currency;

use crate::error::EngineError;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine name, used in logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Calculate targets in parallel
    #[serde(default)]
    pub parallel: bool,

    /// Refuse to start unless every target type has a calculation function
    #[serde(default = "default_true")]
    pub strict_registry: bool,

    /// Reporting currency for every target, overriding each function's default
    pub reporting_currency: Option<Currency>,
}

fn default_name() -> String {
    "tessera".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            parallel: false,
            strict_registry: true,
            reporting_currency: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, EngineError> {
        toml::from_str(content).map_err(|e| EngineError::ConfigError(e.to_string()))
    }
}
