//! Tunables for the movement helper in [`crate::world`].
//!
//! Loaded from TOML; every field has a default so partial files are fine.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// A value parsed but is out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Upper bound for a single step's delta time, in seconds. Longer
    /// stalls are clamped so one step never tunnels through obstacles.
    pub max_delta_time: f64,
    /// Full two-axis correction passes run after the per-axis passes.
    pub correction_passes: usize,
    /// Emit a trace record for every contact resolved by the world.
    pub log_contacts: bool,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            max_delta_time: 0.25,
            correction_passes: 1,
            log_contacts: false,
        }
    }
}

impl CollisionConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        log::debug!("loading collision config from {}", path.display());
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_delta_time.is_finite() || self.max_delta_time < 0.0 {
            return Err(ConfigError::Invalid {
                field: "max_delta_time",
                reason: format!("must be finite and >= 0, got {}", self.max_delta_time),
            });
        }
        Ok(())
    }
}
