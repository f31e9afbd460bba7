//! Replay configuration
//!
//! Capacity settings with TOML support for hosts that keep their settings
//! on disk. Misconfiguration is rejected up front, so the buffer never has
//! to range-check its indices at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default history capacity in keyframes (~8 seconds at 60 ticks/s)
pub const DEFAULT_CAPACITY: usize = 500;

/// Replay buffer configuration
///
/// Serialized to/from TOML so host applications can carry it in their
/// settings files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Maximum number of keyframes held in history
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl ReplayConfig {
    /// Create a config with an explicit capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check the config for values the buffer cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Replay configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A capacity of zero would leave every index computation undefined
    #[error("replay capacity must be greater than zero")]
    ZeroCapacity,
    /// TOML syntax or type error
    #[error("failed to parse replay config: {0}")]
    Parse(#[from] toml::de::Error),
}
