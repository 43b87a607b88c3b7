//! Session configuration
//!
//! Fallback parameters used while no audio is loaded, and written into
//! every asset on load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DeclickError, Result};

/// Default detection threshold.
pub const DEFAULT_THRESHOLD: f64 = 10.0;

/// Default maximum correction length, in engine units.
pub const DEFAULT_MAX_LENGTH: i32 = 250;

/// Fallback parameters for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Threshold reported with no audio loaded and applied on each load.
    pub default_threshold: f64,

    /// Max correction length reported with no audio loaded and applied on each load.
    pub default_max_length: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_THRESHOLD,
            default_max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl SessionConfig {
    /// Parse a config from JSON text. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DeclickError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let json = fs::read_to_string(path).map_err(|e| DeclickError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        if !self.default_threshold.is_finite() {
            return Err(DeclickError::InvalidConfig {
                reason: format!(
                    "default_threshold must be finite, got {}",
                    self.default_threshold
                ),
            });
        }
        if self.default_max_length < 0 {
            return Err(DeclickError::InvalidConfig {
                reason: format!(
                    "default_max_length must not be negative, got {}",
                    self.default_max_length
                ),
            });
        }
        Ok(())
    }
}
