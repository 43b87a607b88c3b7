//! JSON-backed audio asset
//!
//! Stands in for the detection engine: patches are read from a file the
//! engine (or a test) wrote earlier instead of being detected live.
//!
//! ```json
//! {
//!   "name": "take-1",
//!   "settings": { "threshold_for_detection": 5.0, "max_length_of_correction": 100 },
//!   "left":  [ { "start_position": 1200, "length": 8, "error_level_at_detection": 14.2 } ],
//!   "right": []
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Audio, ChannelType, Patch, Settings};
use crate::error::{DeclickError, Result};

/// Audio asset whose analysis results come from a fixture
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureAudio {
    #[serde(default)]
    name: String,
    #[serde(default)]
    settings: Settings,
    /// `None` means the asset has no such channel (e.g. mono input)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    left: Option<Vec<Patch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    right: Option<Vec<Patch>>,
}

impl FixtureAudio {
    /// Create an asset with no channels and default settings
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replace the settings the asset arrives with
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Attach the patch list for one channel
    pub fn with_patches(mut self, channel: ChannelType, patches: Vec<Patch>) -> Self {
        match channel {
            ChannelType::Left => self.left = Some(patches),
            ChannelType::Right => self.right = Some(patches),
        }
        self
    }

    /// Parse a fixture from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a fixture from a JSON file
    ///
    /// # Errors
    /// `FileNotFound` if the path does not exist, `FileReadError` if it
    /// cannot be read, `Serialization` if the content is not a fixture.
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

        let mut fixture = Self::from_json_str(&json)?;
        if fixture.name.is_empty() {
            fixture.name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("audio")
                .to_string();
        }
        Ok(fixture)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Channels this asset carries
    pub fn channels(&self) -> Vec<ChannelType> {
        let mut channels = Vec::with_capacity(2);
        if self.left.is_some() {
            channels.push(ChannelType::Left);
        }
        if self.right.is_some() {
            channels.push(ChannelType::Right);
        }
        channels
    }
}

impl Audio for FixtureAudio {
    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn patches(&self, channel: ChannelType) -> Result<Vec<Patch>> {
        let patches = match channel {
            ChannelType::Left => self.left.as_ref(),
            ChannelType::Right => self.right.as_ref(),
        };
        patches
            .cloned()
            .ok_or(DeclickError::ChannelUnavailable { channel })
    }
}
