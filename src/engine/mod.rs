//! Audio Engine Capability
//!
//! The click-detection engine is an external collaborator. This module
//! defines the narrow surface the session talks to:
//! - `Audio`: a loaded, analysed asset with mutable settings
//! - `Settings`: detection threshold and maximum correction length
//! - `ChannelType` / `Patch`: selector and result types owned by the engine

pub mod fixture;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DeclickError, Result};
use crate::session::config::{DEFAULT_MAX_LENGTH, DEFAULT_THRESHOLD};

pub use fixture::FixtureAudio;

/// Channel selector passed through to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    Left,
    Right,
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelType::Left => write!(f, "left"),
            ChannelType::Right => write!(f, "right"),
        }
    }
}

impl FromStr for ChannelType {
    type Err = DeclickError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(ChannelType::Left),
            "right" | "r" => Ok(ChannelType::Right),
            _ => Err(DeclickError::UnknownChannel {
                name: s.to_string(),
            }),
        }
    }
}

/// One detected, correctable click region.
///
/// Produced by the engine; the session hands these out without looking
/// inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    /// First damaged sample
    pub start_position: usize,
    /// Number of samples replaced by the correction
    pub length: usize,
    /// Prediction error at the moment of detection
    pub error_level_at_detection: f64,
}

/// Processing parameters held by each loaded asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub threshold_for_detection: f64,
    pub max_length_of_correction: i32,
}

impl Settings {
    pub fn new(threshold_for_detection: f64, max_length_of_correction: i32) -> Self {
        Self {
            threshold_for_detection,
            max_length_of_correction,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_MAX_LENGTH)
    }
}

/// A loaded audio asset as seen from the session.
///
/// Implemented by the detection engine. Errors returned from `patches`
/// reach the session's caller untouched.
pub trait Audio {
    /// Current processing parameters
    fn settings(&self) -> &Settings;

    /// Mutable access to the processing parameters
    fn settings_mut(&mut self) -> &mut Settings;

    /// Detected patches for one channel
    fn patches(&self, channel: ChannelType) -> Result<Vec<Patch>>;
}

impl<'a> fmt::Debug for dyn Audio + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Audio")
            .field("settings", self.settings())
            .finish_non_exhaustive()
    }
}
