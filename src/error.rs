//! Error handling for the de-click session
//!
//! The session itself never fails; these errors come from the engine
//! behind the `Audio` trait, from observers, and from reading config or
//! fixture files.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::ChannelType;

/// Result type alias for de-click operations
pub type Result<T> = std::result::Result<T, DeclickError>;

/// Main error type for de-click operations
#[derive(Error, Debug)]
pub enum DeclickError {
    // Engine Errors
    #[error("Channel not available: {channel}")]
    ChannelUnavailable { channel: ChannelType },

    #[error("Unknown channel: '{name}' (expected left or right)")]
    UnknownChannel { name: String },

    #[error("Engine error: {reason}")]
    Engine { reason: String },

    // Observer Errors
    #[error("Observer failed: {reason}")]
    Observer { reason: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Config Errors
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DeclickError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            DeclickError::ChannelUnavailable { .. } => "CHANNEL_UNAVAILABLE",
            DeclickError::UnknownChannel { .. } => "UNKNOWN_CHANNEL",
            DeclickError::Engine { .. } => "ENGINE_ERROR",
            DeclickError::Observer { .. } => "OBSERVER_ERROR",
            DeclickError::FileNotFound { .. } => "FILE_NOT_FOUND",
            DeclickError::FileReadError { .. } => "FILE_READ_ERROR",
            DeclickError::InvalidConfig { .. } => "INVALID_CONFIG",
            DeclickError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            DeclickError::ChannelUnavailable { .. } => {
                Some("The loaded audio may be mono. Query the left channel instead.")
            }
            DeclickError::FileNotFound { .. } => Some("Check the file path and try again."),
            DeclickError::InvalidConfig { .. } => {
                Some("Remove the offending field to fall back to the built-in default.")
            }
            DeclickError::Serialization(_) => Some("Check that the file is valid JSON."),
            _ => None,
        }
    }
}
