//! Error types for the settings crate.

use cabinetkit_core::CabinetError;
use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// The configuration file could not be saved.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration directory could not be resolved.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

impl SettingsError {
    /// Wrap a rejected value under the key it was read from
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SettingsError::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Re-key a construction validation failure
    pub fn from_cabinet(key: &str, err: CabinetError) -> Self {
        Self::invalid(key, err.to_string())
    }
}

/// Result type for settings operations.
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
