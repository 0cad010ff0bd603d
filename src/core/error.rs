//! Error types for Nova

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Nova operations
#[derive(Error, Debug)]
pub enum NovaError {
    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Missing required configuration key: {key}")]
    MissingConfigKey { key: String },

    #[error("Configuration key not set: {key}")]
    ConfigKeyNotSet { key: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// Dataset identifier errors
    #[error("Invalid dataset identifier: '{identifier}' (expected collection/name)")]
    InvalidDatasetId { identifier: String },

    /// Remote API errors
    #[error("{message}")]
    Api { message: String },

    #[error("Network error: {reason}")]
    Network { reason: String },

    /// Archive errors
    #[error("Invalid archive: {reason}")]
    InvalidArchive { reason: String },

    #[error("Refusing to extract archive entry outside destination: {path}")]
    UnsafeArchivePath { path: PathBuf },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl NovaError {
    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Create a new missing configuration key error
    pub fn missing_config_key(key: impl Into<String>) -> Self {
        Self::MissingConfigKey { key: key.into() }
    }

    /// Create a new config key not set error
    pub fn config_key_not_set(key: impl Into<String>) -> Self {
        Self::ConfigKeyNotSet { key: key.into() }
    }

    /// Create a new invalid dataset identifier error
    pub fn invalid_dataset_id(identifier: impl Into<String>) -> Self {
        Self::InvalidDatasetId {
            identifier: identifier.into(),
        }
    }

    /// Create a new API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network {
            reason: reason.into(),
        }
    }

    /// Create a new invalid archive error
    pub fn invalid_archive(reason: impl Into<String>) -> Self {
        Self::InvalidArchive {
            reason: reason.into(),
        }
    }
}

/// Result type alias for Nova operations
pub type Result<T> = std::result::Result<T, NovaError>;
