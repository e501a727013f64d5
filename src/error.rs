//! Error types for palletflow.
//!
//! Errors only arise at the configuration boundary: parsing or validating
//! plant constants and analysis parameters. The computation itself is pure
//! and total; degenerate arithmetic resolves to sentinel values, never to
//! an error.

use thiserror::Error;

/// Result type alias for palletflow operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Unified error type for all palletflow operations.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FlowError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}
