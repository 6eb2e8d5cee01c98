//! Error types for title suggestion.

use thiserror::Error;

/// Unified error type for suggestion operations.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
