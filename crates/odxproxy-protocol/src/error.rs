//! Error types for protocol operations
//!
//! Provides error types for encoding requests and parsing action names.

use thiserror::Error;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors that can occur during protocol operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The request envelope could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An action name that the gateway does not know
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
