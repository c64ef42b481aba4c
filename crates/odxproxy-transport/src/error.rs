//! Transport error types

use std::time::Duration;
use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// HTTP-style status code reported for timeouts.
pub const TIMEOUT_CODE: u16 = 408;

/// Errors that can occur in transport operations
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request or the response did not complete within the timeout policy
    #[error("Request Timeout: {message}")]
    Timeout {
        /// The budget that elapsed
        after: Duration,
        /// Underlying cause
        message: String,
    },

    /// The connection could not be established
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other failure while exchanging the request
    #[error("HTTP error: {0}")]
    Http(String),

    /// The request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl TransportError {
    /// HTTP-style status code for this failure.
    ///
    /// Timeouts map to 408; other transport failures have no status.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Timeout { .. } => Some(TIMEOUT_CODE),
            _ => None,
        }
    }

    /// Whether this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Classify a `reqwest` failure.
    pub(crate) fn from_reqwest(err: reqwest::Error, budget: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                after: budget,
                message: err.to_string(),
            }
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_code() {
        let err = TransportError::Timeout {
            after: Duration::from_secs(45),
            message: "operation timed out".to_string(),
        };

        assert_eq!(err.code(), Some(408));
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "Request Timeout: operation timed out");
    }

    #[test]
    fn test_other_errors_have_no_code() {
        assert_eq!(TransportError::Connection("refused".into()).code(), None);
        assert_eq!(TransportError::Http("reset".into()).code(), None);
        assert!(!TransportError::Client("tls".into()).is_timeout());
    }
}
