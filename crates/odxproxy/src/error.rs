//! Error types for the ODX Proxy client
//!
//! Every call settles with exactly one of these errors or with a result.
//! Transport failures, HTTP failures, undecodable replies and errors reported
//! by the gateway are kept apart so callers can tell them apart.

use odxproxy_protocol::{ErrorInfo, ProtocolError};
use odxproxy_transport::TransportError;
use serde_json::Value;
use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ODX Proxy client.
#[derive(Debug, Error)]
pub enum Error {
    /// The process-wide client was initialized more than once.
    #[error("OdxProxyClient has already been initialized")]
    AlreadyInitialized,

    /// The process-wide client was used before being initialized.
    #[error("OdxProxyClient has not been initialized. Call initialize() first")]
    NotInitialized,

    /// The exchange with the gateway did not complete (connect, timeout, I/O).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The gateway answered with a non-2xx status or without a readable body.
    #[error("HTTP error (status {status}): {status_text}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Reason phrase
        status_text: String,
        /// Raw body text, when it could be read
        body: Option<String>,
    },

    /// The reply body is not a valid response envelope.
    #[error("Failed to decode gateway response: {0}")]
    Decode(String),

    /// The gateway reported an error in the `error` field.
    #[error("Gateway error {code}: {message}")]
    Application {
        /// Error code
        code: i64,
        /// Error message
        message: String,
        /// Opaque details
        data: Option<Value>,
    },

    /// Client configuration was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid gateway URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A parameter could not be converted to JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request envelope could not be encoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl Error {
    /// Numeric code carried by the error, if any.
    ///
    /// Timeouts report 408, HTTP errors their status, and application errors
    /// the code sent by the gateway.
    pub fn code(&self) -> Option<i64> {
        match self {
            Error::Transport(err) => err.code().map(i64::from),
            Error::Http { status, .. } => Some(i64::from(*status)),
            Error::Application { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Check if this error is a transport timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(err) if err.is_timeout())
    }

    /// Check if this error was reported by the gateway.
    pub fn is_application(&self) -> bool {
        matches!(self, Error::Application { .. })
    }

    /// Check if this error concerns the process-wide client lifecycle.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::AlreadyInitialized | Error::NotInitialized)
    }
}

impl From<ErrorInfo> for Error {
    fn from(info: ErrorInfo) -> Self {
        Error::Application {
            code: info.code,
            message: info.message,
            data: info.data,
        }
    }
}
