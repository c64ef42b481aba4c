//! Structured logging for gateway calls
//!
//! Every call is logged through this layer: `debug` when it is sent, `info`
//! when it succeeds and `warn` when it fails. Credentials are never logged.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use odxproxy_protocol::{Action, RequestEnvelope};

/// Call metadata for structured logging
#[derive(Debug, Clone)]
pub struct CallMetadata {
    /// Action being executed
    pub action: Action,
    /// Target model
    pub model: String,
    /// Request identifier
    pub id: String,
    /// Encoded body size in bytes (optional)
    pub body_size: Option<usize>,
}

impl CallMetadata {
    /// Capture metadata from an envelope
    pub fn from_envelope(envelope: &RequestEnvelope) -> Self {
        Self {
            action: envelope.action,
            model: envelope.model_id.clone(),
            id: envelope.id.to_string(),
            body_size: None,
        }
    }

    /// Set the request body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log call being sent
    pub fn log_request(&self) {
        debug!(
            action = %self.action,
            model = %self.model,
            id = %self.id,
            body_size = self.body_size,
            "Sending gateway request"
        );
    }

    /// Log successful call
    pub fn log_success(&self, elapsed: Duration) {
        info!(
            action = %self.action,
            model = %self.model,
            id = %self.id,
            elapsed_ms = elapsed.as_millis(),
            "Gateway call succeeded"
        );
    }

    /// Log failed call
    pub fn log_error(&self, elapsed: Duration, code: Option<i64>, error: &str) {
        warn!(
            action = %self.action,
            model = %self.model,
            id = %self.id,
            elapsed_ms = elapsed.as_millis(),
            code = code,
            error = %error,
            "Gateway call failed"
        );
    }
}

/// Timer for measuring call duration
#[derive(Debug)]
pub struct CallTimer {
    start: Instant,
}

impl CallTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `odxproxy=info` when `RUST_LOG` is unset. Does nothing if a
/// global subscriber is already installed.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("odxproxy=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
