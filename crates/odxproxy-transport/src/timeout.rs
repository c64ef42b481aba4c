//! Timeout policy for gateway calls

use std::time::Duration;

/// Connect, write and read budgets for one exchange.
///
/// # Default Configuration
///
/// - `connect`: 10s
/// - `write`: 45s
/// - `read`: 45s
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutPolicy {
    /// Budget for establishing the connection
    pub connect: Duration,
    /// Budget for sending the request
    pub write: Duration,
    /// Budget for each read while waiting for and receiving the response
    pub read: Duration,
}

impl Default for TimeoutPolicy {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            write: Duration::from_secs(45),
            read: Duration::from_secs(45),
        }
    }
}

impl TimeoutPolicy {
    /// Create a policy from explicit budgets.
    pub fn new(connect: Duration, write: Duration, read: Duration) -> Self {
        Self {
            connect,
            write,
            read,
        }
    }

    /// Wall-clock cap on a whole exchange: `write + read`.
    ///
    /// `reqwest` has no separate write timeout, so the write budget is
    /// enforced as part of this total. The cap runs from the start of the
    /// request, connect time included, and cuts off a reply that is still
    /// streaming when it expires even if no single read stalled for `read`.
    pub fn exchange(&self) -> Duration {
        self.write + self.read
    }
}
