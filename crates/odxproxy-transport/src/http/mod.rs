//! HTTP transport implementation
//!
//! Provides an HTTP client that implements the Transport trait.
//! Handles connection pooling and the timeout policy.

pub mod client;

pub use client::{HttpTransport, HttpTransportConfig};
