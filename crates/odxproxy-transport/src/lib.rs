//! HTTP transport layer for the ODX Proxy client
//!
//! Provides a trait-based transport abstraction so the client can be driven by
//! the real HTTP stack or by an in-memory fake in tests.
//!
//! # Architecture
//!
//! - **Transport trait**: Generic interface for sending one HTTP exchange
//! - **HTTP transport**: pooled `reqwest` client with connect/read/write timeouts
//! - **Error handling**: timeouts are reported with the HTTP-style code 408
//!
//! The transport never retries, queues or caches; each call is one network
//! exchange.
//!
//! # Usage
//!
//! ```no_run
//! use odxproxy_transport::{HttpRequest, HttpTransport, Transport};
//!
//! # async fn example() -> odxproxy_transport::Result<()> {
//! let transport = HttpTransport::new()?;
//! let request = HttpRequest::new("POST", "https://gateway.odxproxy.io/api/odoo/execute")
//!     .with_header("Accept", "application/json")
//!     .with_text_body("{}");
//! let response = transport.send_http(request).await?;
//! println!("status {}", response.status);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod timeout;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use http::{HttpTransport, HttpTransportConfig};
pub use timeout::TimeoutPolicy;
pub use traits::{HttpRequest, HttpResponse, Transport};
