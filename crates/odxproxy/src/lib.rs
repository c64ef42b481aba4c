//! # odxproxy
//!
//! Async Rust client for Odoo through the ODX Proxy gateway:
//! - Typed `search`, `search_read`, `read`, `fields_get`, `search_count`,
//!   `create`, `write`, `unlink` and `call_method` operations
//! - Per-action masking of query modifiers
//! - One pooled HTTP connection per client, with connect/read/write timeouts
//! - Distinct errors for transport, HTTP, decoding and gateway failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use odxproxy::{Client, ClientConfig, InstanceInfo, QueryModifiers, RequestContext};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new(InstanceInfo::new(
//!         "https://erp.example.com",
//!         2,
//!         "prod",
//!         "odoo-api-key",
//!     ))?;
//!     let client = Client::new(config)?;
//!
//!     let keyword = QueryModifiers::new().context(RequestContext::new().tz("UTC"));
//!     let ids = client
//!         .records()
//!         .search("res.partner", vec![json!([["is_company", "=", true]])], &keyword, None)
//!         .await?;
//!
//!     println!("{:?}", ids.result);
//!     Ok(())
//! }
//! ```
//!
//! ## Process-wide client
//!
//! ```rust,no_run
//! use odxproxy::{ClientConfig, QueryModifiers};
//!
//! # async fn example() -> Result<(), odxproxy::Error> {
//! odxproxy::initialize(ClientConfig::from_env()?)?;
//!
//! let count = odxproxy::search_count("res.partner", vec![], &QueryModifiers::new(), None).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_GATEWAY_URL};
pub use envelope::{CallSpec, EnvelopeBuilder};
pub use error::{Error, Result};
pub use global::{
    call_method, create, current, fields_get, initialize, read, search, search_count, search_read,
    unlink, write,
};
pub use id::{IdGenerator, UuidV7Generator};
pub use resources::Records;

pub use odxproxy_protocol::{
    Action, ErrorInfo, InstanceInfo, Many2One, ModifierMask, QueryModifiers, RequestContext,
    RequestEnvelope, RequestId, ResponseEnvelope, Variant,
};
pub use odxproxy_transport::{TimeoutPolicy, Transport};

// Module declarations
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod global;
pub mod http;
pub mod id;
pub mod observability;
pub mod resources;

#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub use observability::init_tracing;

// Re-export key dependencies for convenience
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use odxproxy::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        Client, ClientConfig, Error, InstanceInfo, Many2One, QueryModifiers, RequestContext,
        ResponseEnvelope, Result, Variant,
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod property_tests;
