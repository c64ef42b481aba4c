//! Wire types for the ODX Proxy gateway
//!
//! This crate holds the data structures exchanged with the gateway's
//! `/api/odoo/execute` endpoint. It performs no I/O; the `odxproxy` crate
//! builds envelopes from these types and ships them over HTTP.
//!
//! # Type Organization
//!
//! - **Actions**: [`action`] - the gateway actions and their modifier masks
//! - **Query modifiers**: [`keyword`] - fields, order, pagination and context
//! - **Instance descriptor**: [`instance`] - which Odoo database a call targets
//! - **Envelopes**: [`envelope`] - request and response bodies
//! - **Field values**: [`fields`] - helpers for Odoo's polymorphic record values
//! - **Error types**: [`error`] - protocol errors
//!
//! # Design Principles
//!
//! - **Zero I/O**: All types are pure data structures
//! - **Absent, never null**: optional request fields are omitted from the JSON body
//! - **Lenient decoding**: response identifiers may arrive as strings or numbers

#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! # Usage
//!
//! ```
//! use odxproxy_protocol::{Action, QueryModifiers};
//!
//! let keyword = QueryModifiers::new().fields(["name"]).limit(10);
//! let masked = Action::Read.mask(&keyword);
//!
//! assert_eq!(masked.fields.as_deref(), Some(&["name".to_string()][..]));
//! assert_eq!(masked.limit, None);
//! assert_eq!(keyword.limit, Some(10));
//! ```

pub mod action;
pub mod envelope;
pub mod error;
pub mod fields;
pub mod instance;
pub mod keyword;

// Re-export commonly used types at crate level
pub use action::{Action, ModifierMask};
pub use envelope::{ErrorInfo, RequestEnvelope, RequestId, ResponseEnvelope};
pub use error::{ProtocolError, Result};
pub use fields::{Many2One, Variant};
pub use instance::InstanceInfo;
pub use keyword::{QueryModifiers, RequestContext};

/// Path of the gateway endpoint that executes every action.
pub const EXECUTE_PATH: &str = "/api/odoo/execute";
