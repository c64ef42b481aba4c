//! Per-action operations
//!
//! Thin typed callers over [`Client::execute`](crate::Client::execute).

pub mod records;

pub use records::Records;
