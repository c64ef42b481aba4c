//! Gateway HTTP layer
//!
//! Sending envelopes to the gateway and decoding what comes back.

pub use decode::decode_response;
pub use gateway::{API_KEY_HEADER, Gateway};

mod decode;
mod gateway;
