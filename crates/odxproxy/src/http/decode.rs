//! Response decoding
//!
//! The body is first read as an untyped envelope so that a populated `error`
//! is reported even when `result` would not fit `T`.

use odxproxy_protocol::ResponseEnvelope;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Decode a gateway reply into a typed envelope.
///
/// # Errors
///
/// - [`Error::Application`] when the `error` field is populated, whatever
///   `result` holds
/// - [`Error::Decode`] when the body is not an envelope or `result` does not
///   match `T`
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<ResponseEnvelope<T>> {
    let raw: ResponseEnvelope<Value> = serde_json::from_slice(body)
        .map_err(|e| Error::Decode(format!("invalid response envelope: {}", e)))?;

    if let Some(error) = raw.error {
        return Err(error.into());
    }

    let result = match raw.result {
        Some(value) => Some(
            serde_json::from_value(value)
                .map_err(|e| Error::Decode(format!("unexpected result shape: {}", e)))?,
        ),
        None => None,
    };

    Ok(ResponseEnvelope {
        jsonrpc: raw.jsonrpc,
        id: raw.id,
        result,
        error: None,
    })
}
