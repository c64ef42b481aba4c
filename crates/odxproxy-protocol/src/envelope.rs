//! Request and response envelopes
//!
//! Every call is a single `POST` whose body is a [`RequestEnvelope`]; the
//! gateway answers with a [`ResponseEnvelope`] carrying either a `result` or
//! an `error`.

use crate::action::Action;
use crate::instance::InstanceInfo;
use crate::keyword::QueryModifiers;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier correlating a request with its reply.
///
/// Always a string on the way out. Replies may echo it as a JSON number, in
/// which case the number's decimal form is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Create from a raw string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RequestId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for RequestId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        };
        Ok(Self(id))
    }
}

/// Outbound request body.
///
/// Built once per call and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Caller-supplied or generated identifier
    pub id: RequestId,

    /// Action to execute
    pub action: Action,

    /// Target model, e.g. `"res.partner"`
    pub model_id: String,

    /// Masked copy of the caller's modifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<QueryModifiers>,

    /// Method name, only for [`Action::CallMethod`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fn_name: Option<String>,

    /// Positional parameters
    #[serde(default)]
    pub params: Vec<Value>,

    /// Snapshot of the target instance
    pub odoo_instance: InstanceInfo,
}

impl RequestEnvelope {
    /// Encode as a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter cannot be encoded.
    pub fn to_json(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Gateway reply.
///
/// On success `result` is set; on failure `error` is. A reply carrying both
/// is a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    /// Protocol version tag, normally `"2.0"`
    pub jsonrpc: String,

    /// Echoed request identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,

    /// Typed result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,

    /// Application error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl<T> ResponseEnvelope<T> {
    /// Whether the reply reports an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Split into the typed result or the reported error.
    ///
    /// The error wins when both are present.
    pub fn into_result(self) -> Result<Option<T>, ErrorInfo> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result),
        }
    }
}

/// Error reported by the gateway or by Odoo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Numeric error code
    pub code: i64,

    /// Human-readable message
    pub message: String,

    /// Opaque details, e.g. the Odoo traceback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
