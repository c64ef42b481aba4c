//! Odoo record field values
//!
//! Odoo encodes "no value" as `false` for most field types, and relational
//! (many2one) fields as a `[id, display_name]` pair. These wrappers let record
//! structs decode such values without custom code at every call site.
//!
//! ```
//! use odxproxy_protocol::{Many2One, Variant};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Partner {
//!     name: String,
//!     company_id: Many2One,
//!     email: Variant<String>,
//! }
//!
//! let partner: Partner = serde_json::from_str(
//!     r#"{"name": "Guest", "company_id": false, "email": false}"#,
//! ).unwrap();
//!
//! assert!(!partner.company_id.is_set());
//! assert_eq!(partner.email.value(), None);
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A many2one relational value.
///
/// Decodes `[id, "name"]`, and treats `false`, `null`, `[]` or any other
/// shape as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Many2One {
    /// Id of the related record
    pub id: Option<i64>,
    /// Display name of the related record
    pub name: Option<String>,
}

impl Many2One {
    /// A set relation.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }

    /// Whether the relation points at a record.
    pub fn is_set(&self) -> bool {
        self.id.is_some()
    }
}

impl<'de> Deserialize<'de> for Many2One {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Value::Array(items) = Value::deserialize(deserializer)? else {
            return Ok(Self::default());
        };

        let id = items.first().and_then(Value::as_i64);
        let name = items.get(1).and_then(Value::as_str).map(str::to_string);
        Ok(Self { id, name })
    }
}

impl Serialize for Many2One {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.id {
            Some(id) => (id, &self.name).serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// A value Odoo may replace with `false` when empty.
///
/// `false`, `null`, and values that do not decode as `T` all become
/// [`Variant::none`]. Add `#[serde(default)]` on the field when the key
/// itself may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant<T>(Option<T>);

impl<T> Variant<T> {
    /// A present value.
    pub fn some(value: T) -> Self {
        Self(Some(value))
    }

    /// An absent value.
    pub fn none() -> Self {
        Self(None)
    }

    /// Borrow the value, if present.
    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Consume into an `Option`.
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Variant<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> From<Option<T>> for Variant<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Variant<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null | Value::Bool(false) => Ok(Self(None)),
            other => Ok(Self(serde_json::from_value(other).ok())),
        }
    }
}

impl<T: Serialize> Serialize for Variant<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}
