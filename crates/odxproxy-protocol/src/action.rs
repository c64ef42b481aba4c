//! Gateway actions and their modifier masks
//!
//! Every action accepts a fixed subset of [`QueryModifiers`]. Fields outside
//! that subset are cleared on the copy that goes on the wire. Only `search`,
//! `read` and `fields_get` clear anything; every other action forwards the
//! caller's modifiers untouched.

use crate::error::ProtocolError;
use crate::keyword::QueryModifiers;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An operation the gateway can execute against a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Return the ids of matching records
    Search,
    /// Search and read matching records in one call
    SearchRead,
    /// Read records by id
    Read,
    /// Describe the fields of a model
    FieldsGet,
    /// Count matching records
    SearchCount,
    /// Create a record
    Create,
    /// Update records by id
    Write,
    /// Delete records by id
    Unlink,
    /// Call an arbitrary model method
    CallMethod,
}

impl Action {
    /// All actions, in table order.
    pub const ALL: [Action; 9] = [
        Action::Search,
        Action::SearchRead,
        Action::Read,
        Action::FieldsGet,
        Action::SearchCount,
        Action::Create,
        Action::Write,
        Action::Unlink,
        Action::CallMethod,
    ];

    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Search => "search",
            Action::SearchRead => "search_read",
            Action::Read => "read",
            Action::FieldsGet => "fields_get",
            Action::SearchCount => "search_count",
            Action::Create => "create",
            Action::Write => "write",
            Action::Unlink => "unlink",
            Action::CallMethod => "call_method",
        }
    }

    /// Modifier fields this action transmits.
    pub fn allowed_modifiers(&self) -> ModifierMask {
        match self {
            Action::Search | Action::FieldsGet => ModifierMask::CONTEXT_ONLY,
            Action::Read => ModifierMask::FIELDS_AND_CONTEXT,
            Action::SearchRead
            | Action::SearchCount
            | Action::Create
            | Action::Write
            | Action::Unlink
            | Action::CallMethod => ModifierMask::ALL,
        }
    }

    /// Copy `keyword` and clear every field this action does not allow.
    ///
    /// The caller's value is never modified.
    pub fn mask(&self, keyword: &QueryModifiers) -> QueryModifiers {
        self.allowed_modifiers().apply(keyword.clone())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownAction(s.to_string()))
    }
}

/// Allow-list over the [`QueryModifiers`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierMask {
    /// Keep `fields`
    pub fields: bool,
    /// Keep `order`
    pub order: bool,
    /// Keep `limit`
    pub limit: bool,
    /// Keep `offset`
    pub offset: bool,
    /// Keep `context`
    pub context: bool,
}

impl ModifierMask {
    /// Every modifier passes through.
    pub const ALL: ModifierMask = ModifierMask {
        fields: true,
        order: true,
        limit: true,
        offset: true,
        context: true,
    };

    /// Only `fields` and `context` pass through.
    pub const FIELDS_AND_CONTEXT: ModifierMask = ModifierMask {
        fields: true,
        order: false,
        limit: false,
        offset: false,
        context: true,
    };

    /// Only `context` passes through.
    pub const CONTEXT_ONLY: ModifierMask = ModifierMask {
        fields: false,
        order: false,
        limit: false,
        offset: false,
        context: true,
    };

    /// Clear the fields this mask does not allow.
    pub fn apply(&self, mut keyword: QueryModifiers) -> QueryModifiers {
        if !self.fields {
            keyword.fields = None;
        }
        if !self.order {
            keyword.order = None;
        }
        if !self.limit {
            keyword.limit = None;
        }
        if !self.offset {
            keyword.offset = None;
        }
        if !self.context {
            keyword.context = None;
        }
        keyword
    }
}
