//! Query modifiers sent alongside an action
//!
//! Odoo's ORM methods take keyword arguments (`fields`, `order`, `limit`,
//! `offset`, `context`) in addition to their positional parameters. The gateway
//! receives them as the `keyword` object of the request envelope.

use serde::{Deserialize, Serialize};

/// Keyword arguments for a gateway call.
///
/// Callers own their instance; the client only ever transmits a masked copy
/// (see [`Action::mask`](crate::Action::mask)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryModifiers {
    /// Field names to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Sort specification, e.g. `"name asc, id desc"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    /// Maximum number of records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of records to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Execution context (company scoping, timezone, language)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<RequestContext>,
}

impl QueryModifiers {
    /// Create an empty set of modifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fields to return.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Set the sort order.
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Set the record limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the record offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the execution context.
    pub fn context(mut self, context: RequestContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Whether no modifier is set.
    ///
    /// Empty modifiers are still sent as `"keyword": {}`.
    pub fn is_empty(&self) -> bool {
        self.fields.is_none()
            && self.order.is_none()
            && self.limit.is_none()
            && self.offset.is_none()
            && self.context.is_none()
    }
}

/// Odoo execution context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Companies the call may operate on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_company_ids: Option<Vec<i64>>,

    /// Company used when a record does not specify one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_company_id: Option<i64>,

    /// Timezone name, e.g. `"Europe/Brussels"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,

    /// Language code, e.g. `"en_US"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl RequestContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the call to the given companies.
    pub fn allowed_company_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.allowed_company_ids = Some(ids.into_iter().collect());
        self
    }

    /// Set the default company.
    pub fn default_company_id(mut self, id: i64) -> Self {
        self.default_company_id = Some(id);
        self
    }

    /// Set the timezone.
    pub fn tz(mut self, tz: impl Into<String>) -> Self {
        self.tz = Some(tz.into());
        self
    }

    /// Set the language.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_modifiers_serialize_to_empty_object() {
        let keyword = QueryModifiers::new();
        assert!(keyword.is_empty());
        assert_eq!(serde_json::to_value(&keyword).unwrap(), json!({}));
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let keyword = QueryModifiers::new()
            .limit(5)
            .context(RequestContext::new().tz("UTC"));

        assert_eq!(
            serde_json::to_value(&keyword).unwrap(),
            json!({"limit": 5, "context": {"tz": "UTC"}})
        );
    }

    #[test]
    fn test_full_context_serialization() {
        let context = RequestContext::new()
            .allowed_company_ids([1, 2])
            .default_company_id(1)
            .tz("Europe/Brussels")
            .lang("fr_BE");

        assert_eq!(
            serde_json::to_value(&context).unwrap(),
            json!({
                "allowed_company_ids": [1, 2],
                "default_company_id": 1,
                "tz": "Europe/Brussels",
                "lang": "fr_BE"
            })
        );
    }

    #[test]
    fn test_builder_sets_every_modifier() {
        let keyword = QueryModifiers::new()
            .fields(["name", "email"])
            .order("name asc")
            .limit(10)
            .offset(20);

        assert_eq!(
            keyword.fields,
            Some(vec!["name".to_string(), "email".to_string()])
        );
        assert_eq!(keyword.order.as_deref(), Some("name asc"));
        assert_eq!(keyword.limit, Some(10));
        assert_eq!(keyword.offset, Some(20));
        assert!(!keyword.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = QueryModifiers::new()
            .fields(["name"])
            .context(RequestContext::new().allowed_company_ids([1]));
        let mut copy = original.clone();

        copy.fields.as_mut().unwrap().push("email".to_string());
        copy.context
            .as_mut()
            .unwrap()
            .allowed_company_ids
            .as_mut()
            .unwrap()
            .push(2);

        assert_eq!(original.fields, Some(vec!["name".to_string()]));
        assert_eq!(
            original.context.unwrap().allowed_company_ids,
            Some(vec![1])
        );
    }
}
