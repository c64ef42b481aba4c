//! Request envelope construction
//!
//! A [`CallSpec`] describes what to run (action, model, parameters); the
//! [`EnvelopeBuilder`] turns it into a [`RequestEnvelope`] by masking a copy of
//! the caller's modifiers, settling the identifier and attaching the instance.

use odxproxy_protocol::{Action, InstanceInfo, QueryModifiers, RequestEnvelope, RequestId};
use serde_json::{Value, json};

use crate::id::IdGenerator;

/// Action, model and shaped positional parameters of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSpec {
    /// Action to execute
    pub action: Action,
    /// Target model
    pub model: String,
    /// Method name, only set for [`Action::CallMethod`]
    pub fn_name: Option<String>,
    /// Positional parameters, already shaped for the action
    pub params: Vec<Value>,
}

impl CallSpec {
    fn new(action: Action, model: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            action,
            model: model.into(),
            fn_name: None,
            params,
        }
    }

    /// `search` with a domain passed through unchanged.
    pub fn search(model: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(Action::Search, model, params)
    }

    /// `search_read` with a domain passed through unchanged.
    pub fn search_read(model: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(Action::SearchRead, model, params)
    }

    /// `read`: the id list is the sole parameter.
    pub fn read(model: impl Into<String>, ids: &[i64]) -> Self {
        Self::new(Action::Read, model, vec![json!(ids)])
    }

    /// `fields_get`: never sends parameters.
    pub fn fields_get(model: impl Into<String>) -> Self {
        Self::new(Action::FieldsGet, model, Vec::new())
    }

    /// `search_count` with a domain passed through unchanged.
    pub fn search_count(model: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(Action::SearchCount, model, params)
    }

    /// `create` with the parameters passed through unchanged.
    pub fn create(model: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(Action::Create, model, params)
    }

    /// `write`: sends `[ids, values]`.
    pub fn write(model: impl Into<String>, ids: &[i64], values: Value) -> Self {
        Self::new(Action::Write, model, vec![json!(ids), values])
    }

    /// `unlink`: sends `[ids]`.
    pub fn unlink(model: impl Into<String>, ids: &[i64]) -> Self {
        Self::new(Action::Unlink, model, vec![json!(ids)])
    }

    /// `call_method` for an arbitrary model method.
    pub fn call_method(
        model: impl Into<String>,
        fn_name: impl Into<String>,
        params: Vec<Value>,
    ) -> Self {
        Self {
            fn_name: Some(fn_name.into()),
            ..Self::new(Action::CallMethod, model, params)
        }
    }
}

/// Assembles request envelopes for one instance.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeBuilder<'a> {
    instance: &'a InstanceInfo,
    ids: &'a dyn IdGenerator,
}

impl<'a> EnvelopeBuilder<'a> {
    /// Create a builder bound to `instance`, drawing fresh ids from `ids`.
    pub fn new(instance: &'a InstanceInfo, ids: &'a dyn IdGenerator) -> Self {
        Self { instance, ids }
    }

    /// Build the envelope for `call`.
    ///
    /// `keyword` is copied and masked for the action; the caller's value is
    /// left as it was. A non-empty `id` is kept verbatim, anything else gets
    /// a generated identifier.
    pub fn build(
        &self,
        call: CallSpec,
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> RequestEnvelope {
        let id = match id {
            Some(id) if !id.is_empty() => RequestId::from(id),
            _ => RequestId::new(self.ids.generate()),
        };

        RequestEnvelope {
            id,
            action: call.action,
            model_id: call.model,
            keyword: Some(call.action.mask(keyword)),
            fn_name: call.fn_name,
            params: call.params,
            odoo_instance: self.instance.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::UuidV7Generator;
    use odxproxy_protocol::RequestContext;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            format!("gen-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn instance() -> InstanceInfo {
        InstanceInfo::new("http://localhost:8069", 1, "demo", "secret-key")
    }

    fn everything() -> QueryModifiers {
        QueryModifiers::new()
            .fields(["name", "email"])
            .order("name asc")
            .limit(10)
            .offset(20)
            .context(RequestContext::new().tz("UTC"))
    }

    #[test]
    fn test_search_scenario() {
        let instance = instance();
        let ids = SequentialIds::default();
        let builder = EnvelopeBuilder::new(&instance, &ids);

        let keyword = QueryModifiers::new().context(RequestContext::new().tz("UTC"));
        let envelope = builder.build(
            CallSpec::search("res.partner", vec![json!("name"), json!("="), json!("Acme")]),
            &keyword,
            None,
        );

        assert_eq!(envelope.id.as_str(), "gen-0");
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "id": "gen-0",
                "action": "search",
                "model_id": "res.partner",
                "keyword": {"context": {"tz": "UTC"}},
                "params": ["name", "=", "Acme"],
                "odoo_instance": {
                    "url": "http://localhost:8069",
                    "user_id": 1,
                    "db": "demo",
                    "api_key": "secret-key"
                }
            })
        );
    }

    #[test]
    fn test_read_scenario() {
        let instance = instance();
        let builder = EnvelopeBuilder::new(&instance, &UuidV7Generator);

        let keyword = QueryModifiers::new().fields(["name"]).limit(10);
        let call = CallSpec::read("res.partner", &[1, 2, 3]);
        let envelope = builder.build(call, &keyword, Some("req-1"));

        assert_eq!(envelope.action, Action::Read);
        assert_eq!(envelope.id.as_str(), "req-1");
        assert_eq!(envelope.keyword, Some(QueryModifiers::new().fields(["name"])));
        assert_eq!(envelope.params, vec![json!([1, 2, 3])]);

        // Caller's modifiers are untouched.
        assert_eq!(keyword.limit, Some(10));
    }

    #[rstest]
    #[case::search(CallSpec::search("m", vec![json!(["a", "=", 1])]), vec![json!(["a", "=", 1])])]
    #[case::search_read(CallSpec::search_read("m", vec![json!([])]), vec![json!([])])]
    #[case::read(CallSpec::read("m", &[7]), vec![json!([7])])]
    #[case::fields_get(CallSpec::fields_get("m"), vec![])]
    #[case::search_count(CallSpec::search_count("m", vec![json!([])]), vec![json!([])])]
    #[case::create(CallSpec::create("m", vec![json!({"name": "x"})]), vec![json!({"name": "x"})])]
    #[case::write(
        CallSpec::write("m", &[1, 2], json!({"name": "y"})),
        vec![json!([1, 2]), json!({"name": "y"})]
    )]
    #[case::unlink(CallSpec::unlink("m", &[3]), vec![json!([3])])]
    #[case::call_method(
        CallSpec::call_method("m", "action_confirm", vec![json!([4])]),
        vec![json!([4])]
    )]
    fn test_parameter_shaping(#[case] call: CallSpec, #[case] expected: Vec<Value>) {
        assert_eq!(call.params, expected);
    }

    #[rstest]
    #[case(Action::Search, QueryModifiers::new().context(RequestContext::new().tz("UTC")))]
    #[case(
        Action::Read,
        QueryModifiers::new()
            .fields(["name", "email"])
            .context(RequestContext::new().tz("UTC"))
    )]
    #[case(Action::FieldsGet, QueryModifiers::new().context(RequestContext::new().tz("UTC")))]
    #[case(Action::SearchRead, everything())]
    #[case(Action::SearchCount, everything())]
    #[case(Action::Create, everything())]
    #[case(Action::Write, everything())]
    #[case(Action::Unlink, everything())]
    #[case(Action::CallMethod, everything())]
    fn test_keyword_is_masked_per_action(#[case] action: Action, #[case] expected: QueryModifiers) {
        let instance = instance();
        let builder = EnvelopeBuilder::new(&instance, &UuidV7Generator);
        let call = CallSpec::new(action, "res.partner", Vec::new());

        let envelope = builder.build(call, &everything(), None);

        assert_eq!(envelope.keyword, Some(expected));
    }

    #[test]
    fn test_only_call_method_carries_fn_name() {
        let instance = instance();
        let builder = EnvelopeBuilder::new(&instance, &UuidV7Generator);
        let keyword = QueryModifiers::new();

        let envelope = builder.build(
            CallSpec::call_method("sale.order", "action_confirm", vec![json!([5])]),
            &keyword,
            None,
        );
        assert_eq!(envelope.fn_name.as_deref(), Some("action_confirm"));

        let envelope = builder.build(CallSpec::unlink("sale.order", &[5]), &keyword, None);
        assert_eq!(envelope.fn_name, None);
    }

    #[test]
    fn test_empty_id_is_replaced() {
        let instance = instance();
        let ids = SequentialIds::default();
        let builder = EnvelopeBuilder::new(&instance, &ids);
        let keyword = QueryModifiers::new();

        let first = builder.build(CallSpec::fields_get("res.partner"), &keyword, Some(""));
        let second = builder.build(CallSpec::fields_get("res.partner"), &keyword, None);

        assert_eq!(first.id.as_str(), "gen-0");
        assert_eq!(second.id.as_str(), "gen-1");
    }

    #[test]
    fn test_instance_is_attached_by_value() {
        let instance = instance();
        let builder = EnvelopeBuilder::new(&instance, &UuidV7Generator);

        let envelope = builder.build(
            CallSpec::fields_get("res.partner"),
            &QueryModifiers::new(),
            None,
        );

        assert_eq!(envelope.odoo_instance, instance);
        assert_eq!(envelope.odoo_instance.api_key(), "secret-key");
    }
}
