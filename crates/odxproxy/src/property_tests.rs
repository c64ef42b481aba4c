//! Property-based tests for envelope construction
//!
//! Random modifiers, identifiers and ids are pushed through the envelope
//! builder to check the guarantees every call relies on.

#[cfg(test)]
mod tests {
    use crate::envelope::{CallSpec, EnvelopeBuilder};
    use crate::id::UuidV7Generator;
    use odxproxy_protocol::{Action, InstanceInfo, QueryModifiers, RequestContext};
    use proptest::prelude::*;
    use std::collections::HashSet;

    // ===== Strategy Generators =====

    fn arb_context() -> impl Strategy<Value = RequestContext> {
        (
            proptest::option::of(proptest::collection::vec(1i64..100, 0..4)),
            proptest::option::of(1i64..100),
            proptest::option::of("[A-Za-z/_]{1,20}"),
            proptest::option::of("[a-z]{2}_[A-Z]{2}"),
        )
            .prop_map(|(allowed, default, tz, lang)| RequestContext {
                allowed_company_ids: allowed,
                default_company_id: default,
                tz,
                lang,
            })
    }

    fn arb_modifiers() -> impl Strategy<Value = QueryModifiers> {
        (
            proptest::option::of(proptest::collection::vec("[a-z_]{1,12}", 0..5)),
            proptest::option::of("[a-z_]{1,12} (asc|desc)"),
            proptest::option::of(any::<u32>()),
            proptest::option::of(any::<u32>()),
            proptest::option::of(arb_context()),
        )
            .prop_map(|(fields, order, limit, offset, context)| QueryModifiers {
                fields,
                order,
                limit,
                offset,
                context,
            })
    }

    fn arb_action() -> impl Strategy<Value = Action> {
        proptest::sample::select(Action::ALL.to_vec())
    }

    fn call_for(action: Action) -> CallSpec {
        match action {
            Action::Search => CallSpec::search("res.partner", vec![]),
            Action::SearchRead => CallSpec::search_read("res.partner", vec![]),
            Action::Read => CallSpec::read("res.partner", &[1]),
            Action::FieldsGet => CallSpec::fields_get("res.partner"),
            Action::SearchCount => CallSpec::search_count("res.partner", vec![]),
            Action::Create => CallSpec::create("res.partner", vec![]),
            Action::Write => CallSpec::write("res.partner", &[1], serde_json::json!({})),
            Action::Unlink => CallSpec::unlink("res.partner", &[1]),
            Action::CallMethod => CallSpec::call_method("res.partner", "name_get", vec![]),
        }
    }

    fn instance() -> InstanceInfo {
        InstanceInfo::new("http://localhost:8069", 1, "demo", "secret-key")
    }

    proptest! {
        /// Building an envelope never changes the caller's modifiers,
        /// and mutating them afterwards never changes the envelope.
        #[test]
        fn prop_keyword_copy_is_independent(
            action in arb_action(),
            keyword in arb_modifiers(),
        ) {
            let instance = instance();
            let builder = EnvelopeBuilder::new(&instance, &UuidV7Generator);
            let before = keyword.clone();

            let envelope = builder.build(call_for(action), &keyword, None);
            prop_assert_eq!(&keyword, &before);

            let sent = envelope.keyword.clone();
            let mut keyword = keyword;
            keyword.fields = Some(vec!["mutated".to_string()]);
            keyword.limit = Some(1);
            prop_assert_eq!(envelope.keyword, sent);
        }

        /// The envelope's modifiers are exactly the action's mask over the input.
        #[test]
        fn prop_envelope_keyword_matches_mask(
            action in arb_action(),
            keyword in arb_modifiers(),
        ) {
            let instance = instance();
            let builder = EnvelopeBuilder::new(&instance, &UuidV7Generator);

            let envelope = builder.build(call_for(action), &keyword, None);
            let sent = envelope.keyword.expect("keyword is always attached");
            let mask = action.allowed_modifiers();

            prop_assert!(mask.fields || sent.fields.is_none());
            prop_assert!(mask.order || sent.order.is_none());
            prop_assert!(mask.limit || sent.limit.is_none());
            prop_assert!(mask.offset || sent.offset.is_none());
            prop_assert!(mask.context || sent.context.is_none());
            prop_assert_eq!(sent, action.mask(&keyword));
        }

        /// A non-empty caller id is preserved verbatim.
        #[test]
        fn prop_caller_id_is_preserved(
            action in arb_action(),
            id in "[A-Za-z0-9-]{1,40}",
        ) {
            let instance = instance();
            let builder = EnvelopeBuilder::new(&instance, &UuidV7Generator);

            let envelope = builder.build(call_for(action), &QueryModifiers::new(), Some(&id));
            prop_assert_eq!(envelope.id.as_str(), id.as_str());
        }

        /// Generated ids are non-empty and distinct across calls.
        #[test]
        fn prop_generated_ids_are_distinct(
            actions in proptest::collection::vec(arb_action(), 1..50),
        ) {
            let instance = instance();
            let builder = EnvelopeBuilder::new(&instance, &UuidV7Generator);

            let mut seen = HashSet::new();
            for action in actions {
                let envelope = builder.build(call_for(action), &QueryModifiers::new(), Some(""));
                prop_assert!(!envelope.id.is_empty());
                prop_assert!(seen.insert(envelope.id.into_inner()));
            }
        }
    }
}
