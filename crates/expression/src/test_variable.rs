#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use indexmap::IndexMap;
    use page_model::{
        ApiDataSourceConfig, ComponentSchema, ComponentType, DataSource, HttpMethod, KeyValue,
    };
    use serde_json::{Value, json};

    use crate::*;

    type State = HashMap<String, HashMap<String, Value>>;

    fn tree() -> ComponentSchema {
        ComponentSchema::new("root", ComponentType::PageRoot)
            .with_semantic_id("pageRoot1")
            .with_child(
                ComponentSchema::new("in-1", ComponentType::Input)
                    .with_semantic_id("input1")
                    .with_prop("placeholder", json!("Type"))
                    .with_prop("value", json!("declared")),
            )
            .with_child(
                ComponentSchema::new("card", ComponentType::Card)
                    .with_semantic_id("card1")
                    .with_child({
                        let mut t = ComponentSchema::new("txt", ComponentType::Text)
                            .with_semantic_id("text1")
                            .with_prop("content", json!("hello"));
                        t.style.insert("color".into(), json!("red"));
                        t
                    }),
            )
    }

    fn sources() -> IndexMap<String, DataSource> {
        let mut users = DataSource::api("ds-1", "users", ApiDataSourceConfig::default());
        users.data = Some(json!({ "items": [ { "name": "Ann" }, { "name": "Bo" } ] }));
        let colors = DataSource::fixed("ds-2", "colors", json!(["red", "blue"]));
        let empty = DataSource::api("ds-3", "pending", ApiDataSourceConfig::default());
        let mut off = DataSource::api("ds-4", "flag", ApiDataSourceConfig::default());
        off.data = Some(json!(false));
        IndexMap::from([
            ("ds-1".to_string(), users),
            ("ds-2".to_string(), colors),
            ("ds-3".to_string(), empty),
            ("ds-4".to_string(), off),
        ])
    }

    fn with_ctx<R>(state: &State, f: impl FnOnce(&ExpressionContext<'_>) -> R) -> R {
        let root = tree();
        let ds = sources();
        let globals = SystemGlobals::default();
        let ctx = ExpressionContext::new(&root, &ds, state, &globals);
        f(&ctx)
    }

    #[test]
    fn falsy_cached_data_counts_as_missing() {
        with_ctx(&State::new(), |ctx| {
            assert_eq!(resolve_variable("flag", ctx), None);
            assert_eq!(resolve_variable("flag.x", ctx), None);
            assert_eq!(resolve_string_variables("[{{flag}}]", ctx), "[]");
        });
    }

    #[test]
    fn whole_floats_render_without_fraction() {
        let mut state = State::new();
        state
            .entry("in-1".into())
            .or_default()
            .insert("n".into(), json!(1.0));
        with_ctx(&state, |ctx| {
            assert_eq!(resolve_string_variables("n={{input1.n}}", ctx), "n=1");
        });
    }

    #[test]
    fn component_priority_form_then_props_then_style() {
        let mut state = State::new();
        with_ctx(&state, |ctx| {
            assert_eq!(resolve_variable("input1.value", ctx), Some(json!("declared")));
            assert_eq!(resolve_variable("text1.color", ctx), Some(json!("red")));
            assert_eq!(resolve_variable("text1.missing", ctx), None);
        });
        state
            .entry("in-1".into())
            .or_default()
            .insert("value".into(), json!("typed"));
        with_ctx(&state, |ctx| {
            assert_eq!(resolve_variable("input1.value", ctx), Some(json!("typed")));
            // Bare semantic id falls back to the `value` state.
            assert_eq!(resolve_variable("input1", ctx), Some(json!("typed")));
        });
    }

    #[test]
    fn data_sources_by_name_and_globals() {
        let state = State::new();
        with_ctx(&state, |ctx| {
            assert_eq!(resolve_variable("users.items[1].name", ctx), Some(json!("Bo")));
            assert_eq!(resolve_variable("colors", ctx), Some(json!(["red", "blue"])));
            assert_eq!(resolve_variable("pending.anything", ctx), None);
            assert_eq!(resolve_variable("user.name", ctx), Some(json!("Guest User")));
            assert_eq!(
                resolve_variable("user.email", ctx),
                Some(json!("guest@example.com"))
            );
            assert_eq!(resolve_variable("user.age", ctx), None);
            assert_eq!(resolve_variable("nobody", ctx), None);
        });
    }

    #[test]
    fn templates_substitute_every_token() {
        let state = State::new();
        with_ctx(&state, |ctx| {
            assert_eq!(
                resolve_string_variables("Hello {{user.name}}!", ctx),
                "Hello Guest User!"
            );
            assert_eq!(resolve_string_variables("Hello {{foo.bar}}!", ctx), "Hello !");
            assert_eq!(
                resolve_string_variables("{{ text1.content }}/{{colors}}/{{input1.placeholder}}", ctx),
                r#"hello/["red","blue"]/Type"#
            );
            assert_eq!(resolve_string_variables("no tokens", ctx), "no tokens");
            assert_eq!(resolve_string_variables("{{}} stays", ctx), "{{}} stays");
        });
    }

    #[test]
    fn config_resolution_leaves_input_untouched() {
        let config = ApiDataSourceConfig {
            url: "https://api.test/{{text1.content}}".into(),
            method: HttpMethod::Post,
            params: vec![KeyValue::new("q", "{{input1.value}}")],
            headers: vec![KeyValue::new("X-{{text1.color}}", "{{user.email}}")],
            body: Some(r#"{"who":"{{user.name}}"}"#.into()),
            auto_fetch: false,
        };
        let state = State::new();
        let resolved = with_ctx(&state, |ctx| resolve_variables_in_config(&config, ctx));
        assert_eq!(resolved.url, "https://api.test/hello");
        assert_eq!(resolved.params, vec![KeyValue::new("q", "declared")]);
        assert_eq!(
            resolved.headers,
            vec![KeyValue::new("X-red", "guest@example.com")]
        );
        assert_eq!(resolved.body.as_deref(), Some(r#"{"who":"Guest User"}"#));
        assert_eq!(resolved.method, HttpMethod::Post);
        assert_eq!(config.url, "https://api.test/{{text1.content}}");
    }

    #[test]
    fn duplicate_semantic_ids_take_first_in_document_order() {
        let root = ComponentSchema::new("root", ComponentType::PageRoot)
            .with_child(
                ComponentSchema::new("a", ComponentType::Row)
                    .with_child(
                        ComponentSchema::new("a1", ComponentType::Text)
                            .with_semantic_id("text1")
                            .with_prop("content", json!("nested first")),
                    ),
            )
            .with_child(
                ComponentSchema::new("b", ComponentType::Text)
                    .with_semantic_id("text1")
                    .with_prop("content", json!("later sibling")),
            );
        let ds = IndexMap::new();
        let state = State::new();
        let globals = SystemGlobals::default();
        let ctx = ExpressionContext::new(&root, &ds, &state, &globals);
        assert_eq!(
            resolve_variable("text1.content", &ctx),
            Some(json!("nested first"))
        );
    }
}
