#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use indexmap::IndexMap;
    use page_model::{ComponentSchema, ComponentType, DataBinding, DataSource};
    use serde_json::{Value, json};

    use crate::*;

    type State = HashMap<String, HashMap<String, Value>>;

    fn root() -> ComponentSchema {
        ComponentSchema::new("root", ComponentType::PageRoot)
            .with_semantic_id("pageRoot1")
            .with_prop("title", json!("Home"))
            .with_child(
                ComponentSchema::new("c1", ComponentType::Input)
                    .with_semantic_id("input1")
                    .with_prop("value", json!("a")),
            )
    }

    fn component(id: &str, path: Option<&str>) -> DataBinding {
        DataBinding::Component {
            component_id: id.into(),
            path: path.map(str::to_string),
        }
    }

    #[test]
    fn component_binding_prefers_form_state() {
        let root = root();
        let ds = IndexMap::new();
        let globals = SystemGlobals::default();
        let mut state = State::new();
        let binding = component("c1", Some("value"));
        {
            let ctx = ExpressionContext::new(&root, &ds, &state, &globals);
            assert_eq!(resolve_binding(&binding, &ctx), Some(json!("a")));
        }
        state
            .entry("c1".into())
            .or_default()
            .insert("value".into(), json!("b"));
        let ctx = ExpressionContext::new(&root, &ds, &state, &globals);
        assert_eq!(resolve_binding(&binding, &ctx), Some(json!("b")));
    }

    #[test]
    fn component_binding_edges() {
        let root = root();
        let ds = IndexMap::new();
        let globals = SystemGlobals::default();
        let state = State::new();
        let ctx = ExpressionContext::new(&root, &ds, &state, &globals);

        assert_eq!(
            resolve_binding(&component("c1", Some("nothing")), &ctx),
            Some(json!(""))
        );
        assert_eq!(resolve_binding(&component("c1", None), &ctx), None);
        assert_eq!(resolve_binding(&component("ghost", Some("value")), &ctx), None);
        assert_eq!(
            resolve_binding(&component("root", Some("title")), &ctx),
            Some(json!("Home"))
        );
    }

    #[test]
    fn data_source_and_static_bindings() {
        let root = root();
        let mut api = DataSource::api("d1", "users", Default::default());
        api.data = Some(json!({ "total": 3, "rows": [1, 2, 3] }));
        let ds = IndexMap::from([
            ("d1".to_string(), api),
            ("d2".to_string(), DataSource::api("d2", "empty", Default::default())),
        ]);
        let globals = SystemGlobals::default();
        let state = State::new();
        let ctx = ExpressionContext::new(&root, &ds, &state, &globals);

        let by_path = DataBinding::DataSource {
            data_source_id: "d1".into(),
            path: Some("rows[2]".into()),
        };
        assert_eq!(resolve_binding(&by_path, &ctx), Some(json!(3)));
        let whole = DataBinding::DataSource {
            data_source_id: "d1".into(),
            path: None,
        };
        assert_eq!(resolve_binding(&whole, &ctx).unwrap()["total"], json!(3));
        let unfetched = DataBinding::DataSource {
            data_source_id: "d2".into(),
            path: None,
        };
        assert_eq!(resolve_binding(&unfetched, &ctx), None);

        let fixed = DataBinding::Static { value: json!([1]) };
        assert_eq!(resolve_binding(&fixed, &ctx), Some(json!([1])));
    }
}
