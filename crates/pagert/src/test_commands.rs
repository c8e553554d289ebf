#[cfg(test)]
mod tests {
    use std::{env, fs, sync::Arc};

    use config::RuntimeConfig;
    use event_engine::{MockHost, fire_trigger};
    use page_model::{
        ApiDataSourceConfig, ComponentSchema, ComponentType, DataSource, PageConfig,
    };
    use page_state::{HttpResponse, MockHttpClient};
    use serde_json::json;
    use uuid::Uuid;

    use crate::{Error, commands::*};

    fn doc() -> PageConfig {
        let mut page = PageConfig::new("demo", "Demo");
        page.root_component.id = "root".into();
        let mut button = ComponentSchema::new("b1", ComponentType::Button)
            .with_semantic_id("button1")
            .with_prop("text", json!("Save"));
        button.events = serde_json::from_value(json!([{
            "id": "e1",
            "trigger": "onClick",
            "actions": [{
                "type": "setLocalStorage",
                "config": { "key": "saved", "value": "{{input1.value}}" }
            }]
        }]))
        .unwrap();
        page.root_component = page
            .root_component
            .with_child(
                ComponentSchema::new("row", ComponentType::Row)
                    .with_semantic_id("row1")
                    .with_child(
                        ComponentSchema::new("i1", ComponentType::Input)
                            .with_semantic_id("input1"),
                    ),
            )
            .with_child(button);
        page.data_sources.insert(
            "ds-1".into(),
            DataSource::api(
                "ds-1",
                "users",
                ApiDataSourceConfig {
                    url: "https://api.test/users".into(),
                    ..ApiDataSourceConfig::default()
                },
            ),
        );
        page
    }

    #[test]
    fn tree_is_indented_with_triggers() {
        let page = doc();
        assert_eq!(
            render_tree(&page.root_component),
            "pageRoot pageRoot1 (root)\n  row row1 (row)\n    input input1 (i1)\n  button button1 (b1) [onClick]\n"
        );
    }

    #[test]
    fn check_reports_shared_semantic_ids() {
        let mut page = doc();
        page.root_component = page.root_component.with_child(
            ComponentSchema::new("b2", ComponentType::Button).with_semantic_id("button1"),
        );
        let report = check_report(&page);
        assert!(
            report
                .iter()
                .any(|w| w.contains("'button1' is shared by b1, b2") && w.ends_with("'b1'")),
            "{report:?}"
        );
    }

    #[test]
    fn load_page_reports_read_and_document_errors() {
        let dir = env::temp_dir().join(format!("pagert-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert!(matches!(load_page(&missing), Err(Error::Read { .. })));

        let bad = dir.join("bad.json");
        let mut page = doc();
        page.root_component.component_type = ComponentType::Container;
        fs::write(&bad, serde_json::to_string(&page).unwrap()).unwrap();
        assert!(matches!(load_page(&bad), Err(Error::Page { .. })));

        let good = dir.join("good.json");
        fs::write(&good, doc().to_json().unwrap()).unwrap();
        assert_eq!(load_page(&good).unwrap().name, "demo");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn fetch_accepts_names_and_ids() {
        let state = page_state(doc(), &RuntimeConfig::default());
        let http = MockHttpClient::new();
        http.route("https://api.test/users", HttpResponse::new(200, r#"[{"id":1}]"#));

        assert_eq!(
            fetch_source(&state, "users", &http).await.unwrap(),
            json!([{ "id": 1 }])
        );
        assert_eq!(
            fetch_source(&state, "ds-1", &http).await.unwrap(),
            json!([{ "id": 1 }])
        );
        assert!(matches!(
            fetch_source(&state, "nope", &http).await,
            Err(Error::NotFound(_))
        ));
        assert_eq!(http.calls().len(), 2);
    }

    #[tokio::test]
    async fn configured_globals_reach_templates() {
        let mut cfg = RuntimeConfig::default();
        cfg.globals.user_name = "Ada".into();
        let state = page_state(doc(), &cfg);
        assert_eq!(state.resolve_template("Hi {{user.name}}"), "Hi Ada");
    }

    #[tokio::test]
    async fn fire_uses_terminal_wiring() {
        let cfg = RuntimeConfig::default();
        let state = page_state(doc(), &cfg);
        state.set_component_state("i1", "value", json!("draft"));
        let host = MockHost::new();
        let ctx = event_context(
            state,
            &cfg,
            Arc::new(MockHttpClient::new()),
            Arc::new(host.clone()),
        );

        assert_eq!(fire_trigger(&ctx, "button1", "onClick").await, 1);
        // Action configs are used verbatim; templates are not expanded.
        assert_eq!(
            host.local_storage("saved").as_deref(),
            Some(r#""{{input1.value}}""#)
        );
    }
}
