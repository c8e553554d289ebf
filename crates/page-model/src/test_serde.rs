#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::*;

    const PAGE: &str = r#"{
        "id": "page-1",
        "name": "Demo",
        "title": "Demo page",
        "createdAt": 1,
        "updatedAt": 2,
        "rootComponent": {
            "id": "root",
            "semanticId": "pageRoot1",
            "type": "pageRoot",
            "label": "Page",
            "props": {},
            "style": {},
            "children": [
                {
                    "id": "btn",
                    "semanticId": "button1",
                    "type": "button",
                    "label": "Button",
                    "props": { "text": "Go" },
                    "style": {},
                    "events": [
                        {
                            "id": "ev1",
                            "trigger": "onClick",
                            "action": { "type": "showMessage", "config": { "message": "hi", "messageType": "success" } }
                        },
                        {
                            "id": "ev2",
                            "trigger": "onClick",
                            "actions": [
                                { "type": "goToUrl", "config": { "url": "https://example.com", "newTab": true } },
                                { "type": "teleport", "config": { "where": "moon" } }
                            ]
                        }
                    ]
                }
            ]
        },
        "dataSources": {
            "ds1": {
                "id": "ds1",
                "name": "users",
                "type": "api",
                "config": { "url": "https://api.test/users", "method": "GET", "params": [], "headers": [] },
                "data": [1, 2],
                "lastFetched": 99
            },
            "ds2": { "id": "ds2", "name": "colors", "type": "static", "config": { "data": ["red"] } }
        }
    }"#;

    #[test]
    fn document_decodes_with_legacy_and_unknown_actions() {
        let page = PageConfig::from_json(PAGE).unwrap();
        let button = &page.root_component.children()[0];
        assert_eq!(button.component_type, ComponentType::Button);
        assert_eq!(button.events.len(), 2);

        let legacy = &button.events[0].actions;
        assert_eq!(legacy.len(), 1);
        assert!(matches!(
            &legacy[0],
            Action::ShowMessage(ShowMessageConfig { message, message_type: MessageKind::Success })
                if message == "hi"
        ));

        let listed = &button.events[1].actions;
        assert!(matches!(&listed[0], Action::GoToUrl(c) if c.new_tab));
        assert_eq!(listed[1].type_name(), "teleport");
        assert_eq!(listed[1].kind(), None);
    }

    #[test]
    fn round_trip_drops_fetch_cache_only() {
        let page = PageConfig::from_json(PAGE).unwrap();
        let again = PageConfig::from_json(&page.to_json().unwrap()).unwrap();
        assert_eq!(again.root_component, page.root_component);
        assert_eq!(again.data_sources.len(), 2);
        assert_eq!(again.data_sources["ds1"].data, None);
        assert_eq!(again.data_sources["ds1"].last_fetched, None);
        assert_eq!(
            again.data_sources.keys().collect::<Vec<_>>(),
            vec!["ds1", "ds2"]
        );
        // Legacy single action is written back in list form.
        let text = page.to_json().unwrap();
        assert!(!text.contains("\"action\":"));
    }

    #[test]
    fn unknown_action_config_survives_round_trip() {
        let raw = json!({ "type": "teleport", "config": { "where": "moon" } });
        let action: Action = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&action).unwrap(), raw);
    }

    #[test]
    fn data_binding_is_tagged_by_type() {
        let b: DataBinding =
            serde_json::from_value(json!({ "type": "component", "componentId": "c1", "path": "value" }))
                .unwrap();
        assert_eq!(
            b,
            DataBinding::Component {
                component_id: "c1".into(),
                path: Some("value".into())
            }
        );
        let s: DataBinding = serde_json::from_value(json!({ "type": "static", "value": 3 })).unwrap();
        assert_eq!(s, DataBinding::Static { value: json!(3) });
    }

    #[test]
    fn root_must_be_page_root() {
        let bad = r#"{ "rootComponent": { "id": "x", "type": "container", "children": [] } }"#;
        assert!(matches!(
            PageConfig::from_json(bad),
            Err(Error::InvalidRoot { .. })
        ));

        let nested = r#"{ "rootComponent": { "id": "x", "type": "pageRoot", "children": [
            { "id": "y", "type": "pageRoot" }
        ] } }"#;
        assert!(matches!(
            PageConfig::from_json(nested),
            Err(Error::NestedRoot { id }) if id == "y"
        ));
    }

    #[test]
    fn static_source_payload_falls_back_to_config() {
        let page = PageConfig::from_json(PAGE).unwrap();
        assert_eq!(page.data_sources["ds2"].payload(), Some(&json!(["red"])));
        assert_eq!(page.data_sources["ds1"].payload(), Some(&json!([1, 2])));
        assert_eq!(page.data_sources["ds2"].kind(), DataSourceKind::Static);
    }

    #[test]
    fn freshly_added_actions_with_empty_config_load() {
        let doc = json!({
            "rootComponent": {
                "id": "root",
                "type": "pageRoot",
                "children": [{
                    "id": "btn",
                    "type": "button",
                    "events": [{
                        "id": "ev",
                        "trigger": "onClick",
                        "actions": [
                            { "type": "callDataSource", "config": {} },
                            { "type": "updateProperty", "config": {} },
                            { "type": "setGlobalData", "config": {} },
                            { "type": "showMessage", "config": { "messageType": "warning" } },
                            { "type": "controlComponent", "config": {} },
                            { "type": "download" }
                        ]
                    }]
                }]
            }
        });
        let page = PageConfig::from_json(&doc.to_string()).unwrap();
        let actions = &page.root_component.children()[0].events[0].actions;
        assert_eq!(actions.len(), 6);
        assert_eq!(
            actions[1],
            Action::UpdateProperty(UpdatePropertyConfig::default())
        );
        assert!(matches!(
            &actions[3],
            Action::ShowMessage(c) if c.message.is_empty() && c.message_type == MessageKind::Warning
        ));
        assert!(matches!(&actions[5], Action::Download(c) if c.url.is_empty()));
    }

    #[test]
    fn falsy_cached_data_is_no_payload() {
        let mut ds = DataSource::fixed("d", "flags", json!({ "on": true }));
        for falsy in [json!(false), json!(0), json!(""), json!(null)] {
            ds.data = Some(falsy);
            assert_eq!(ds.payload(), Some(&json!({ "on": true })));
        }
        ds.data = Some(json!([]));
        assert_eq!(ds.payload(), Some(&json!([])));

        let zero = DataSource::fixed("z", "zero", json!(0));
        assert_eq!(zero.payload(), None);
    }
}
