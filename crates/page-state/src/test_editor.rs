#[cfg(test)]
mod tests {
    use page_model::*;
    use serde_json::json;

    use crate::{EditorMode, EditorStore};

    fn text(id: &str) -> ComponentSchema {
        ComponentSchema::new(id, ComponentType::Text).with_semantic_id(format!("text_{id}"))
    }

    fn page_with(children: Vec<ComponentSchema>) -> EditorStore {
        let mut page = PageConfig::new("t", "t");
        page.root_component.id = "root".into();
        page.root_component.children = Some(children);
        EditorStore::new(page)
    }

    fn child_ids(store: &EditorStore, parent: &str) -> Vec<String> {
        store
            .find_component(parent)
            .unwrap()
            .children()
            .iter()
            .map(|c| c.id.clone())
            .collect()
    }

    #[test]
    fn root_cannot_be_deleted() {
        let mut store = page_with(vec![text("a"), text("b")]);
        let before = store.page_root().walk().count();
        assert!(store.delete_component("root").is_none());
        assert_eq!(store.page_root().walk().count(), before);
        assert_eq!(store.page_root().id, "root");
    }

    #[test]
    fn delete_returns_subtree_and_clears_selection() {
        let row = ComponentSchema::new("row", ComponentType::Row).with_child(text("inner"));
        let mut store = page_with(vec![row, text("b")]);
        assert!(store.select_component(Some("inner")));
        let removed = store.delete_component("row").unwrap();
        assert_eq!(removed.subtree_ids(), vec!["row", "inner"]);
        assert!(!store.has_selected());
        assert_eq!(child_ids(&store, "root"), vec!["b"]);
        assert!(store.delete_component("row").is_none());
    }

    #[test]
    fn move_within_same_parent_corrects_index() {
        let mut store = page_with(vec![text("A"), text("B"), text("C")]);
        assert!(store.move_component("A", "root", Some(2), None));
        assert_eq!(child_ids(&store, "root"), vec!["B", "C", "A"]);

        // Moving up needs no correction.
        assert!(store.move_component("A", "root", Some(0), None));
        assert_eq!(child_ids(&store, "root"), vec!["A", "B", "C"]);

        // Past the end clamps.
        assert!(store.move_component("B", "root", Some(99), None));
        assert_eq!(child_ids(&store, "root"), vec!["A", "C", "B"]);
    }

    #[test]
    fn move_rejects_cycles_and_self_parenting() {
        let inner = ComponentSchema::new("inner", ComponentType::Col).nestable();
        let outer = ComponentSchema::new("P", ComponentType::Row).with_child(inner);
        let mut store = page_with(vec![outer, text("x")]);
        let snapshot = store.page_root().clone();

        assert!(!store.move_component("P", "inner", None, None));
        assert!(!store.move_component("P", "P", None, None));
        assert!(!store.move_component("x", "missing", None, None));
        assert_eq!(store.page_root(), &snapshot);
    }

    #[test]
    fn move_across_parents_sets_and_clears_slot() {
        let tabs = ComponentSchema::new("tabs", ComponentType::Tabs).nestable();
        let mut store = page_with(vec![tabs, text("a")]);

        assert!(store.move_component("a", "tabs", None, Some("2")));
        let a = store.find_component("a").unwrap();
        assert_eq!(a.slot(), Some("2"));
        assert_eq!(store.find_parent("a").unwrap().parent_id.as_deref(), Some("tabs"));

        assert!(store.move_component("a", "root", Some(0), None));
        assert_eq!(store.find_component("a").unwrap().slot(), None);
        assert_eq!(child_ids(&store, "root"), vec!["a", "tabs"]);
    }

    #[test]
    fn move_into_leaf_is_rejected() {
        let mut store = page_with(vec![text("a"), text("b")]);
        assert!(!store.move_component("a", "b", None, None));
        assert_eq!(child_ids(&store, "root"), vec!["a", "b"]);
    }

    #[test]
    fn shrinking_items_drops_orphaned_slot_children() {
        let tabs = ComponentSchema::new("tabs", ComponentType::Tabs)
            .with_child(text("one").with_prop(SLOT_KEY, json!("1")))
            .with_child(text("two").with_prop(SLOT_KEY, json!("2")))
            .with_child(text("free"));
        let mut store = page_with(vec![tabs]);

        let patch = ComponentPatch::props(
            json!({ "items": [{ "name": "1" }] })
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert!(store.update_component("tabs", patch));
        assert_eq!(child_ids(&store, "tabs"), vec!["one", "free"]);
    }

    #[test]
    fn explicit_children_override_slot_cleanup() {
        let tabs = ComponentSchema::new("tabs", ComponentType::Tabs)
            .with_child(text("two").with_prop(SLOT_KEY, json!("2")));
        let mut store = page_with(vec![tabs]);
        let patch = ComponentPatch {
            props: json!({ "items": [] }).as_object().cloned(),
            children: Some(vec![text("two").with_prop(SLOT_KEY, json!("2"))]),
            ..ComponentPatch::default()
        };
        assert!(store.update_component("tabs", patch));
        assert_eq!(child_ids(&store, "tabs"), vec!["two"]);
    }

    #[test]
    fn add_clamps_index_and_requires_nestable_parent() {
        let mut store = page_with(vec![text("a")]);
        assert!(store.add_component(text("b"), None, Some(0)));
        assert!(store.add_component(text("c"), Some("root"), Some(50)));
        assert_eq!(child_ids(&store, "root"), vec!["b", "a", "c"]);

        assert!(!store.add_component(text("d"), Some("a"), None));
        assert!(!store.add_component(text("e"), Some("nope"), None));
        assert!(store.find_component("d").is_none());
    }

    #[test]
    fn mutations_stamp_updated_at() {
        let mut store = page_with(vec![text("a")]);
        let before = store.page_config().updated_at;
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(store.update_component("a", ComponentPatch::style(Default::default())));
        assert!(store.page_config().updated_at > before);
    }

    #[test]
    fn selection_and_modes() {
        let mut store = page_with(vec![text("a")]);
        assert!(!store.select_component(Some("ghost")));
        assert!(!store.has_selected());
        assert!(store.select_component(Some("a")));
        assert_eq!(store.selected_component().map(|c| c.id.as_str()), Some("a"));

        store.set_mode(EditorMode::Preview);
        assert!(store.is_preview_mode());
        assert!(!store.has_selected());
        store.set_mode(EditorMode::Edit);
        assert!(store.is_edit_mode());
    }

    #[test]
    fn loading_fills_missing_semantic_ids() {
        let mut page = PageConfig::new("t", "t");
        page.root_component.children = Some(vec![
            ComponentSchema::new("x", ComponentType::Button),
            ComponentSchema::new("y", ComponentType::Button),
        ]);
        let store = EditorStore::new(page);
        let names: Vec<_> = store
            .page_root()
            .children()
            .iter()
            .map(|c| c.semantic_id.as_str())
            .collect();
        assert_eq!(names, vec!["button1", "button2"]);
        assert_eq!(store.page_root().semantic_id, "pageRoot1");
    }
}
