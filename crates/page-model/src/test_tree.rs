#[cfg(test)]
mod tests {
    use crate::{ComponentSchema, ComponentType, tree::*};

    fn node(id: &str, ty: ComponentType) -> ComponentSchema {
        ComponentSchema::new(id, ty).with_semantic_id(format!("{}_{}", ty, id))
    }

    /// root-level list: [row(a, col(b, c)), d]
    fn sample() -> Vec<ComponentSchema> {
        vec![
            node("row", ComponentType::Row)
                .with_child(node("a", ComponentType::Text))
                .with_child(
                    node("col", ComponentType::Col)
                        .with_child(node("b", ComponentType::Button))
                        .with_child(node("c", ComponentType::Input)),
                ),
            node("d", ComponentType::Divider),
        ]
    }

    #[test]
    fn find_by_id_searches_depth_first() {
        let nodes = sample();
        assert_eq!(find_by_id("c", &nodes).map(|n| n.id.as_str()), Some("c"));
        assert_eq!(find_by_id("d", &nodes).map(|n| n.id.as_str()), Some("d"));
        assert!(find_by_id("missing", &nodes).is_none());
    }

    #[test]
    fn find_by_id_mut_allows_in_place_edit() {
        let mut nodes = sample();
        find_by_id_mut("b", &mut nodes).unwrap().label = "edited".into();
        assert_eq!(find_by_id("b", &nodes).unwrap().label, "edited");
    }

    #[test]
    fn find_parent_reports_index_and_parent() {
        let nodes = sample();
        let slot = find_parent("c", &nodes).unwrap();
        assert_eq!(slot.parent_id.as_deref(), Some("col"));
        assert_eq!(slot.index, 1);

        let top = find_parent("d", &nodes).unwrap();
        assert_eq!(top.parent_id, None);
        assert_eq!(top.index, 1);
    }

    #[test]
    fn is_descendant_is_strict() {
        let nodes = sample();
        assert!(is_descendant("b", "row", &nodes));
        assert!(is_descendant("c", "col", &nodes));
        assert!(!is_descendant("row", "row", &nodes));
        assert!(!is_descendant("row", "b", &nodes));
        assert!(!is_descendant("d", "row", &nodes));
    }

    #[test]
    fn remove_by_id_returns_subtree() {
        let mut nodes = sample();
        let removed = remove_by_id("col", &mut nodes).unwrap();
        assert_eq!(removed.subtree_ids(), vec!["col", "b", "c"]);
        assert!(find_by_id("b", &nodes).is_none());
        assert_eq!(nodes[0].children().len(), 1);
        assert!(remove_by_id("col", &mut nodes).is_none());
    }

    #[test]
    fn walk_is_document_order() {
        let root = ComponentSchema::new("root", ComponentType::PageRoot)
            .nestable()
            .with_child(sample().remove(0));
        let ids: Vec<_> = root.walk().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "row", "a", "col", "b", "c"]);
    }

    #[test]
    fn semantic_lookup_takes_first_match() {
        let mut nodes = sample();
        nodes.push(node("dup", ComponentType::Text).with_semantic_id("text_a"));
        assert_eq!(
            find_by_semantic_id("text_a", &nodes).map(|n| n.id.as_str()),
            Some("a")
        );
    }
}
