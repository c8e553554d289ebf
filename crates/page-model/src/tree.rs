//! Depth-first helpers over a list of sibling nodes.
//!
//! All searches visit nodes in document order (a node before its children, children before
//! the next sibling), so "first match" is well defined.

use crate::{ComponentId, ComponentSchema};

/// Where a node sits: its parent's id (`None` for a top-level node of the searched list) and
/// its index among the parent's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentSlot {
    pub parent_id: Option<ComponentId>,
    pub index: usize,
}

/// Find a node by id.
pub fn find_by_id<'a>(id: &str, nodes: &'a [ComponentSchema]) -> Option<&'a ComponentSchema> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_by_id(id, node.children()) {
            return Some(found);
        }
    }
    None
}

/// Find a node by id for mutation.
pub fn find_by_id_mut<'a>(
    id: &str,
    nodes: &'a mut [ComponentSchema],
) -> Option<&'a mut ComponentSchema> {
    for node in nodes.iter_mut() {
        if node.id == id {
            return Some(node);
        }
        if let Some(children) = node.children.as_mut()
            && let Some(found) = find_by_id_mut(id, children)
        {
            return Some(found);
        }
    }
    None
}

/// Find the first node whose semantic id equals `semantic_id`.
pub fn find_by_semantic_id<'a>(
    semantic_id: &str,
    nodes: &'a [ComponentSchema],
) -> Option<&'a ComponentSchema> {
    nodes
        .iter()
        .flat_map(ComponentSchema::walk)
        .find(|n| n.semantic_id == semantic_id)
}

/// Locate the parent and sibling index of a node.
pub fn find_parent(id: &str, nodes: &[ComponentSchema]) -> Option<ParentSlot> {
    find_parent_inner(id, nodes, None)
}

fn find_parent_inner(
    id: &str,
    nodes: &[ComponentSchema],
    parent: Option<&ComponentSchema>,
) -> Option<ParentSlot> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == id {
            return Some(ParentSlot {
                parent_id: parent.map(|p| p.id.clone()),
                index,
            });
        }
        if let Some(found) = find_parent_inner(id, node.children(), Some(node)) {
            return Some(found);
        }
    }
    None
}

/// Whether `child_id` lies strictly below `ancestor_id`.
pub fn is_descendant(child_id: &str, ancestor_id: &str, nodes: &[ComponentSchema]) -> bool {
    find_by_id(ancestor_id, nodes)
        .is_some_and(|ancestor| find_by_id(child_id, ancestor.children()).is_some())
}

/// Splice a node out of the tree, returning it with its subtree.
pub fn remove_by_id(id: &str, nodes: &mut Vec<ComponentSchema>) -> Option<ComponentSchema> {
    if let Some(pos) = nodes.iter().position(|n| n.id == id) {
        return Some(nodes.remove(pos));
    }
    nodes
        .iter_mut()
        .filter_map(|n| n.children.as_mut())
        .find_map(|children| remove_by_id(id, children))
}

/// Every node of every subtree in `nodes`, in document order.
pub fn collect_all(nodes: &[ComponentSchema]) -> Vec<&ComponentSchema> {
    nodes.iter().flat_map(ComponentSchema::walk).collect()
}
