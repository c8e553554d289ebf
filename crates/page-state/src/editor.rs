//! Tree mutations, selection and editor mode over one [`PageConfig`].

use std::slice;

use page_model::{
    ComponentId, ComponentPatch, ComponentSchema, PageConfig, SLOT_KEY, is_truthy,
    migrate_semantic_ids, now_millis,
    tree::{self, ParentSlot},
};
use serde_json::Value;
use tracing::{debug, warn};

/// Whether the page is being edited or previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Edit,
    Preview,
}

/// Owner of the page tree.
///
/// Every successful mutation stamps `updated_at`. Rejected mutations log a warning and
/// leave the tree untouched.
#[derive(Debug, Clone)]
pub struct EditorStore {
    page_config: PageConfig,
    selected: Option<ComponentId>,
    mode: EditorMode,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new(PageConfig::new("Untitled", "New page"))
    }
}

impl EditorStore {
    pub fn new(page_config: PageConfig) -> Self {
        let mut store = Self {
            page_config: PageConfig::new("", ""),
            selected: None,
            mode: EditorMode::Edit,
        };
        store.set_page_config(page_config);
        store
    }

    /// A fresh `PageRoot` node (`pageRoot1`, empty children).
    pub fn create_default_page_root() -> ComponentSchema {
        PageConfig::default_root()
    }

    pub fn page_config(&self) -> &PageConfig {
        &self.page_config
    }

    /// Replace the document, filling semantic ids missing from older saves.
    pub fn set_page_config(&mut self, mut config: PageConfig) {
        migrate_semantic_ids(slice::from_mut(&mut config.root_component));
        self.page_config = config;
        self.selected = None;
    }

    pub fn page_root(&self) -> &ComponentSchema {
        &self.page_config.root_component
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switch mode; entering preview drops the selection.
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
        if mode == EditorMode::Preview {
            self.selected = None;
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode == EditorMode::Edit
    }

    pub fn is_preview_mode(&self) -> bool {
        self.mode == EditorMode::Preview
    }

    pub fn has_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected node, resolved against the current tree.
    pub fn selected_component(&self) -> Option<&ComponentSchema> {
        self.find_component(self.selected.as_deref()?)
    }

    /// Find a node anywhere in the tree, the root included.
    pub fn find_component(&self, id: &str) -> Option<&ComponentSchema> {
        tree::find_by_id(id, slice::from_ref(&self.page_config.root_component))
    }

    fn find_component_mut(&mut self, id: &str) -> Option<&mut ComponentSchema> {
        tree::find_by_id_mut(id, slice::from_mut(&mut self.page_config.root_component))
    }

    /// Parent id and index of a node. Top-level nodes report the root as their parent.
    pub fn find_parent(&self, id: &str) -> Option<ParentSlot> {
        tree::find_parent(id, slice::from_ref(&self.page_config.root_component))
    }

    fn touch(&mut self) {
        self.page_config.updated_at = now_millis();
    }

    /// Insert `node` under `parent_id` (the root when `None`) at `index`, or append.
    ///
    /// An index past the end appends. Returns `false` when the parent is missing or cannot
    /// hold children.
    pub fn add_component(
        &mut self,
        node: ComponentSchema,
        parent_id: Option<&str>,
        index: Option<usize>,
    ) -> bool {
        let id = node.id.clone();
        let parent = match parent_id {
            Some(pid) => self.find_component_mut(pid),
            None => Some(&mut self.page_config.root_component),
        };
        let Some(children) = parent.and_then(|p| p.children.as_mut()) else {
            warn!(id = %id, parent = ?parent_id, "add_component: parent missing or not nestable");
            return false;
        };
        let at = index.map_or(children.len(), |i| i.min(children.len()));
        children.insert(at, node);
        debug!(id = %id, parent = ?parent_id, index = at, "component added");
        self.touch();
        true
    }

    /// Remove a node and its subtree. The root cannot be deleted.
    ///
    /// Clears the selection if it pointed into the removed subtree.
    pub fn delete_component(&mut self, id: &str) -> Option<ComponentSchema> {
        if id == self.page_config.root_component.id {
            warn!(id, "cannot delete the page root");
            return None;
        }
        let removed = self
            .page_config
            .root_component
            .children
            .as_mut()
            .and_then(|children| tree::remove_by_id(id, children))?;
        if let Some(sel) = self.selected.as_deref()
            && removed.walk().any(|n| n.id == sel)
        {
            self.selected = None;
        }
        debug!(id, "component deleted");
        self.touch();
        Some(removed)
    }

    /// Shallow-merge `patch` onto a node.
    ///
    /// When the patch sets `props.items` to an array, children bound to a slot name no
    /// longer listed in `items[].name` are dropped, unless the patch carries explicit
    /// `children`.
    pub fn update_component(&mut self, id: &str, mut patch: ComponentPatch) -> bool {
        let Some(node) = self.find_component_mut(id) else {
            warn!(id, "update_component: component not found");
            return false;
        };
        if patch.children.is_none()
            && let Some(Value::Array(items)) = patch.props.as_ref().and_then(|p| p.get("items"))
            && let Some(children) = node.children.as_ref()
        {
            let names: Vec<&Value> = items
                .iter()
                .filter_map(|item| item.get("name"))
                .filter(|name| !name.is_null())
                .collect();
            let kept: Vec<ComponentSchema> = children
                .iter()
                .filter(|child| match child.props.get(SLOT_KEY) {
                    Some(slot) if is_truthy(slot) => names.contains(&slot),
                    _ => true,
                })
                .cloned()
                .collect();
            if kept.len() != children.len() {
                debug!(id, dropped = children.len() - kept.len(), "orphaned slot children removed");
                patch.children = Some(kept);
            }
        }
        patch.apply_to(node);
        self.touch();
        true
    }

    /// Select a node, or clear the selection with `None`.
    ///
    /// Selecting an unknown id leaves the selection as it was.
    pub fn select_component(&mut self, id: Option<&str>) -> bool {
        let Some(id) = id else {
            self.selected = None;
            return true;
        };
        if self.find_component(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Move a node under `target_parent_id` at the visual index `target_index`.
    ///
    /// `target_index` is the position the user dropped at, measured before removal; moving
    /// down within the same parent is corrected by one. `slot` assigns the node to a named
    /// slot of the new parent, `None` clears any slot.
    pub fn move_component(
        &mut self,
        drag_id: &str,
        target_parent_id: &str,
        target_index: Option<usize>,
        slot: Option<&str>,
    ) -> bool {
        let Some(target) = self.find_component(target_parent_id) else {
            warn!(target = target_parent_id, "move_component: target parent not found");
            return false;
        };
        if !target.can_nest() {
            warn!(target = target_parent_id, "move_component: target cannot hold children");
            return false;
        }
        if drag_id == target_parent_id {
            warn!(id = drag_id, "move_component: cannot move a component into itself");
            return false;
        }
        if tree::is_descendant(
            target_parent_id,
            drag_id,
            slice::from_ref(&self.page_config.root_component),
        ) {
            warn!(id = drag_id, target = target_parent_id, "move_component: target is a descendant");
            return false;
        }
        let Some(old) = self.find_parent(drag_id) else {
            warn!(id = drag_id, "move_component: component not found");
            return false;
        };

        let Some(mut node) = self.delete_detached(drag_id) else {
            return false;
        };
        match slot {
            Some(name) => {
                node.props
                    .insert(SLOT_KEY.to_string(), Value::String(name.to_string()));
            }
            None => {
                node.props.remove(SLOT_KEY);
            }
        }

        let Some(children) = self
            .find_component_mut(target_parent_id)
            .and_then(|p| p.children.as_mut())
        else {
            return false;
        };
        let mut index = target_index.unwrap_or(children.len());
        if old.parent_id.as_deref() == Some(target_parent_id) && old.index < index {
            index -= 1;
        }
        let index = index.min(children.len());
        children.insert(index, node);
        debug!(id = drag_id, target = target_parent_id, index, "component moved");
        self.touch();
        true
    }

    /// Splice a node out without touching selection or timestamps.
    fn delete_detached(&mut self, id: &str) -> Option<ComponentSchema> {
        self.page_config
            .root_component
            .children
            .as_mut()
            .and_then(|children| tree::remove_by_id(id, children))
    }
}

