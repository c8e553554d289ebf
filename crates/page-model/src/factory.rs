//! Node creation and semantic id bookkeeping.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::{ComponentMeta, ComponentPatch, ComponentSchema, ComponentType, tree::collect_all};

/// Fresh process-unique id for a node, data source or event binding.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Next `{type}{n}` name, where `n - 1` is the number of same-type nodes anywhere in
/// `existing` (nested slot children included) that already carry a semantic id.
pub fn generate_semantic_id(component_type: ComponentType, existing: &[ComponentSchema]) -> String {
    let same_type = collect_all(existing)
        .into_iter()
        .filter(|c| c.component_type == component_type && !c.semantic_id.is_empty())
        .count();
    format!("{}{}", component_type.as_str(), same_type + 1)
}

/// Build a node from its type descriptor.
///
/// Props are seeded from `props_schema` defaults, then `default_props`; `overrides` are
/// assigned last. Nestable types always get a children list.
pub fn create_component(
    meta: &ComponentMeta,
    overrides: Option<ComponentPatch>,
    existing: &[ComponentSchema],
) -> ComponentSchema {
    let semantic_id = generate_semantic_id(meta.component_type, existing);

    let mut props = meta
        .props_schema
        .iter()
        .filter_map(|p| p.default_value.clone().map(|v| (p.key.clone(), v)))
        .collect::<serde_json::Map<String, Value>>();
    props.extend(meta.default_props.clone());

    let mut node = ComponentSchema {
        id: new_id(),
        semantic_id,
        component_type: meta.component_type,
        label: meta.name.clone(),
        props,
        style: meta.default_style.clone(),
        children: None,
        events: Vec::new(),
    };
    if let Some(patch) = overrides {
        patch.apply_to(&mut node);
    }
    if meta.can_nest {
        node.children.get_or_insert_with(Vec::new);
    }
    debug!(id = %node.id, semantic_id = %node.semantic_id, "component created");
    node
}

/// Fill in missing semantic ids on documents saved before they existed.
///
/// Numbering continues per type from the count of nodes that already have one.
pub fn migrate_semantic_ids(nodes: &mut [ComponentSchema]) {
    let mut counters: HashMap<ComponentType, usize> = HashMap::new();
    for node in collect_all(nodes) {
        if !node.semantic_id.is_empty() {
            *counters.entry(node.component_type).or_default() += 1;
        }
    }
    for node in nodes.iter_mut() {
        migrate_node(node, &mut counters);
    }
}

fn migrate_node(node: &mut ComponentSchema, counters: &mut HashMap<ComponentType, usize>) {
    if node.semantic_id.is_empty() {
        let n = counters.entry(node.component_type).or_default();
        *n += 1;
        node.semantic_id = format!("{}{}", node.component_type.as_str(), n);
        debug!(id = %node.id, semantic_id = %node.semantic_id, "semantic id migrated");
    }
    if let Some(children) = node.children.as_mut() {
        for child in children {
            migrate_node(child, counters);
        }
    }
}

/// Minimal structural check on a node's identity fields.
pub fn validate_component_schema(node: &ComponentSchema) -> bool {
    !node.id.is_empty() && !node.semantic_id.is_empty() && !node.label.is_empty()
}

/// Semantic ids carried by more than one node under `root`, with the colliding node ids.
///
/// Expression lookup takes the first node in document order, so every later node listed
/// here is unreachable from `{{...}}` templates.
pub fn duplicate_semantic_ids(root: &ComponentSchema) -> BTreeMap<String, Vec<String>> {
    let mut seen: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for node in root.walk().filter(|n| !n.semantic_id.is_empty()) {
        seen.entry(node.semantic_id.clone())
            .or_default()
            .push(node.id.clone());
    }
    seen.retain(|_, ids| ids.len() > 1);
    seen
}
