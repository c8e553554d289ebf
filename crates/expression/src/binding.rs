use page_model::{DataBinding, tree};
use serde_json::Value;
use tracing::debug;

use crate::{ExpressionContext, get_path, variable::lookup_decl};

/// Resolve a property-panel binding to a concrete value.
///
/// A component binding whose path matches nothing yields `""` so bound widgets render
/// blank. A component binding without a path is not a valid binding and yields `None`.
pub fn resolve_binding(binding: &DataBinding, ctx: &ExpressionContext<'_>) -> Option<Value> {
    match binding {
        DataBinding::Static { value } => Some(value.clone()),
        DataBinding::DataSource {
            data_source_id,
            path,
        } => {
            let data = ctx.data_sources.get(data_source_id)?.payload()?;
            match path.as_deref() {
                Some(p) if !p.is_empty() => get_path(data, p).cloned(),
                _ => Some(data.clone()),
            }
        }
        DataBinding::Component { component_id, path } => {
            let Some(path) = path.as_deref().filter(|p| !p.is_empty()) else {
                debug!(component_id = %component_id, "component binding without a path");
                return None;
            };
            let node = if ctx.root.id == *component_id {
                ctx.root
            } else {
                tree::find_by_id(component_id, ctx.root.children())?
            };
            if let Some(v) = ctx.form_state.component_state(&node.id, path) {
                return Some(v);
            }
            Some(
                lookup_decl(node, path)
                    .cloned()
                    .unwrap_or_else(|| Value::String(String::new())),
            )
        }
    }
}
