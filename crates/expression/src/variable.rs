use once_cell::sync::Lazy;
use page_model::{ApiDataSourceConfig, ComponentSchema, KeyValue};
use regex::{Captures, Regex};
use serde_json::Value;
use tracing::trace;

use crate::{ExpressionContext, get_path, path::get_in, value_to_string};

static TEMPLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(.+?)\}\}").expect("template regex compiles"));

/// Resolve a dotted variable path such as `input1.value`, `users.items[0].name` or
/// `user.email`.
///
/// The first segment is looked up as a component semantic id (first depth-first match),
/// then as a data source name, then as a system global.
pub fn resolve_variable(path: &str, ctx: &ExpressionContext<'_>) -> Option<Value> {
    let (root, rest) = path.split_once('.').unwrap_or((path, ""));

    if let Some(node) = ctx.root.walk().find(|n| n.semantic_id == root) {
        return component_value(node, rest, ctx);
    }

    if let Some(data) = ctx
        .data_sources
        .values()
        .find(|ds| ds.name == root)
        .and_then(|ds| ds.payload())
    {
        return if rest.is_empty() {
            Some(data.clone())
        } else {
            get_path(data, rest).cloned()
        };
    }

    let global = ctx.globals.lookup(root, rest);
    if global.is_none() {
        trace!(path, "variable unresolved");
    }
    global
}

/// Form state, then props, then style; an empty remainder falls back to the `value` state.
fn component_value(node: &ComponentSchema, rest: &str, ctx: &ExpressionContext<'_>) -> Option<Value> {
    if let Some(v) = ctx.form_state.component_state(&node.id, rest) {
        return Some(v);
    }
    if let Some(v) = lookup_decl(node, rest) {
        return Some(v.clone());
    }
    if rest.is_empty() {
        return ctx.form_state.component_state(&node.id, "value");
    }
    None
}

/// Declared value of `path` on a node: `props` first, then `style`.
pub fn lookup_decl<'a>(node: &'a ComponentSchema, path: &str) -> Option<&'a Value> {
    get_in(&node.props, path).or_else(|| get_in(&node.style, path))
}

/// Replace every `{{expr}}` in `text` with the text form of `resolve_variable(expr.trim())`.
///
/// Unresolved tokens become the empty string. Braces do not nest.
pub fn resolve_string_variables(text: &str, ctx: &ExpressionContext<'_>) -> String {
    if !text.contains("{{") {
        return text.to_string();
    }
    TEMPLATE
        .replace_all(text, |caps: &Captures<'_>| {
            resolve_variable(caps[1].trim(), ctx)
                .map(|v| value_to_string(&v))
                .unwrap_or_default()
        })
        .into_owned()
}

/// Resolve templates in an API data source's url, body, and every param and header pair.
///
/// Returns a new config; the input is left untouched.
pub fn resolve_variables_in_config(
    config: &ApiDataSourceConfig,
    ctx: &ExpressionContext<'_>,
) -> ApiDataSourceConfig {
    let pairs = |list: &[KeyValue]| -> Vec<KeyValue> {
        list.iter()
            .map(|kv| KeyValue {
                key: resolve_string_variables(&kv.key, ctx),
                value: resolve_string_variables(&kv.value, ctx),
            })
            .collect()
    };
    ApiDataSourceConfig {
        url: resolve_string_variables(&config.url, ctx),
        method: config.method,
        params: pairs(&config.params),
        headers: pairs(&config.headers),
        body: config
            .body
            .as_deref()
            .map(|b| resolve_string_variables(b, ctx)),
        auto_fetch: config.auto_fetch,
    }
}
