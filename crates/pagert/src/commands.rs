//! Subcommand implementations, kept free of terminal output so they can be tested.

use std::{fmt::Write as _, fs, path::Path, sync::Arc};

use config::RuntimeConfig;
use event_engine::{EventContext, Host, RhaiScriptHost};
use expression::SystemGlobals;
use page_model::{ComponentSchema, PageConfig, duplicate_semantic_ids, validate_component_schema};
use page_state::{HttpClient, PageState};
use serde_json::Value;
use tracing::debug;

use crate::{
    Error, Result,
    host::StderrToast,
};

/// Read and validate a page document.
pub fn load_page(path: &Path) -> Result<PageConfig> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    PageConfig::from_json(&text).map_err(|source| Error::Page {
        path: path.to_path_buf(),
        source,
    })
}

/// Page state seeded with the configured system globals.
pub fn page_state(page: PageConfig, cfg: &RuntimeConfig) -> PageState {
    PageState::with_globals(
        page,
        SystemGlobals {
            user_name: cfg.globals.user_name.clone(),
            user_email: cfg.globals.user_email.clone(),
        },
    )
}

/// Event context wired to the terminal: toasts on stderr and script limits from config.
pub fn event_context(
    state: PageState,
    cfg: &RuntimeConfig,
    http: Arc<dyn HttpClient>,
    host: Arc<dyn Host>,
) -> EventContext {
    EventContext::new(state, http, host)
        .with_toast(Arc::new(StderrToast))
        .with_scripts(Arc::new(RhaiScriptHost::new(&cfg.script)))
}

/// Warnings about a document that loads but may not behave as intended.
pub fn check_report(page: &PageConfig) -> Vec<String> {
    let mut out = Vec::new();
    for node in page.root_component.walk() {
        if !validate_component_schema(node) {
            out.push(format!(
                "component '{}' ({}) is missing an id, semantic id or label",
                node.id, node.component_type
            ));
        }
    }
    for (semantic_id, ids) in duplicate_semantic_ids(&page.root_component) {
        out.push(format!(
            "semantic id '{}' is shared by {}; expressions resolve to '{}'",
            semantic_id,
            ids.join(", "),
            ids.first().map(String::as_str).unwrap_or_default()
        ));
    }
    out
}

/// One line per node: type, semantic id, id and the triggers it listens to.
pub fn render_tree(root: &ComponentSchema) -> String {
    let mut out = String::new();
    render_node(root, 0, &mut out);
    out
}

fn render_node(node: &ComponentSchema, depth: usize, out: &mut String) {
    let _ignored = write!(
        out,
        "{}{} {} ({})",
        "  ".repeat(depth),
        node.component_type,
        node.semantic_id,
        node.id
    );
    if let Some(slot) = node.slot() {
        let _ignored = write!(out, " slot={slot}");
    }
    if !node.events.is_empty() {
        let triggers: Vec<&str> = node.events.iter().map(|e| e.trigger.as_str()).collect();
        let _ignored = write!(out, " [{}]", triggers.join(", "));
    }
    out.push('\n');
    for child in node.children() {
        render_node(child, depth + 1, out);
    }
}

/// Fetch a data source by id or name and return what the resolver now sees for it.
pub async fn fetch_source(state: &PageState, source: &str, http: &dyn HttpClient) -> Result<Value> {
    let id = {
        let sources = state.data_sources();
        sources
            .get(source)
            .or_else(|| sources.find_by_name(source))
            .map(|ds| ds.id.clone())
            .ok_or_else(|| Error::NotFound(format!("no data source named or with id '{source}'")))?
    };
    debug!(id = %id, "fetching from command line");
    state.fetch_data_source(&id, http).await;
    let sources = state.data_sources();
    Ok(sources
        .get(&id)
        .and_then(|ds| ds.payload())
        .cloned()
        .unwrap_or(Value::Null))
}
