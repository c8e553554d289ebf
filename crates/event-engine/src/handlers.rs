//! One handler per action kind.
//!
//! Handlers never fail: problems are logged, or reported through the toast surface where a
//! user would expect to see them.

use page_model::{
    ComponentPatch, ControlComponentConfig, CopyToClipboardConfig, DownloadConfig,
    GoToUrlConfig, MessageKind, NavigateToConfig, Props, RunScriptConfig, SetGlobalDataConfig,
    SetLocalStorageConfig, ShowMessageConfig, UpdatePropertyConfig,
};
use page_state::PageState;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{EventContext, ScriptEffect};

pub async fn show_message(cfg: &ShowMessageConfig, ctx: &EventContext) {
    ctx.notify(cfg.message_type, &cfg.message);
}

pub async fn call_data_source(id: &str, ctx: &EventContext) {
    if id.is_empty() {
        warn!("callDataSource without a data source id");
        return;
    }
    ctx.page.fetch_data_source(id, &*ctx.http).await;
}

/// Replaces the target's props with `{ targetProperty: newValue }`.
pub async fn update_property(cfg: &UpdatePropertyConfig, ctx: &EventContext) {
    if cfg.target_component_id.is_empty() || cfg.target_property.is_empty() {
        warn!("updateProperty without a target component or property");
        return;
    }
    let mut props = Props::new();
    props.insert(cfg.target_property.clone(), cfg.new_value.clone());
    ctx.page
        .update_component(&cfg.target_component_id, ComponentPatch::props(props));
}

pub async fn run_script(cfg: &RunScriptConfig, ctx: &EventContext) {
    match ctx.scripts.run(&cfg.code, &ctx.page) {
        Ok(effects) => apply_script_effects(effects, ctx).await,
        Err(e) => error!("script execution failed: {}", e),
    }
}

pub async fn control_component(cfg: &ControlComponentConfig, ctx: &EventContext) {
    let handle = ctx.page.instances().get(&cfg.component_id);
    let Some(handle) = handle.filter(|h| h.has_method(&cfg.method)) else {
        warn!(
            "Component {} or method {} not found",
            cfg.component_id, cfg.method
        );
        return;
    };
    match handle.invoke(&cfg.method, cfg.args.clone()).await {
        Ok(v) => debug!(component = %cfg.component_id, method = %cfg.method, result = %v, "component method invoked"),
        Err(e) => error!(component = %cfg.component_id, method = %cfg.method, error = %e, "component method failed"),
    }
}

pub async fn go_to_url(cfg: &GoToUrlConfig, ctx: &EventContext) {
    if cfg.url.is_empty() {
        warn!("goToUrl without a url");
        return;
    }
    ctx.host.open_url(&cfg.url, cfg.new_tab);
}

pub async fn navigate_to(cfg: &NavigateToConfig, ctx: &EventContext) {
    match cfg.path.as_deref() {
        Some(path) if !path.is_empty() => ctx.host.set_location_hash(path),
        _ => debug!("navigateTo without a path; nothing to do"),
    }
}

pub async fn copy_to_clipboard(cfg: &CopyToClipboardConfig, ctx: &EventContext) {
    match ctx.host.write_clipboard(&cfg.text).await {
        Ok(()) => ctx.notify(MessageKind::Success, "Copied to clipboard"),
        Err(e) => {
            error!(error = %e, "clipboard write failed");
            ctx.notify(MessageKind::Error, "Failed to copy");
        }
    }
}

pub async fn set_global_data(cfg: &SetGlobalDataConfig, _ctx: &EventContext) {
    warn!(key = %cfg.key, "setGlobalData is not fully implemented; value dropped");
}

pub async fn set_local_storage(cfg: &SetLocalStorageConfig, ctx: &EventContext) {
    if cfg.key.is_empty() {
        warn!("setLocalStorage without a key");
        return;
    }
    if let Err(e) = ctx.host.set_local_storage(&cfg.key, &cfg.value.to_string()) {
        warn!(key = %cfg.key, error = %e, "failed to write local storage");
    }
}

pub async fn download(cfg: &DownloadConfig, ctx: &EventContext) {
    if cfg.url.is_empty() {
        warn!("download without a url");
        return;
    }
    ctx.host.download(&cfg.url, cfg.filename.as_deref());
}

/// Apply the effects a script queued, in order.
pub async fn apply_script_effects(effects: Vec<ScriptEffect>, ctx: &EventContext) {
    for effect in effects {
        match effect {
            ScriptEffect::SetState {
                component_id,
                key,
                value,
            } => ctx.page.set_component_state(&component_id, &key, value),
            ScriptEffect::UpdateProp {
                component_id,
                prop,
                value,
            } => {
                set_prop(&ctx.page, &component_id, &prop, value);
            }
            ScriptEffect::Toast { kind, message } => ctx.notify(kind, &message),
            ScriptEffect::CallDataSource { data_source_id } => {
                call_data_source(&data_source_id, ctx).await;
            }
        }
    }
}

/// Set one prop, keeping the others. Used by script `update_prop`.
fn set_prop(page: &PageState, component_id: &str, prop: &str, value: Value) -> bool {
    let props = {
        let editor = page.editor();
        let Some(node) = editor.find_component(component_id) else {
            warn!(component = component_id, "update_prop target not found");
            return false;
        };
        let mut props = node.props.clone();
        props.insert(prop.to_string(), value);
        props
    };
    page.update_component(component_id, ComponentPatch::props(props))
}
