use futures::future::join_all;
use page_model::{Action, EventBinding, tree};
use tracing::{debug, warn};

use crate::{EventContext, handlers};

/// Run every action of `event` concurrently and wait for all of them.
///
/// No ordering between the actions is guaranteed. Failures are handled per action and never
/// stop the others.
pub async fn execute_event(event: &EventBinding, ctx: &EventContext) {
    debug!(
        event = %event.id,
        trigger = %event.trigger,
        actions = event.actions.len(),
        "executing event"
    );
    join_all(event.actions.iter().map(|a| execute_action(a, ctx))).await;
}

/// Run a single action.
pub async fn execute_action(action: &Action, ctx: &EventContext) {
    debug!(action = action.type_name(), "executing action");
    match action {
        Action::ShowMessage(c) => handlers::show_message(c, ctx).await,
        Action::CallDataSource(c) => handlers::call_data_source(&c.data_source_id, ctx).await,
        Action::UpdateProperty(c) => handlers::update_property(c, ctx).await,
        Action::RunScript(c) => handlers::run_script(c, ctx).await,
        Action::ControlComponent(c) => handlers::control_component(c, ctx).await,
        Action::GoToUrl(c) => handlers::go_to_url(c, ctx).await,
        Action::NavigateTo(c) => handlers::navigate_to(c, ctx).await,
        Action::CopyToClipboard(c) => handlers::copy_to_clipboard(c, ctx).await,
        Action::SetGlobalData(c) => handlers::set_global_data(c, ctx).await,
        Action::SetLocalStorage(c) => handlers::set_local_storage(c, ctx).await,
        Action::Download(c) => handlers::download(c, ctx).await,
        Action::Unknown { kind, .. } => warn!("Unknown action type: {}", kind),
    }
}

/// Execute every binding on component `id` whose trigger is `trigger`.
///
/// `id` may be a component id or a semantic id. Returns how many bindings ran.
pub async fn fire_trigger(ctx: &EventContext, id: &str, trigger: &str) -> usize {
    let events: Vec<EventBinding> = {
        let editor = ctx.page.editor();
        let root = editor.page_root();
        let node = if root.id == id || root.semantic_id == id {
            Some(root)
        } else {
            tree::find_by_id(id, root.children())
                .or_else(|| tree::find_by_semantic_id(id, root.children()))
        };
        let Some(node) = node else {
            warn!(component = id, "fire target not found");
            return 0;
        };
        node.events
            .iter()
            .filter(|e| e.trigger == trigger)
            .cloned()
            .collect()
    };
    for event in &events {
        execute_event(event, ctx).await;
    }
    events.len()
}
