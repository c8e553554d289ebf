use std::sync::Arc;

use page_model::MessageKind;
use page_state::{HttpClient, PageState};
use tracing::{error, info};

use crate::{Host, RhaiScriptHost, ScriptHost, Toast};

/// Everything an action may touch while it runs.
///
/// Cheap to clone; every field is a shared handle.
#[derive(Clone)]
pub struct EventContext {
    pub page: PageState,
    pub http: Arc<dyn HttpClient>,
    pub host: Arc<dyn Host>,
    /// When absent, notifications go to the log.
    pub toast: Option<Arc<dyn Toast>>,
    pub scripts: Arc<dyn ScriptHost>,
}

impl EventContext {
    /// Context with no toast surface and a default-limited Rhai script host.
    pub fn new(page: PageState, http: Arc<dyn HttpClient>, host: Arc<dyn Host>) -> Self {
        Self {
            page,
            http,
            host,
            toast: None,
            scripts: Arc::new(RhaiScriptHost::default()),
        }
    }

    pub fn with_toast(mut self, toast: Arc<dyn Toast>) -> Self {
        self.toast = Some(toast);
        self
    }

    pub fn with_scripts(mut self, scripts: Arc<dyn ScriptHost>) -> Self {
        self.scripts = scripts;
        self
    }

    /// Show `message` through the toast surface, falling back to the log.
    pub fn notify(&self, kind: MessageKind, message: &str) {
        match &self.toast {
            Some(toast) => toast.show(kind, message),
            None => {
                info!("[{}] {}", kind, message);
                if kind == MessageKind::Error {
                    error!("{}", message);
                }
            }
        }
    }
}
