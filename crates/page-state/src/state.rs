use std::{mem, sync::Arc};

use expression::{
    ExpressionContext, SystemGlobals, resolve_binding, resolve_string_variables,
    resolve_variable, resolve_variables_in_config,
};
use futures::future::join_all;
use page_model::{ComponentPatch, ComponentSchema, DataBinding, PageConfig, now_millis};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::{
    ComponentInstanceRegistry, DataSourceStore, EditorStore, FormStateStore, HttpClient,
    fetch::{build_request, failed_fetch, perform},
};

struct Inner {
    editor: RwLock<EditorStore>,
    forms: RwLock<FormStateStore>,
    data_sources: RwLock<DataSourceStore>,
    instances: RwLock<ComponentInstanceRegistry>,
    globals: SystemGlobals,
}

/// Shared handle over every store of one page.
///
/// Clones share state. Guards returned by the accessors must not be held across an
/// `.await`; the async methods here take and release their locks between suspension points.
#[derive(Clone)]
pub struct PageState {
    inner: Arc<Inner>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageConfig::new("Untitled", "New page"))
    }
}

impl PageState {
    /// State for `page` with the default system globals.
    pub fn new(page: PageConfig) -> Self {
        Self::with_globals(page, SystemGlobals::default())
    }

    pub fn with_globals(page: PageConfig, globals: SystemGlobals) -> Self {
        let state = Self {
            inner: Arc::new(Inner {
                editor: RwLock::new(EditorStore::default()),
                forms: RwLock::new(FormStateStore::new()),
                data_sources: RwLock::new(DataSourceStore::new()),
                instances: RwLock::new(ComponentInstanceRegistry::new()),
                globals,
            }),
        };
        state.load_document(page);
        state
    }

    pub fn editor(&self) -> RwLockReadGuard<'_, EditorStore> {
        self.inner.editor.read()
    }

    pub fn editor_mut(&self) -> RwLockWriteGuard<'_, EditorStore> {
        self.inner.editor.write()
    }

    pub fn forms(&self) -> RwLockReadGuard<'_, FormStateStore> {
        self.inner.forms.read()
    }

    pub fn forms_mut(&self) -> RwLockWriteGuard<'_, FormStateStore> {
        self.inner.forms.write()
    }

    pub fn data_sources(&self) -> RwLockReadGuard<'_, DataSourceStore> {
        self.inner.data_sources.read()
    }

    pub fn data_sources_mut(&self) -> RwLockWriteGuard<'_, DataSourceStore> {
        self.inner.data_sources.write()
    }

    pub fn instances(&self) -> RwLockReadGuard<'_, ComponentInstanceRegistry> {
        self.inner.instances.read()
    }

    pub fn instances_mut(&self) -> RwLockWriteGuard<'_, ComponentInstanceRegistry> {
        self.inner.instances.write()
    }

    pub fn globals(&self) -> &SystemGlobals {
        &self.inner.globals
    }

    /// Run `f` against a consistent read view of the tree, form state and data sources.
    ///
    /// Do not call back into a `*_mut` accessor from inside `f`.
    pub fn with_expression_context<R>(&self, f: impl FnOnce(&ExpressionContext<'_>) -> R) -> R {
        let editor = self.inner.editor.read();
        let forms = self.inner.forms.read();
        let sources = self.inner.data_sources.read();
        let ctx = ExpressionContext::new(
            editor.page_root(),
            sources.sources(),
            &*forms,
            &self.inner.globals,
        );
        f(&ctx)
    }

    /// [`resolve_variable`] against the current state.
    pub fn resolve_variable(&self, path: &str) -> Option<Value> {
        self.with_expression_context(|ctx| resolve_variable(path, ctx))
    }

    /// [`resolve_string_variables`] against the current state.
    pub fn resolve_template(&self, text: &str) -> String {
        self.with_expression_context(|ctx| resolve_string_variables(text, ctx))
    }

    /// [`resolve_binding`] against the current state.
    pub fn resolve_binding(&self, binding: &DataBinding) -> Option<Value> {
        self.with_expression_context(|ctx| resolve_binding(binding, ctx))
    }

    pub fn set_component_state(&self, component_id: &str, key: &str, value: Value) {
        self.forms_mut().set(component_id, key, value);
    }

    pub fn update_component(&self, id: &str, patch: ComponentPatch) -> bool {
        self.editor_mut().update_component(id, patch)
    }

    /// Delete a node, then drop form state and live instances of it and every descendant.
    pub fn delete_component(&self, id: &str) -> Option<ComponentSchema> {
        let removed = self.editor_mut().delete_component(id)?;
        let ids = removed.subtree_ids();
        {
            let mut forms = self.forms_mut();
            for cid in &ids {
                forms.remove(cid);
            }
        }
        let mut instances = self.instances_mut();
        for cid in &ids {
            instances.unregister(cid);
        }
        debug!(id, purged = ids.len(), "component state purged");
        Some(removed)
    }

    /// Replace the tree and data sources with a saved document.
    ///
    /// Form state and live instances belong to the previous page and are dropped.
    pub fn load_document(&self, mut page: PageConfig) {
        let sources = mem::take(&mut page.data_sources);
        info!(id = %page.id, name = %page.name, data_sources = sources.len(), "page loaded");
        self.editor_mut().set_page_config(page);
        self.data_sources_mut().import(sources);
        *self.forms_mut() = FormStateStore::new();
        *self.instances_mut() = ComponentInstanceRegistry::new();
    }

    /// The persisted document: current tree plus data sources, fetch caches stripped.
    pub fn export_document(&self) -> PageConfig {
        let mut page = self.editor().page_config().clone();
        page.data_sources = self.data_sources().export();
        page.without_cache()
    }

    /// Fetch an API data source and cache the outcome.
    ///
    /// Unknown ids and static sources are ignored. Any failure is recorded as
    /// `{ "error": "Failed to fetch" }`; nothing is returned to the caller.
    pub async fn fetch_data_source(&self, id: &str, http: &dyn HttpClient) {
        let config = {
            let sources = self.data_sources();
            match sources.get(id).and_then(|ds| ds.api_config()) {
                Some(c) => c.clone(),
                None => {
                    debug!(id, "fetch skipped: not an api data source");
                    return;
                }
            }
        };
        let resolved = self.with_expression_context(|ctx| resolve_variables_in_config(&config, ctx));
        let request = build_request(&resolved);
        debug!(id, method = %request.method, url = %request.url, "fetching data source");

        let data = match perform(http, request).await {
            Ok(data) => data,
            Err(e) => {
                error!(id, error = %e, "failed to fetch data source");
                failed_fetch()
            }
        };
        self.data_sources_mut().record_fetch(id, data, now_millis());
    }

    /// Fetch every `autoFetch` source concurrently.
    pub async fn fetch_auto_sources(&self, http: &dyn HttpClient) {
        let ids = self.data_sources().auto_fetch_ids();
        join_all(ids.iter().map(|id| self.fetch_data_source(id, http))).await;
    }
}
