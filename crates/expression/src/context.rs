use std::collections::HashMap;

use indexmap::IndexMap;
use page_model::{ComponentSchema, DataSource, DataSourceId};
use serde_json::{Value, json};

/// Read access to live component state (the value a user typed or picked).
pub trait ComponentStateSource {
    /// The value stored under `key` for `component_id`, if any.
    fn component_state(&self, component_id: &str, key: &str) -> Option<Value>;
}

impl ComponentStateSource for HashMap<String, HashMap<String, Value>> {
    fn component_state(&self, component_id: &str, key: &str) -> Option<Value> {
        self.get(component_id)?.get(key).cloned()
    }
}

/// Values reachable through the `user` root token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemGlobals {
    /// `user.name`
    pub user_name: String,
    /// `user.email`
    pub user_email: String,
}

impl Default for SystemGlobals {
    fn default() -> Self {
        Self {
            user_name: "Guest User".to_string(),
            user_email: "guest@example.com".to_string(),
        }
    }
}

impl SystemGlobals {
    /// Resolve `root.rest` against the fixed global set (`user.name`, `user.email`).
    pub fn lookup(&self, root: &str, rest: &str) -> Option<Value> {
        match (root, rest) {
            ("user", "name") => Some(json!(self.user_name)),
            ("user", "email") => Some(json!(self.user_email)),
            _ => None,
        }
    }
}

/// Borrowed view of everything an expression may read.
///
/// Build one per resolution pass; it holds no locks of its own.
#[derive(Clone, Copy)]
pub struct ExpressionContext<'a> {
    /// Page root; searched together with all its descendants.
    pub root: &'a ComponentSchema,
    /// Data sources in insertion order.
    pub data_sources: &'a IndexMap<DataSourceId, DataSource>,
    /// Live form values.
    pub form_state: &'a dyn ComponentStateSource,
    /// Fallback values for the `user` token.
    pub globals: &'a SystemGlobals,
}

impl<'a> ExpressionContext<'a> {
    /// Bundle the borrowed parts into a context.
    pub fn new(
        root: &'a ComponentSchema,
        data_sources: &'a IndexMap<DataSourceId, DataSource>,
        form_state: &'a dyn ComponentStateSource,
        globals: &'a SystemGlobals,
    ) -> Self {
        Self {
            root,
            data_sources,
            form_state,
            globals,
        }
    }
}
