use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use page_model::ComponentId;
use serde_json::Value;

use crate::Result;

/// A live, rendered component that exposes named methods (`focus`, `reset`, ...).
#[async_trait]
pub trait ComponentHandle: Send + Sync {
    /// Whether `method` can be invoked.
    fn has_method(&self, method: &str) -> bool;

    /// Invoke `method` with positional `args`.
    async fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Value>;
}

/// Live instances keyed by component id.
#[derive(Clone, Default)]
pub struct ComponentInstanceRegistry {
    instances: HashMap<ComponentId, Arc<dyn ComponentHandle>>,
}

impl ComponentInstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` under `id`; an empty id is ignored.
    pub fn register(&mut self, id: &str, handle: Arc<dyn ComponentHandle>) {
        if !id.is_empty() {
            self.instances.insert(id.to_string(), handle);
        }
    }

    pub fn unregister(&mut self, id: &str) -> bool {
        self.instances.remove(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn ComponentHandle>> {
        self.instances.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
