use std::collections::HashMap;

use expression::ComponentStateSource;
use page_model::ComponentId;
use serde_json::Value;

/// Live two-way-bound values keyed by component id, then by binding key (`value`, `checked`).
#[derive(Debug, Clone, Default)]
pub struct FormStateStore {
    states: HashMap<ComponentId, HashMap<String, Value>>,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, creating the component entry on first use.
    pub fn set(&mut self, component_id: &str, key: &str, value: Value) {
        self.states
            .entry(component_id.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    pub fn get(&self, component_id: &str, key: &str) -> Option<&Value> {
        self.states.get(component_id)?.get(key)
    }

    /// Every bound key of one component.
    pub fn get_all(&self, component_id: &str) -> Option<&HashMap<String, Value>> {
        self.states.get(component_id)
    }

    /// Drop a component's whole entry.
    pub fn remove(&mut self, component_id: &str) -> bool {
        self.states.remove(component_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl ComponentStateSource for FormStateStore {
    fn component_state(&self, component_id: &str, key: &str) -> Option<Value> {
        self.get(component_id, key).cloned()
    }
}
