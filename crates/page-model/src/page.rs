use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ComponentSchema, ComponentType, DataSource, DataSourceId, Error, Result, new_id};

/// Current time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Persisted page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub root_component: ComponentSchema,
    /// Insertion ordered; name lookups return the first match.
    #[serde(default)]
    pub data_sources: IndexMap<DataSourceId, DataSource>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl PageConfig {
    /// Empty page with a fresh `PageRoot`.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            id: new_id(),
            name: name.into(),
            title: title.into(),
            root_component: Self::default_root(),
            data_sources: IndexMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// A `PageRoot` node named `pageRoot1` with no children.
    pub fn default_root() -> ComponentSchema {
        let mut root = ComponentSchema::new(new_id(), ComponentType::PageRoot)
            .with_semantic_id("pageRoot1")
            .nestable();
        root.label = "Page".to_string();
        root
    }

    /// Decode and validate a document.
    pub fn from_json(text: &str) -> Result<Self> {
        let page: Self = serde_json::from_str(text)?;
        page.validate()?;
        Ok(page)
    }

    /// Encode the document, dropping volatile fetch caches.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.without_cache())?)
    }

    /// Clone with `data`/`lastFetched` cleared on every data source.
    pub fn without_cache(&self) -> Self {
        let mut out = self.clone();
        for ds in out.data_sources.values_mut() {
            ds.data = None;
            ds.last_fetched = None;
        }
        out
    }

    /// Exactly one `PageRoot`, and it is the root.
    pub fn validate(&self) -> Result<()> {
        let root = &self.root_component;
        if root.component_type != ComponentType::PageRoot {
            return Err(Error::InvalidRoot {
                found: root.component_type.to_string(),
            });
        }
        if let Some(nested) = root
            .walk()
            .skip(1)
            .find(|n| n.component_type == ComponentType::PageRoot)
        {
            return Err(Error::NestedRoot {
                id: nested.id.clone(),
            });
        }
        Ok(())
    }
}
