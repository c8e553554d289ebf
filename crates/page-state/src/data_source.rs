use indexmap::IndexMap;
use page_model::{DataSource, DataSourceConfig, DataSourceId, DataSourceUpdate, new_id};
use serde_json::Value;
use tracing::debug;

/// Registry of named data sources, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DataSourceStore {
    sources: IndexMap<DataSourceId, DataSource>,
}

impl DataSourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sources(&self) -> &IndexMap<DataSourceId, DataSource> {
        &self.sources
    }

    pub fn get(&self, id: &str) -> Option<&DataSource> {
        self.sources.get(id)
    }

    /// First source (in insertion order) named `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&DataSource> {
        self.sources.values().find(|ds| ds.name == name)
    }

    /// Register a new source under a generated id.
    pub fn add(&mut self, name: impl Into<String>, config: DataSourceConfig) -> DataSourceId {
        let id = new_id();
        let ds = DataSource {
            id: id.clone(),
            name: name.into(),
            config,
            data: None,
            last_fetched: None,
        };
        debug!(id = %id, name = %ds.name, "data source added");
        self.sources.insert(id.clone(), ds);
        id
    }

    /// Apply the present fields of `update`. Unknown ids are ignored.
    pub fn update(&mut self, id: &str, update: DataSourceUpdate) -> bool {
        let Some(ds) = self.sources.get_mut(id) else {
            return false;
        };
        if let Some(name) = update.name {
            ds.name = name;
        }
        if let Some(config) = update.config {
            ds.config = config;
        }
        if let Some(data) = update.data {
            ds.data = Some(data);
        }
        if let Some(at) = update.last_fetched {
            ds.last_fetched = Some(at);
        }
        true
    }

    /// Store a fetch outcome (payload or failure sentinel) with its timestamp.
    pub fn record_fetch(&mut self, id: &str, data: Value, at: i64) -> bool {
        self.update(
            id,
            DataSourceUpdate {
                data: Some(data),
                last_fetched: Some(at),
                ..DataSourceUpdate::default()
            },
        )
    }

    pub fn remove(&mut self, id: &str) -> Option<DataSource> {
        self.sources.shift_remove(id)
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }

    /// Replace every source, as when a saved page is loaded.
    pub fn import(&mut self, sources: IndexMap<DataSourceId, DataSource>) {
        self.sources = sources;
    }

    pub fn export(&self) -> IndexMap<DataSourceId, DataSource> {
        self.sources.clone()
    }

    /// API sources flagged to fetch when the page loads.
    pub fn auto_fetch_ids(&self) -> Vec<DataSourceId> {
        self.sources
            .values()
            .filter(|ds| ds.api_config().is_some_and(|c| c.auto_fetch))
            .map(|ds| ds.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
