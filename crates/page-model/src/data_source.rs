//! Data source descriptors and declarative data bindings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::is_truthy;

/// Opaque data source identifier.
pub type DataSourceId = String;

/// HTTP verb used by an API data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
        }
    }

    /// GET and HEAD requests never carry a body.
    pub fn allows_body(self) -> bool {
        !matches!(self, Self::Get | Self::Head)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered key/value pair; kept as a list to preserve duplicates and form order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyValue {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDataSourceConfig {
    pub url: String,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default)]
    pub params: Vec<KeyValue>,
    #[serde(default)]
    pub headers: Vec<KeyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub auto_fetch: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaticDataSourceConfig {
    #[serde(default)]
    pub data: Value,
}

/// Discriminant of [`DataSourceConfig`], the `type` field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataSourceKind {
    Api,
    Static,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataSourceConfig {
    Api(ApiDataSourceConfig),
    Static(StaticDataSourceConfig),
}

impl DataSourceConfig {
    pub fn kind(&self) -> DataSourceKind {
        match self {
            Self::Api(_) => DataSourceKind::Api,
            Self::Static(_) => DataSourceKind::Static,
        }
    }
}

/// A named, independently fetchable data descriptor plus its last payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataSource", into = "RawDataSource")]
pub struct DataSource {
    pub id: DataSourceId,
    pub name: String,
    pub config: DataSourceConfig,
    /// Last successful payload, or the `{ "error": "Failed to fetch" }` sentinel.
    pub data: Option<Value>,
    /// Epoch milliseconds of the last fetch attempt.
    pub last_fetched: Option<i64>,
}

impl DataSource {
    pub fn api(
        id: impl Into<DataSourceId>,
        name: impl Into<String>,
        config: ApiDataSourceConfig,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            config: DataSourceConfig::Api(config),
            data: None,
            last_fetched: None,
        }
    }

    pub fn fixed(id: impl Into<DataSourceId>, name: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            config: DataSourceConfig::Static(StaticDataSourceConfig { data }),
            data: None,
            last_fetched: None,
        }
    }

    pub fn kind(&self) -> DataSourceKind {
        self.config.kind()
    }

    pub fn api_config(&self) -> Option<&ApiDataSourceConfig> {
        match &self.config {
            DataSourceConfig::Api(c) => Some(c),
            DataSourceConfig::Static(_) => None,
        }
    }

    /// Payload visible to bindings: the cached `data`, or a static source's configured data.
    ///
    /// Falsy values (`false`, `0`, `""`, `null`) count as no data.
    pub fn payload(&self) -> Option<&Value> {
        match (&self.data, &self.config) {
            (Some(data), _) if is_truthy(data) => Some(data),
            (_, DataSourceConfig::Static(c)) if is_truthy(&c.data) => Some(&c.data),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataSource {
    #[serde(default)]
    id: DataSourceId,
    name: String,
    #[serde(rename = "type")]
    kind: DataSourceKind,
    #[serde(default)]
    config: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_fetched: Option<i64>,
}

impl TryFrom<RawDataSource> for DataSource {
    type Error = serde_json::Error;

    fn try_from(raw: RawDataSource) -> Result<Self, Self::Error> {
        let config = match raw.config {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        let config = match raw.kind {
            DataSourceKind::Api => DataSourceConfig::Api(serde_json::from_value(config)?),
            DataSourceKind::Static => DataSourceConfig::Static(serde_json::from_value(config)?),
        };
        Ok(Self {
            id: raw.id,
            name: raw.name,
            config,
            data: raw.data,
            last_fetched: raw.last_fetched,
        })
    }
}

impl From<DataSource> for RawDataSource {
    fn from(ds: DataSource) -> Self {
        let kind = ds.kind();
        let config = match ds.config {
            DataSourceConfig::Api(c) => serde_json::to_value(c),
            DataSourceConfig::Static(c) => serde_json::to_value(c),
        };
        Self {
            id: ds.id,
            name: ds.name,
            kind,
            config: config.unwrap_or_default(),
            data: ds.data,
            last_fetched: ds.last_fetched,
        }
    }
}

/// Partial update applied by `DataSourceStore::update_data_source`.
#[derive(Debug, Clone, Default)]
pub struct DataSourceUpdate {
    pub name: Option<String>,
    pub config: Option<DataSourceConfig>,
    pub data: Option<Value>,
    pub last_fetched: Option<i64>,
}

/// Declarative pointer resolved on demand by the property-panel binding UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DataBinding {
    Static {
        #[serde(default)]
        value: Value,
    },
    DataSource {
        data_source_id: DataSourceId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
    Component {
        component_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
}
