use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level runtime configuration.
///
/// Every section is optional in the file; missing fields take their defaults and unknown
/// fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Outgoing data source requests.
    pub http: HttpConfig,
    /// Values behind the `user.*` expression token.
    pub globals: GlobalsConfig,
    /// Sandbox limits for `runScript` actions.
    pub script: ScriptConfig,
    /// Where the command-line host keeps its local storage.
    pub storage: StorageConfig,
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Whole-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            user_agent: concat!("pagert/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// System global values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalsConfig {
    /// `user.name`
    pub user_name: String,
    /// `user.email`
    pub user_email: String,
}

impl Default for GlobalsConfig {
    fn default() -> Self {
        Self {
            user_name: "Guest User".to_string(),
            user_email: "guest@example.com".to_string(),
        }
    }
}

/// Resource limits applied to every script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptConfig {
    /// Maximum number of VM operations before a script is aborted.
    pub max_operations: u64,
    /// Maximum function call depth.
    pub max_call_levels: usize,
    /// Maximum expression nesting depth.
    pub max_expr_depth: usize,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            max_operations: 200_000,
            max_call_levels: 64,
            max_expr_depth: 128,
        }
    }
}

/// Local storage persistence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// JSON file backing local storage; kept in memory when unset.
    pub path: Option<PathBuf>,
}
