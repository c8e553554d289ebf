//! Terminal implementations of the browser-level capabilities.

use std::{
    fs,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use event_engine::{Error, Host, Result, Toast};
use page_model::MessageKind;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Host for command-line runs.
///
/// Local storage persists to a JSON object file when a path is configured and stays in memory
/// otherwise. The clipboard is always in memory. Navigation and downloads are only logged.
#[derive(Default)]
pub struct TerminalHost {
    storage_path: Option<PathBuf>,
    memory: Mutex<Map<String, Value>>,
    clipboard: Mutex<Option<String>>,
}

impl TerminalHost {
    pub fn new(storage_path: Option<PathBuf>) -> Self {
        Self {
            storage_path,
            ..Self::default()
        }
    }

    /// Current contents of local storage.
    pub fn local_storage(&self) -> Result<Map<String, Value>> {
        match &self.storage_path {
            Some(path) => read_storage(path),
            None => Ok(self.memory.lock().clone()),
        }
    }

    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.lock().clone()
    }
}

fn read_storage(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))?;
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str(&text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::Storage(format!(
            "{}: expected a JSON object",
            path.display()
        ))),
        Err(e) => Err(Error::Storage(format!("{}: {}", path.display(), e))),
    }
}

fn write_storage(path: &Path, map: Map<String, Value>) -> Result<()> {
    let text = serde_json::to_string_pretty(&Value::Object(map))
        .map_err(|e| Error::Storage(e.to_string()))?;
    fs::write(path, text).map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))
}

#[async_trait]
impl Host for TerminalHost {
    fn open_url(&self, url: &str, new_tab: bool) {
        info!(url, new_tab, "open url");
    }

    fn set_location_hash(&self, path: &str) {
        info!(hash = path, "navigate");
    }

    fn set_local_storage(&self, key: &str, json: &str) -> Result<()> {
        let value = Value::String(json.to_string());
        match &self.storage_path {
            Some(path) => {
                let mut map = read_storage(path)?;
                map.insert(key.to_string(), value);
                write_storage(path, map)?;
                debug!(key, path = %path.display(), "local storage written");
            }
            None => {
                self.memory.lock().insert(key.to_string(), value);
                debug!(key, "local storage kept in memory");
            }
        }
        Ok(())
    }

    async fn write_clipboard(&self, text: &str) -> Result<()> {
        *self.clipboard.lock() = Some(text.to_string());
        info!(chars = text.chars().count(), "clipboard set");
        Ok(())
    }

    fn download(&self, url: &str, filename: Option<&str>) {
        info!(url, filename, "download");
    }
}

/// Prints notifications to stderr.
pub struct StderrToast;

impl Toast for StderrToast {
    fn show(&self, kind: MessageKind, message: &str) {
        eprintln!("[{kind}] {message}");
    }
}
