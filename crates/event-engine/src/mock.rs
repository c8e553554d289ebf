//! Recording capability implementations for tests and dry runs.

use std::{
    collections::BTreeMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use page_model::MessageKind;
use page_state::{ComponentHandle, Error as StateError, Result as StateResult};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::time::sleep;

use crate::{Error, Host, Result, Toast};

/// Host that records every call and keeps storage and clipboard in memory.
#[derive(Clone, Default)]
pub struct MockHost {
    calls: Arc<Mutex<Vec<String>>>,
    storage: Arc<Mutex<BTreeMap<String, String>>>,
    clipboard: Arc<Mutex<Option<String>>>,
    fail_clipboard: Arc<AtomicBool>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make clipboard writes fail.
    pub fn set_clipboard_fail(&self, v: bool) {
        self.fail_clipboard.store(v, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Stored JSON text for `key`.
    pub fn local_storage(&self, key: &str) -> Option<String> {
        self.storage.lock().get(key).cloned()
    }

    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.lock().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl Host for MockHost {
    fn open_url(&self, url: &str, new_tab: bool) {
        let verb = if new_tab { "open" } else { "navigate" };
        self.record(format!("{verb} {url}"));
    }

    fn set_location_hash(&self, path: &str) {
        self.record(format!("hash {path}"));
    }

    fn set_local_storage(&self, key: &str, json: &str) -> Result<()> {
        self.record(format!("localStorage {key}={json}"));
        self.storage.lock().insert(key.to_string(), json.to_string());
        Ok(())
    }

    async fn write_clipboard(&self, text: &str) -> Result<()> {
        self.record(format!("clipboard {text}"));
        if self.fail_clipboard.load(Ordering::SeqCst) {
            return Err(Error::Clipboard("permission denied".into()));
        }
        *self.clipboard.lock() = Some(text.to_string());
        Ok(())
    }

    fn download(&self, url: &str, filename: Option<&str>) {
        match filename {
            Some(name) => self.record(format!("download {url} as {name}")),
            None => self.record(format!("download {url}")),
        }
    }
}

/// Toast surface that records `kind: message` lines.
#[derive(Clone, Default)]
pub struct RecordingToast {
    shown: Arc<Mutex<Vec<String>>>,
}

impl RecordingToast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().clone()
    }
}

impl Toast for RecordingToast {
    fn show(&self, kind: MessageKind, message: &str) {
        self.shown.lock().push(format!("{kind}: {message}"));
    }
}

/// Component instance exposing a fixed set of methods.
#[derive(Clone, Default)]
pub struct MockComponent {
    methods: Vec<String>,
    calls: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
    fail: bool,
}

impl MockComponent {
    pub fn new(methods: &[&str]) -> Self {
        Self {
            methods: methods.iter().map(|m| m.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Sleep this long inside every invocation.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Make every invocation fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Recorded `method(args)` lines.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ComponentHandle for MockComponent {
    fn has_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    async fn invoke(&self, method: &str, args: Vec<Value>) -> StateResult<Value> {
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        self.calls
            .lock()
            .push(format!("{method}({})", Value::Array(args)));
        if self.fail {
            return Err(StateError::Invoke {
                method: method.to_string(),
                reason: "mock failure".into(),
            });
        }
        Ok(Value::Null)
    }
}
