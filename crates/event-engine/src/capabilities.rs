//! Effects outside the page model that actions may trigger.

use async_trait::async_trait;
use page_model::MessageKind;

use crate::Result;

/// Browser-level effects: navigation, storage, clipboard and downloads.
#[async_trait]
pub trait Host: Send + Sync {
    /// Open `url` in a new tab, or replace the current location.
    fn open_url(&self, url: &str, new_tab: bool);

    /// Route to `path` by setting the location hash.
    fn set_location_hash(&self, path: &str);

    /// Store an already JSON-encoded value under `key`.
    fn set_local_storage(&self, key: &str, json: &str) -> Result<()>;

    /// Put `text` on the clipboard.
    async fn write_clipboard(&self, text: &str) -> Result<()>;

    /// Start downloading `url`, optionally saving as `filename`.
    fn download(&self, url: &str, filename: Option<&str>);
}

/// User-visible transient notifications.
pub trait Toast: Send + Sync {
    /// Show `message` on the `kind` channel.
    fn show(&self, kind: MessageKind, message: &str);
}
