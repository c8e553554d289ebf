//! Runtime configuration for the page runtime.
//!
//! Configuration is written in RON:
//!
//! ```ron
//! (
//!     http: (timeout_ms: 5000),
//!     globals: (user_name: "Ada", user_email: "ada@example.com"),
//!     script: (max_operations: 50000),
//!     storage: (path: Some("storage.json")),
//! )
//! ```
//!
//! Use [`load`] to honour an explicit `--config` path or a `pagert.ron` in the working
//! directory; errors carry a location and render with [`Error::pretty`].

mod error;
mod loader;
mod types;


pub use error::{Error, excerpt_at};
pub use loader::{DEFAULT_FILE_NAME, load, load_from_path, load_from_str, resolve_config_path};
pub use types::{GlobalsConfig, HttpConfig, RuntimeConfig, ScriptConfig, StorageConfig};
