//! Event dispatch for page components.
//!
//! An [`EventBinding`](page_model::EventBinding) pairs a trigger name with a list of
//! [`Action`](page_model::Action)s. [`execute_event`] runs all of them concurrently against an
//! [`EventContext`], which carries the page state plus the capabilities actions need:
//!
//! - [`Host`]: navigation, local storage, clipboard, downloads.
//! - [`Toast`]: user notifications. Optional; messages fall back to the log.
//! - [`ScriptHost`]: runs `runScript` bodies. [`RhaiScriptHost`] is the sandboxed default.
//! - HTTP via [`page_state::HttpClient`] for `callDataSource`.
//!
//! Nothing here returns an error to the caller. Each action reports its own failures.
#![allow(missing_docs)]

mod capabilities;
mod context;
mod engine;
mod error;
mod handlers;
mod mock;
mod script;


pub use capabilities::{Host, Toast};
pub use context::EventContext;
pub use engine::{execute_action, execute_event, fire_trigger};
pub use error::{Error, Result};
pub use handlers::apply_script_effects;
pub use mock::{MockComponent, MockHost, RecordingToast};
pub use script::{RhaiScriptHost, ScriptEffect, ScriptHost};
