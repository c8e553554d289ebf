//! Page runtime state.
//!
//! - [`EditorStore`]: the page tree with its mutation surface (add, delete, update, move,
//!   select) and editor mode.
//! - [`FormStateStore`]: live two-way-bound component values.
//! - [`DataSourceStore`]: named data sources and their cached payloads.
//! - [`ComponentInstanceRegistry`]: live component handles for `controlComponent`.
//! - [`PageState`]: a cloneable handle composing all of the above, plus the fetch pipeline
//!   over an injected [`HttpClient`].
#![allow(missing_docs)]

mod data_source;
mod editor;
mod error;
pub mod fetch;
mod form;
mod http;
mod instances;
mod state;

#[cfg(test)]
mod test_editor;

pub use data_source::DataSourceStore;
pub use editor::{EditorMode, EditorStore};
pub use error::{Error, Result};
pub use form::FormStateStore;
pub use http::{HttpClient, HttpRequest, HttpResponse, MockHttpClient, ReqwestClient};
pub use instances::{ComponentHandle, ComponentInstanceRegistry};
pub use state::PageState;
