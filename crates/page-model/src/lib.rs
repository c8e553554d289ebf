//! Page document model shared by every runtime crate.
//!
//! A page is a single tree of [`ComponentSchema`] nodes rooted at a `PageRoot` node, plus a
//! registry of named [`DataSource`]s. Nodes carry static `props`/`style` maps and an ordered
//! list of [`EventBinding`]s whose [`Action`]s the event engine executes.
//!
//! This crate is plain data plus pure tree helpers; all mutation policy (selection, slot
//! cleanup, move index correction) lives in the `page-state` crate.
#![allow(missing_docs)]

mod action;
mod component;
mod data_source;
mod error;
mod factory;
mod meta;
mod page;
mod patch;
pub mod tree;
mod value;

#[cfg(test)]
mod test_serde;
#[cfg(test)]
mod test_tree;

pub use action::{
    Action, ActionKind, CallDataSourceConfig, ControlComponentConfig, CopyToClipboardConfig,
    DownloadConfig, EventBinding, GoToUrlConfig, MessageKind, NavigateToConfig, RunScriptConfig,
    SetGlobalDataConfig, SetLocalStorageConfig, ShowMessageConfig, UpdatePropertyConfig,
};
pub use component::{ComponentId, ComponentSchema, ComponentType, Props, SLOT_KEY, Walk};
pub use data_source::{
    ApiDataSourceConfig, DataBinding, DataSource, DataSourceConfig, DataSourceId, DataSourceKind,
    DataSourceUpdate, HttpMethod, KeyValue, StaticDataSourceConfig,
};
pub use error::{Error, Result};
pub use factory::{
    create_component, duplicate_semantic_ids, generate_semantic_id, migrate_semantic_ids, new_id,
    validate_component_schema,
};
pub use meta::{Category, ComponentMeta, PropKind, PropSchema, TriggerSpec};
pub use page::{PageConfig, now_millis};
pub use patch::ComponentPatch;
pub use value::is_truthy;
