use std::result::Result as StdResult;

use thiserror::Error;

/// Convenient result type for the page model crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors raised while decoding or validating a page document.
#[derive(Debug, Error)]
pub enum Error {
    /// The document is not valid JSON or does not match the schema.
    #[error("Invalid page document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document's root node is not a `PageRoot`.
    #[error("Page root must have type pageRoot, found {found}")]
    InvalidRoot {
        /// Serialized name of the type found at the root.
        found: String,
    },

    /// A node below the root claims to be a `PageRoot`.
    #[error("Nested pageRoot node {id}")]
    NestedRoot {
        /// Id of the offending node.
        id: String,
    },
}
