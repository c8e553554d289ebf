use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Convenient result type for the pagert binary.
pub type Result<T> = StdResult<T, Error>;

/// Errors that end a pagert run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::Error),

    #[error("{path}: {source}")]
    Page {
        path: PathBuf,
        source: page_model::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    State(#[from] page_state::Error),

    #[error("{0}")]
    NotFound(String),
}

impl Error {
    /// Message for the terminal; config errors carry their own excerpt.
    pub fn pretty(&self) -> String {
        match self {
            Self::Config(e) => e.pretty(),
            other => other.to_string(),
        }
    }
}
