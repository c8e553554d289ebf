use std::result::Result as StdResult;

use thiserror::Error;

/// Convenient result type for the event engine crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors raised by capabilities and the script host.
///
/// Action handlers log these; none escape [`execute_event`](crate::execute_event).
#[derive(Debug, Error)]
pub enum Error {
    /// A `runScript` body failed to compile or run.
    #[error("{0}")]
    Script(String),

    /// The host could not write to the clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The host could not persist a local storage entry.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Errors bubbling up from page state capabilities.
    #[error(transparent)]
    State(#[from] page_state::Error),

    /// Generic error with context.
    #[error("Event engine error: {0}")]
    Msg(String),
}
