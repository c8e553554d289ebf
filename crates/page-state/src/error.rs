use std::result::Result as StdResult;

use thiserror::Error;

/// Convenient result type for the page-state crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors raised inside the fetch pipeline and capability adapters.
///
/// None of these escape [`PageState::fetch_data_source`](crate::PageState::fetch_data_source);
/// a failed fetch is recorded as data instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// A live component instance rejected a method call.
    #[error("Component method '{method}' failed: {reason}")]
    Invoke {
        /// Method name that was invoked.
        method: String,
        /// Failure description from the instance.
        reason: String,
    },

    /// Generic error with context.
    #[error("Page state error: {0}")]
    Msg(String),
}
