//! Search error types.
//!
//! Transport failures are `Err`; a payload that arrives but does not carry
//! usable results is *not* an error, it is a [`crate::types::SearchOutcome`]
//! variant. Callers handle the two very differently.

use thiserror::Error;

/// Errors that can occur while calling a search provider.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP request failed.
    #[error("search request failed: {0}")]
    RequestFailed(String),

    /// Provider is unreachable or has no key configured.
    #[error("search provider unavailable: {0}")]
    Unavailable(String),

    /// Provider answered with a non-success status code.
    #[error("search API returned HTTP {0}")]
    Upstream(u16),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            SearchError::Unavailable(err.to_string())
        } else {
            SearchError::RequestFailed(err.to_string())
        }
    }
}
