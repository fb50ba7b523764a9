//! LLM error types.

use thiserror::Error;

/// Errors that can occur when talking to a hosted model provider.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failed.
    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    /// Provider response was not in the expected shape.
    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    /// Request timed out.
    #[error("LLM request timed out after {0}ms")]
    Timeout(u64),

    /// No provider configured, or the provider is unreachable.
    #[error("LLM provider unavailable: {0}")]
    Unavailable(String),

    /// Provider answered with a non-success status code.
    #[error("LLM API returned HTTP {status}: {detail}")]
    Upstream { status: u16, detail: String },
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout(0)
        } else if err.is_connect() {
            LlmError::Unavailable(err.to_string())
        } else {
            LlmError::RequestFailed(err.to_string())
        }
    }
}
