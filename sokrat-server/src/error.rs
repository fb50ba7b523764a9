//! Endpoint error type.
//!
//! Every handler failure maps to a status code and a `{"detail": "..."}`
//! body, the shape the existing clients consume. Upstream and internal
//! details are logged server-side and never leak into the response.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors an endpoint can surface to a client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Neither the quiz model nor the search fallback produced any items.
    #[error("Unable to generate MCQs")]
    NoQuizAvailable,

    /// Every platform came back empty for a resources query.
    #[error("No results found on any platform.")]
    NoResources,

    /// The requested audio file is gone or never existed.
    #[error("Audio file not found")]
    AudioMissing,

    /// The request body was malformed.
    #[error("{0}")]
    BadRequest(String),

    /// An upstream model call failed on a path with no fallback.
    #[error(transparent)]
    Llm(#[from] sokrat_llm::LlmError),

    /// An upstream search call failed on a path with no fallback.
    #[error(transparent)]
    Search(#[from] sokrat_search::SearchError),

    /// Filesystem failure while handling media.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NoQuizAvailable | Self::NoResources | Self::AudioMissing => {
                StatusCode::NOT_FOUND
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Llm(_) | Self::Search(_) => StatusCode::BAD_GATEWAY,
            Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing message for this error.
    fn detail(&self) -> String {
        match self {
            Self::Llm(_) => "Upstream model request failed".to_string(),
            Self::Search(_) => "Upstream search request failed".to_string(),
            Self::Io(_) | Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Llm(e) => warn!("Upstream LLM failure: {}", e),
            Self::Search(e) => warn!("Upstream search failure: {}", e),
            Self::Io(e) => error!("I/O failure while handling request: {}", e),
            Self::Internal(e) => error!("Internal error: {:#}", e),
            other => warn!("Request rejected: {}", other),
        }
        let body = json!({ "detail": self.detail() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::BadRequest(format!("Invalid multipart body: {err}"))
    }
}
