//! Video search via the YouTube Data API v3.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::types::{SearchHit, SearchOutcome};

const WATCH_LINK_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Client for the YouTube Data API.
pub struct YouTubeClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    result_limit: usize,
}

impl YouTubeClient {
    /// Create a new client. `api_key: None` leaves the client degraded:
    /// every call returns `SearchError::Unavailable`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, result_limit: usize) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key,
            result_limit,
        }
    }

    /// Run a video search and classify the payload.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for transport-level failures.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SearchError::Unavailable("No YouTube API key configured".into()))?;

        let limit = self.result_limit.to_string();
        let url = format!("{}/search", self.base_url);
        let params = [
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("maxResults", limit.as_str()),
            ("key", api_key),
        ];

        let resp = self.http.get(&url).query(&params).send().await?;
        if !resp.status().is_success() {
            warn!("YouTube returned HTTP {} for query {:?}", resp.status(), query);
            return Err(SearchError::Upstream(resp.status().as_u16()));
        }

        let payload: Value = resp
            .json()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let outcome = outcome_from_payload(&payload);
        if let SearchOutcome::Malformed(reason) = &outcome {
            warn!("YouTube payload malformed: {}", reason);
            debug!("Offending payload: {}", payload);
        }
        Ok(outcome)
    }

    /// Whether a key is configured.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Classify a YouTube search response body. Results live in the `items`
/// array; the video id sits under `id.videoId` and the descriptive text
/// under `snippet`.
#[must_use]
pub fn outcome_from_payload(payload: &Value) -> SearchOutcome {
    SearchOutcome::classify(payload, "items", |entry| {
        let video_id = entry["id"]["videoId"].as_str()?;
        Some(SearchHit {
            title: entry["snippet"]["title"].as_str()?.to_string(),
            link: format!("{WATCH_LINK_PREFIX}{video_id}"),
            snippet: entry["snippet"]["description"]
                .as_str()
                .unwrap_or("No description available")
                .to_string(),
        })
    })
}
