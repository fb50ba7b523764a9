//! Web search via the Serper API (Google results as JSON).
//!
//! This is the provider behind the quiz fallback, the `/search` endpoint,
//! and the web column of the resources bundle.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::types::{SearchHit, SearchOutcome};

/// Client for the Serper search API.
pub struct SerperClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    result_limit: usize,
}

impl SerperClient {
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

    /// Run a web search and classify the payload.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for transport-level failures; payload problems are
    /// reported through [`SearchOutcome`].
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SearchError::Unavailable("No Serper API key configured".into()))?;

        let url = format!("{}/search", self.base_url);
        let body = json!({ "q": query, "num": self.result_limit });

        let resp = self
            .http
            .post(&url)
            .header("X-API-KEY", api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            warn!("Serper returned HTTP {} for query {:?}", resp.status(), query);
            return Err(SearchError::Upstream(resp.status().as_u16()));
        }

        let payload: Value = resp
            .json()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let outcome = outcome_from_payload(&payload);
        if let SearchOutcome::Malformed(reason) = &outcome {
            warn!("Serper payload malformed: {}", reason);
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

/// Classify a Serper response body. Results live in the `organic` array.
#[must_use]
pub fn outcome_from_payload(payload: &Value) -> SearchOutcome {
    SearchOutcome::classify(payload, "organic", |entry| {
        Some(SearchHit {
            title: entry["title"].as_str()?.to_string(),
            link: entry["link"].as_str().unwrap_or("").to_string(),
            snippet: entry["snippet"]
                .as_str()
                .unwrap_or("No snippet available")
                .to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn organic_results_map_to_hits() {
        let payload = json!({
            "searchParameters": { "q": "multiple choice questions on stacks with answers" },
            "organic": [
                {
                    "title": "Stack MCQs - Data Structure Questions",
                    "link": "https://example.com/stack-mcqs",
                    "snippet": "Practice questions on stack operations.",
                    "position": 1
                },
                {
                    "title": "Top 50 DSA Questions",
                    "link": "https://example.com/top50",
                    "position": 2
                }
            ]
        });

        let outcome = outcome_from_payload(&payload);
        let hits = outcome.hits();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Stack MCQs - Data Structure Questions");
        // Entries without a snippet keep the legacy default text
        assert_eq!(hits[1].snippet, "No snippet available");
    }

    #[test]
    fn entry_without_title_is_skipped() {
        let payload = json!({
            "organic": [
                { "link": "https://example.com/untitled" },
                { "title": "Titled", "link": "https://example.com/titled" }
            ]
        });
        let outcome = outcome_from_payload(&payload);
        assert_eq!(outcome.hits().len(), 1);
        assert_eq!(outcome.hits()[0].title, "Titled");
    }

    #[test]
    fn missing_organic_key_is_empty() {
        let payload = json!({ "searchParameters": { "q": "anything" } });
        assert_eq!(outcome_from_payload(&payload), SearchOutcome::Empty);
    }

    #[test]
    fn string_payload_is_malformed() {
        let payload = json!("Google search results text blob");
        assert!(matches!(
            outcome_from_payload(&payload),
            SearchOutcome::Malformed(_)
        ));
    }

    #[test]
    fn keyless_client_is_degraded() {
        let client = SerperClient::new("https://google.serper.dev", None, 3);
        assert!(!client.is_available());
    }
}
