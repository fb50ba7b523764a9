//! Wikipedia search via the MediaWiki API.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::types::{SearchHit, SearchOutcome};

/// Article links use the page id, not the title, so renames keep working.
const ARTICLE_LINK_PREFIX: &str = "https://en.wikipedia.org/?curid=";

/// MediaWiki snippets arrive as HTML with `searchmatch` spans.
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("hard-coded pattern compiles"));

/// Client for the MediaWiki search API.
pub struct WikipediaClient {
    http: Client,
    base_url: String,
    result_limit: usize,
}

impl WikipediaClient {
    /// Create a new client against a MediaWiki `api.php` endpoint.
    #[must_use]
    pub fn new(base_url: impl Into<String>, result_limit: usize) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            result_limit,
        }
    }

    /// Run an article search and classify the payload.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for transport-level failures.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let limit = self.result_limit.to_string();
        let params = [
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
            ("format", "json"),
            ("srlimit", limit.as_str()),
        ];

        let resp = self.http.get(&self.base_url).query(&params).send().await?;
        if !resp.status().is_success() {
            warn!("Wikipedia returned HTTP {} for query {:?}", resp.status(), query);
            return Err(SearchError::Upstream(resp.status().as_u16()));
        }

        let payload: Value = resp
            .json()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let outcome = outcome_from_payload(&payload);
        if let SearchOutcome::Malformed(reason) = &outcome {
            warn!("Wikipedia payload malformed: {}", reason);
            debug!("Offending payload: {}", payload);
        }
        Ok(outcome)
    }
}

/// Classify a MediaWiki response body. Results live under `query.search`.
#[must_use]
pub fn outcome_from_payload(payload: &Value) -> SearchOutcome {
    let Some(object) = payload.as_object() else {
        return SearchOutcome::Malformed(format!("payload is not an object: {payload}"));
    };
    // A response without the `query` envelope is how MediaWiki reports
    // "nothing matched", not a contract violation.
    match object.get("query") {
        None => SearchOutcome::Empty,
        Some(inner) => SearchOutcome::classify(inner, "search", |entry| {
            let page_id = entry["pageid"].as_u64()?;
            let snippet_html = entry["snippet"].as_str().unwrap_or("No snippet available");
            Some(SearchHit {
                title: entry["title"].as_str()?.to_string(),
                link: format!("{ARTICLE_LINK_PREFIX}{page_id}"),
                snippet: strip_tags(snippet_html),
            })
        }),
    }
}

/// Remove HTML tags from a MediaWiki snippet.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}
