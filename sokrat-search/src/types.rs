//! Search result types shared by every provider.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One search result, normalized across providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Result title.
    pub title: String,
    /// Canonical link to the result.
    pub link: String,
    /// Short descriptive text (snippet or video description).
    pub snippet: String,
}

/// What a provider's payload turned out to hold.
///
/// The three cases are deliberately distinct: an empty result list and a
/// payload in an unexpected shape must never be conflated, because only the
/// latter indicates a provider contract change worth logging loudly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The payload carried at least one usable result.
    Hits(Vec<SearchHit>),
    /// The payload was well-formed but held no usable results.
    Empty,
    /// The payload did not match the provider's documented shape.
    Malformed(String),
}

impl SearchOutcome {
    /// Classify a provider payload: an object whose `key` holds an array of
    /// result entries. Each entry is mapped to a hit by `map_hit`; entries it
    /// rejects are skipped.
    ///
    /// A missing `key` is a well-formed empty answer. A `key` bound to
    /// anything but an array, or a payload that is not an object, is
    /// malformed.
    pub fn classify<F>(payload: &Value, key: &str, map_hit: F) -> Self
    where
        F: Fn(&Value) -> Option<SearchHit>,
    {
        let Some(object) = payload.as_object() else {
            return Self::Malformed(format!("payload is not an object: {payload}"));
        };
        match object.get(key) {
            None => Self::Empty,
            Some(Value::Array(entries)) => {
                let hits: Vec<SearchHit> = entries.iter().filter_map(&map_hit).collect();
                if hits.is_empty() {
                    Self::Empty
                } else {
                    Self::Hits(hits)
                }
            }
            Some(other) => Self::Malformed(format!("'{key}' is not an array: {other}")),
        }
    }

    /// The usable hits, empty for the `Empty` and `Malformed` cases.
    #[must_use]
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            Self::Hits(hits) => hits,
            Self::Empty | Self::Malformed(_) => &[],
        }
    }

    /// Whether the outcome carries no usable results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits().is_empty()
    }
}
