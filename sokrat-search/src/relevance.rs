//! Relevance filters for the study-resources flow.
//!
//! Resource hits are kept only when the title names a known DSA topic and
//! the descriptive text reads as educational. The raw `/search` endpoint is
//! deliberately unfiltered; these gates apply to curated resources only.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::SearchHit;

/// DSA topics a resource title must mention to be kept.
pub const ALLOWED_TERMS: [&str; 14] = [
    "linked list",
    "stack",
    "queue",
    "sorting",
    "heap",
    "binary tree",
    "graph",
    "searching",
    "binary search",
    "depth-first search",
    "breadth-first search",
    "trie",
    "hash table",
    "dynamic programming",
];

static EDUCATIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(data\s+structure|algorithm|tutorial|course|introduction|overview|example)\b")
        .expect("hard-coded pattern compiles")
});

/// Whether a title names one of the allowed DSA topics.
#[must_use]
pub fn is_allowed_topic(title: &str) -> bool {
    let lowered = title.to_lowercase();
    ALLOWED_TERMS.iter().any(|term| lowered.contains(term))
}

/// Whether descriptive text reads as educational content.
#[must_use]
pub fn is_educational(content: &str) -> bool {
    EDUCATIONAL.is_match(content)
}

/// Keep only hits that pass both relevance gates.
#[must_use]
pub fn filter_hits(hits: &[SearchHit]) -> Vec<SearchHit> {
    hits.iter()
        .filter(|hit| is_allowed_topic(&hit.title) && is_educational(&hit.snippet))
        .cloned()
        .collect()
}
