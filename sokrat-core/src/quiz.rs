//! Quiz record types shared by the generation, fallback, and scoring flows.

use serde::{Deserialize, Serialize};

/// Number of answer choices every emitted quiz item carries.
pub const OPTION_COUNT: usize = 4;

/// Stand-in answer choices used by the search fallback when real options
/// cannot be derived from a hit.
pub const PLACEHOLDER_OPTIONS: [&str; OPTION_COUNT] =
    ["Option 1", "Option 2", "Option 3", "Option 4"];

/// A single multiple-choice question.
///
/// Invariant for every item the parser or fallback emits: `options` holds
/// exactly [`OPTION_COUNT`] entries and `correct_index` indexes into them.
/// Candidates that cannot satisfy this are dropped at the producer, never
/// coerced.
///
/// Wire shape is `{"question", "options", "correct"}`; the `placeholder`
/// flag only appears when set, so parsed items serialize exactly as clients
/// have always received them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    /// Question text, preserved as literal extracted text (not trimmed).
    pub question: String,
    /// Answer choices in display order.
    pub options: Vec<String>,
    /// 0-based index of the correct choice.
    #[serde(rename = "correct")]
    pub correct_index: usize,
    /// True for fallback items whose answer key is fabricated and should not
    /// be treated as authoritative.
    #[serde(default, skip_serializing_if = "is_false")]
    pub placeholder: bool,
}

impl QuizItem {
    /// Build a non-authoritative fallback item around a search-hit title.
    ///
    /// The options are the fixed placeholder strings and the answer key is
    /// pinned to the first choice.
    #[must_use]
    pub fn placeholder(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            options: PLACEHOLDER_OPTIONS.iter().map(ToString::to_string).collect(),
            correct_index: 0,
            placeholder: true,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(flag: &bool) -> bool {
    !*flag
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_item() -> QuizItem {
        QuizItem {
            question: "What is the primary operation that adds an element to a stack?".to_string(),
            options: vec![
                "Pop".to_string(),
                "Push".to_string(),
                "Peek".to_string(),
                "Traverse".to_string(),
            ],
            correct_index: 1,
            placeholder: false,
        }
    }

    #[test]
    fn parsed_item_serializes_to_legacy_wire_shape() {
        let value = serde_json::to_value(parsed_item()).expect("serialize");
        let object = value.as_object().expect("object");

        assert_eq!(object.len(), 3, "parsed items carry exactly three keys");
        assert!(object["question"].as_str().expect("string").starts_with("What is"));
        assert_eq!(object["correct"], 1);
        assert_eq!(object["options"].as_array().expect("array").len(), 4);
        assert!(!object.contains_key("placeholder"));
    }

    #[test]
    fn placeholder_item_carries_flag_on_wire() {
        let value = serde_json::to_value(QuizItem::placeholder("Stack quiz — GeeksforGeeks"))
            .expect("serialize");

        assert_eq!(value["placeholder"], true);
        assert_eq!(value["correct"], 0);
        assert_eq!(value["options"][0], "Option 1");
        assert_eq!(value["options"][3], "Option 4");
    }

    #[test]
    fn deserialization_defaults_placeholder_to_false() {
        let item: QuizItem = serde_json::from_str(
            r#"{"question": "Q", "options": ["a", "b", "c", "d"], "correct": 2}"#,
        )
        .expect("deserialize");

        assert!(!item.placeholder);
        assert_eq!(item.correct_index, 2);
    }

    #[test]
    fn placeholder_options_match_option_count() {
        assert_eq!(PLACEHOLDER_OPTIONS.len(), OPTION_COUNT);
    }
}
