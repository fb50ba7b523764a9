//! Integration Tests — Quiz Generation Decision Chain
//!
//! These tests walk the `/generate-mcqs` policy without the network: model
//! text → parser → search fallback → placeholder items → grading, and the
//! conditions under which the endpoint answers 404.

use serde_json::json;

use sokrat_core::parser::parse_quiz_response;
use sokrat_core::scoring::grade;
use sokrat_core::OPTION_COUNT;
use sokrat_llm::prompt::render_template;
use sokrat_search::serper::outcome_from_payload;
use sokrat_server::error::ApiError;
use sokrat_server::routes::quiz::{FALLBACK_QUERY, fallback_items};

// ---------------------------------------------------------------------------
// Model silence → fallback items → graded quiz
// ---------------------------------------------------------------------------

#[test]
fn model_silence_falls_back_to_search_titles() {
    // 1. The model rambles instead of producing marked blocks
    let reply = "Sure! Here are some thoughts about heaps.\n\
                 A heap is a complete binary tree kept in an array.\n\
                 Would you like me to explain sift-down as well?";
    let parsed = parse_quiz_response(reply);
    assert!(parsed.is_empty(), "unmarked text must parse to nothing");

    // 2. The fallback query is built from the topic
    let query = render_template(FALLBACK_QUERY, &[("topic", "heaps")]);
    assert_eq!(query, "multiple choice questions on heaps with answers");

    // 3. A realistic search payload classifies into hits
    let payload = json!({
        "searchParameters": { "q": query },
        "organic": [
            { "title": "Heap MCQs with Answers", "link": "https://example.com/heap-mcqs",
              "snippet": "Practice multiple choice questions on heaps." },
            { "title": "Top 50 Heap Interview Questions", "link": "https://example.com/heap-50",
              "snippet": "Heap quiz for interviews." },
            { "title": "Binary Heap Quiz", "link": "https://example.com/heap-quiz",
              "snippet": "Test yourself on binary heaps." },
            { "title": "Priority Queue MCQs", "link": "https://example.com/pq-mcqs",
              "snippet": "More practice questions." }
        ]
    });
    let outcome = outcome_from_payload(&payload);

    // 4. Hits become placeholder items, capped at the requested count
    let items = fallback_items(outcome.hits(), 3);
    assert_eq!(items.len(), 3);
    for item in &items {
        assert!(item.placeholder, "fallback items must be flagged");
        assert_eq!(item.options.len(), OPTION_COUNT);
        assert_eq!(item.correct_index, 0);
    }
    assert_eq!(items[0].question, "Heap MCQs with Answers");

    // 5. The flag survives onto the wire
    let wire = serde_json::to_value(&items[0]).expect("serialize");
    assert_eq!(wire["placeholder"], true);
    assert_eq!(wire["correct"], 0);

    // 6. A student answering "1" everywhere aces a placeholder quiz
    let report = grade(&items, &[1, 1, 1]);
    assert_eq!(report.correct_count, 3);
    assert!(report.message.contains("Excellent performance!"));
}

// ---------------------------------------------------------------------------
// Well-formed model text never reaches the fallback
// ---------------------------------------------------------------------------

#[test]
fn well_formed_reply_skips_the_fallback() {
    let reply = "Here are your questions:\n\
                 **MCQ 1**\n\
                 Which traversal visits the root first?\n\
                 A) Inorder\n\
                 B) Preorder\n\
                 C) Postorder\n\
                 D) Level order\n\
                 Correct: B) Preorder\n\
                 \n\
                 **MCQ 2**\n\
                 What does a queue's dequeue remove?\n\
                 A) The newest element\n\
                 B) A random element\n\
                 C) The oldest element\n\
                 D) The largest element\n\
                 Correct: C) The oldest element\n";

    let parsed = parse_quiz_response(reply);
    assert_eq!(parsed.len(), 2, "both blocks are well formed");
    assert!(parsed.iter().all(|item| !item.placeholder));

    // Parsed items serialize without the placeholder key at all
    let wire = serde_json::to_value(&parsed[0]).expect("serialize");
    assert!(wire.get("placeholder").is_none());
}

// ---------------------------------------------------------------------------
// Nothing anywhere → the 404 condition
// ---------------------------------------------------------------------------

#[test]
fn empty_model_and_empty_search_is_the_not_found_condition() {
    // 1. Model produced nothing usable
    let parsed = parse_quiz_response("");
    assert!(parsed.is_empty());

    // 2. The search payload is malformed, which degrades to no hits
    let payload = json!({ "organic": "quota exceeded" });
    let outcome = outcome_from_payload(&payload);
    assert!(outcome.hits().is_empty());

    // 3. No hits, no items: the handler answers 404 with the fixed detail
    let items = fallback_items(outcome.hits(), 5);
    assert!(items.is_empty());
    assert_eq!(
        ApiError::NoQuizAvailable.to_string(),
        "Unable to generate MCQs"
    );
}
