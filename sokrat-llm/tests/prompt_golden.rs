//! Prompt Quality — Golden Test Set.
//!
//! A curated set of template+vars pairs validating that every rendered prompt
//! carries the caller's parameters, and none of them leaks an unresolved
//! `{placeholder}` to the model. The quiz prompt additionally has to stay in
//! lockstep with the response parser: the worked example embedded in it must
//! parse to exactly one valid item.

use sokrat_llm::prompt;

/// A golden test case for prompt evaluation.
struct GoldenCase {
    /// Human-readable name for the test case.
    name: &'static str,
    /// Which prompt template constant to render.
    template: &'static str,
    /// Template variables to fill in.
    vars: Vec<(&'static str, &'static str)>,
    /// Strings that MUST appear in the rendered prompt.
    prompt_must_contain: Vec<&'static str>,
    /// Strings that MUST NOT appear in the rendered prompt.
    prompt_must_not_contain: Vec<&'static str>,
}

fn golden_cases() -> Vec<GoldenCase> {
    vec![
        // ---------------------------------------------------------------
        // 1. Socratic turn with a prior exchange
        // ---------------------------------------------------------------
        GoldenCase {
            name: "socratic_turn_with_history",
            template: prompt::SOCRATIC_TURN,
            vars: vec![
                (
                    "history",
                    "Student: How do I reverse a linked list?\nSocratic Assistant: What does each node need to point to afterwards?",
                ),
                ("query", "Each node should point to the previous one"),
            ],
            prompt_must_contain: vec![
                "reverse a linked list",
                "point to afterwards",
                "Student: Each node should point to the previous one",
                "one relevant question",
            ],
            prompt_must_not_contain: vec!["{history}", "{query}"],
        },
        // ---------------------------------------------------------------
        // 2. Socratic turn on a fresh conversation
        // ---------------------------------------------------------------
        GoldenCase {
            name: "socratic_turn_first_message",
            template: prompt::SOCRATIC_TURN,
            vars: vec![("history", ""), ("query", "What is a hash table?")],
            prompt_must_contain: vec![
                "Student: What is a hash table?",
                "absolutely correct",
            ],
            prompt_must_not_contain: vec!["{history}", "{query}"],
        },
        // ---------------------------------------------------------------
        // 3. Quiz generation, standard request
        // ---------------------------------------------------------------
        GoldenCase {
            name: "quiz_system_five_medium",
            template: prompt::QUIZ_SYSTEM,
            vars: vec![("noq", "5"), ("level", "medium")],
            prompt_must_contain: vec![
                "Generate 5 MCQs",
                "medium level",
                "Four answer choices",
                "**MCQ",
                "Correct:",
            ],
            prompt_must_not_contain: vec!["{noq}", "{level}"],
        },
        GoldenCase {
            name: "quiz_user_five_stacks",
            template: prompt::QUIZ_USER,
            vars: vec![("noq", "5"), ("topic", "Stacks")],
            prompt_must_contain: vec!["Generate 5 MCQs on the topic: Stacks"],
            prompt_must_not_contain: vec!["{noq}", "{topic}"],
        },
        // ---------------------------------------------------------------
        // 4. Quiz generation, large hard request
        // ---------------------------------------------------------------
        GoldenCase {
            name: "quiz_system_ten_hard",
            template: prompt::QUIZ_SYSTEM,
            vars: vec![("noq", "10"), ("level", "hard")],
            prompt_must_contain: vec!["Generate 10 MCQs", "hard level"],
            prompt_must_not_contain: vec!["{noq}", "{level}"],
        },
        // ---------------------------------------------------------------
        // 5. Search result summarization
        // ---------------------------------------------------------------
        GoldenCase {
            name: "summary_for_resources",
            template: prompt::SUMMARY_TEMPLATE,
            vars: vec![
                ("query", "graph traversal"),
                (
                    "results",
                    "\nWikipedia Results:\n- Depth-first search\n  DFS is an algorithm for traversing tree or graph structures.\n\nYoutube Results:\n- Graph Algorithms Course\n  Full course covering BFS and DFS.\n",
                ),
            ],
            prompt_must_contain: vec![
                "related to graph traversal",
                "Depth-first search",
                "Graph Algorithms Course",
                "concise summary",
            ],
            prompt_must_not_contain: vec!["{query}", "{results}"],
        },
        // ---------------------------------------------------------------
        // 6. Study-buddy persona
        // ---------------------------------------------------------------
        GoldenCase {
            name: "study_buddy_image_subject",
            template: prompt::STUDY_BUDDY_PREAMBLE,
            vars: vec![("subject", "question and image")],
            prompt_must_contain: vec!["question and image", "user query begins"],
            prompt_must_not_contain: vec!["{subject}"],
        },
    ]
}

// ---------------------------------------------------------------------------
// Offline Tests — Template Rendering Validation
// ---------------------------------------------------------------------------

#[test]
fn golden_prompts_render_without_unresolved_vars() {
    let cases = golden_cases();

    for case in &cases {
        let vars: Vec<(&str, &str)> = case.vars.clone();
        let rendered = prompt::render_template(case.template, &vars);

        for needle in &case.prompt_must_contain {
            assert!(
                rendered.contains(needle),
                "Golden case '{}': rendered prompt must contain '{}' but doesn't.\nRendered:\n{}",
                case.name,
                needle,
                &rendered[..rendered.len().min(500)]
            );
        }

        for needle in &case.prompt_must_not_contain {
            assert!(
                !rendered.contains(needle),
                "Golden case '{}': rendered prompt must NOT contain '{}' but does.\nRendered:\n{}",
                case.name,
                needle,
                &rendered[..rendered.len().min(500)]
            );
        }
    }
}

#[test]
fn quiz_prompt_example_stays_in_lockstep_with_the_parser() {
    // The worked example shown to the model must itself be parseable,
    // otherwise the prompt is teaching a format the backend cannot read.
    let rendered = prompt::render_template(prompt::QUIZ_SYSTEM, &[("noq", "5"), ("level", "easy")]);
    let items = sokrat_core::parser::parse_quiz_response(&rendered);

    assert_eq!(items.len(), 1, "the worked example must parse to one item");
    assert_eq!(items[0].question, "What is the time complexity of binary search?");
    assert_eq!(items[0].options, vec!["O(n)", "O(log n)", "O(n log n)", "O(1)"]);
    assert_eq!(items[0].correct_index, 1);
}

#[test]
fn socratic_prompts_establish_the_method() {
    assert!(prompt::SOCRATIC_SYSTEM.contains("Socratic method"));
    assert!(prompt::SOCRATIC_SYSTEM.contains("not to give direct answers"));
    assert!(prompt::SOCRATIC_TURN.contains("Student:"));
}

#[test]
fn quiz_prompts_demand_the_load_bearing_markers() {
    // Both markers the parser splits on must be demanded by the prompt.
    assert!(prompt::QUIZ_SYSTEM.contains("**MCQ"));
    assert!(prompt::QUIZ_SYSTEM.contains("'Correct:'"));
}
