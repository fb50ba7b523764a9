//! Prompt templates for the Sokrat tutoring flows.
//!
//! Every prompt is a constant, testable artifact. Templates use `{key}`
//! placeholders filled by [`render_template`]; there is no branching logic
//! inside a template.

use crate::types::ChatRequest;

/// System prompt for the Socratic chat endpoint.
pub const SOCRATIC_SYSTEM: &str = r"You are a highly effective AI teaching assistant that uses the Socratic method to guide students toward understanding concepts in Data Structures and Algorithms (DSA).
Your role is not to give direct answers but to ask thoughtful, probing questions that lead the student to figure out the solution on their own.

RULES:
- Ask exactly one question per reply.
- Build on what the student already said; never restart the topic.
- Keep replies short and encouraging.
- Never hand over the final answer while the student is still reasoning.";

/// User turn for the Socratic chat endpoint. `{history}` is the rendered
/// transcript; `{query}` is the student's newest message.
pub const SOCRATIC_TURN: &str = r"{history}

Student: {query}

Respond to the student's query by asking one relevant question that leads them to the solution.
If the student's response is absolutely correct, appreciate them and do not ask further questions.";

/// System prompt for quiz generation. The worked example below is
/// load-bearing: the response parser splits on exactly the `**MCQ` and
/// `Correct:` tokens this example demonstrates.
pub const QUIZ_SYSTEM: &str = r"You are a highly knowledgeable AI that generates multiple-choice questions (MCQs) on topics related to Data Structures and Algorithms (DSA) like stack, queue and so on.
Generate {noq} MCQs on the given topic to assess the student's understanding. Make the questions of {level} level. Each MCQ should have:
1. A clear question.
2. Four answer choices labelled A) to D).
3. The correct answer marked with 'Correct:' before the option. This should be done at the end after mentioning all the options of the question.
Ensure that the questions cover different areas of the topic.

Format every question exactly like this:
**MCQ 1**
What is the time complexity of binary search?
A) O(n)
B) O(log n)
C) O(n log n)
D) O(1)
Correct: B) O(log n)";

/// User turn for quiz generation.
pub const QUIZ_USER: &str = "Generate {noq} MCQs on the topic: {topic}";

/// Template for summarizing search results.
pub const SUMMARY_TEMPLATE: &str = r"Summarize the following search results related to {query}:

{results}

Provide a concise summary of the key points and most relevant information.";

/// Persona preamble for the multimodal study-buddy endpoints. `{subject}` is
/// filled from [`QuerySubject`].
pub const STUDY_BUDDY_PREAMBLE: &str = r"You are a helpful study assistant named 'Sokrat' built for students of Data Structures and Algorithms.
You are supposed to answer accurately and precisely to the user's {subject}. Now, the user query begins:";

/// Fill `{key}` placeholders in a prompt template.
///
/// Substitutions apply in order; placeholders with no matching key are left
/// in place.
#[must_use]
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{key}}}"), value)
    })
}

// ---------------------------------------------------------------------------
// Request builders — one per flow that talks to the chat provider
// ---------------------------------------------------------------------------

/// Build the chat request for one Socratic turn.
///
/// `history` is the transcript already rendered to
/// `Student: ...\nSocratic Assistant: ...` lines.
#[must_use]
pub fn socratic_request(history: &str, query: &str) -> ChatRequest {
    let user = render_template(SOCRATIC_TURN, &[("history", history), ("query", query)]);
    ChatRequest::tutor(SOCRATIC_SYSTEM, user)
}

/// Build the chat request for quiz generation.
#[must_use]
pub fn quiz_request(topic: &str, noq: u32, level: &str) -> ChatRequest {
    let noq = noq.to_string();
    let system = render_template(QUIZ_SYSTEM, &[("noq", &noq), ("level", level)]);
    let user = render_template(QUIZ_USER, &[("noq", &noq), ("topic", topic)]);
    ChatRequest::quiz(system, user)
}

/// Build the chat request that summarizes search results for a query.
#[must_use]
pub fn summary_request(query: &str, results: &str) -> ChatRequest {
    let user = render_template(SUMMARY_TEMPLATE, &[("query", query), ("results", results)]);
    ChatRequest::tutor("You are a concise technical summarizer for study material.", user)
}

// ---------------------------------------------------------------------------
// Study-buddy prompt for the multimodal endpoints
// ---------------------------------------------------------------------------

/// What the study-buddy persona is being asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySubject {
    /// Plain text question (voice transcripts land here too).
    Question,
    /// Question about an attached image.
    Image,
    /// Question about an attached video.
    Video,
}

impl QuerySubject {
    fn phrase(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Image => "question and image",
            Self::Video => "question and video",
        }
    }
}

/// Build the full multimodal prompt text for a student query.
///
/// An empty query yields the bare persona preamble, matching how video
/// questions without text are asked.
#[must_use]
pub fn study_buddy_prompt(subject: QuerySubject, query_text: &str) -> String {
    let preamble = render_template(STUDY_BUDDY_PREAMBLE, &[("subject", subject.phrase())]);
    if query_text.is_empty() {
        preamble
    } else {
        format!("{preamble}\n{query_text}")
    }
}
