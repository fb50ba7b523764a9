//! Conversation transcripts for the Socratic chat flow.
//!
//! The service holds no session store: the caller sends the transcript with
//! every request and receives it back, pruned and extended with the new turn.

use serde::{Deserialize, Serialize};

/// One student/assistant exchange in a tutoring session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// What the student said.
    pub student: String,
    /// How the assistant replied.
    pub assistant: String,
}

impl ConversationTurn {
    /// Build a turn from both sides of an exchange.
    #[must_use]
    pub fn new(student: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            student: student.into(),
            assistant: assistant.into(),
        }
    }

    /// Whether both sides of the turn are empty strings.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.student.is_empty() && self.assistant.is_empty()
    }
}

/// Drop turns that are empty on both sides.
///
/// Clients sometimes send skeleton turns while the UI is waiting on a reply;
/// a turn with either side filled in is kept.
#[must_use]
pub fn prune_history(history: &[ConversationTurn]) -> Vec<ConversationTurn> {
    history.iter().filter(|turn| !turn.is_blank()).cloned().collect()
}

/// Serialize a transcript for embedding into the Socratic prompt.
///
/// Each turn renders as `Student: ...` and `Socratic Assistant: ...` lines;
/// turns are joined by single newlines. An empty transcript renders as an
/// empty string.
#[must_use]
pub fn render_history(history: &[ConversationTurn]) -> String {
    history
        .iter()
        .map(|turn| format!("Student: {}\nSocratic Assistant: {}", turn.student, turn.assistant))
        .collect::<Vec<_>>()
        .join("\n")
}
