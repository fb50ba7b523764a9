//! Core types for chat requests and responses.

use serde::{Deserialize, Serialize};

/// Which configured model a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRole {
    /// Socratic dialogue, search answers, and summaries.
    Tutor,
    /// Multiple-choice quiz generation.
    Quiz,
}

/// A request to the chat-completion provider.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// System prompt (persona, rules, output format).
    pub system: String,
    /// User prompt (transcript, query, topic).
    pub user: String,
    /// Which configured model handles this request.
    pub role: ModelRole,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ChatRequest {
    /// Create a tutor-model request.
    #[must_use]
    pub fn tutor(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            role: ModelRole::Tutor,
            max_tokens: 1024,
            temperature: 0.5,
            timeout_ms: 30_000,
        }
    }

    /// Create a quiz-model request.
    #[must_use]
    pub fn quiz(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            role: ModelRole::Quiz,
            max_tokens: 2048,
            temperature: 0.5,
            timeout_ms: 30_000,
        }
    }

    /// Set the sampling temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the generation budget.
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// A response from the chat-completion provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// The generated text.
    pub text: String,
    /// How many tokens were generated.
    pub tokens_generated: u32,
    /// Latency in milliseconds.
    pub latency_ms: u64,
    /// Which model produced the answer.
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase_on_the_wire() {
        let request = serde_json::to_value(ChatRequest::tutor("s", "u")).expect("serialize");
        assert_eq!(request["role"], "tutor");

        let request = serde_json::to_value(ChatRequest::quiz("s", "u")).expect("serialize");
        assert_eq!(request["role"], "quiz");
    }

    #[test]
    fn builders_override_the_ctor_defaults() {
        let request = ChatRequest::quiz("s", "u")
            .with_temperature(0.2)
            .with_max_tokens(256)
            .with_timeout(9_000);
        assert!((request.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(request.max_tokens, 256);
        assert_eq!(request.timeout_ms, 9_000);
        assert_eq!(request.role, ModelRole::Quiz);
    }
}
