//! Chat client — OpenAI-compatible wire format, as hosted by Groq.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde_json::json;
use tracing::warn;

use crate::error::LlmError;
use crate::types::{ChatRequest, ChatResponse, ModelRole};

/// Provider backend for chat completion.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    /// OpenAI-compatible API (Groq, Together, OpenAI itself).
    OpenAiCompatible { base_url: String, api_key: String },
    /// No provider configured — every call errors, and the caller decides
    /// whether a fallback exists for its endpoint.
    None,
}

/// The chat client that routes requests to the configured tutor or quiz model.
pub struct LlmClient {
    provider: LlmProvider,
    http: Client,
    tutor_model: String,
    quiz_model: String,
}

impl LlmClient {
    /// Create a new chat client.
    #[must_use]
    pub fn new(
        provider: LlmProvider,
        tutor_model: impl Into<String>,
        quiz_model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            http: Client::new(),
            tutor_model: tutor_model.into(),
            quiz_model: quiz_model.into(),
        }
    }

    /// Create a client with no backend (every call fails).
    #[must_use]
    pub fn none() -> Self {
        Self {
            provider: LlmProvider::None,
            http: Client::new(),
            tutor_model: String::new(),
            quiz_model: String::new(),
        }
    }

    /// The configured model name for a role.
    #[must_use]
    pub fn model_for(&self, role: ModelRole) -> &str {
        match role {
            ModelRole::Tutor => &self.tutor_model,
            ModelRole::Quiz => &self.quiz_model,
        }
    }

    /// Send one chat-completion request.
    ///
    /// A single attempt with a hard timeout; there is no retry here. The only
    /// recovery path in the service is the quiz endpoint switching to
    /// search-derived placeholder items, and that decision belongs to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no provider is configured, the request fails or times
    /// out, or the provider answers with a non-success status.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        match &self.provider {
            LlmProvider::None => {
                Err(LlmError::Unavailable("No LLM provider configured".into()))
            }
            LlmProvider::OpenAiCompatible { base_url, api_key } => {
                self.chat_openai(base_url, api_key, request).await
            }
        }
    }

    /// Send the request over the OpenAI-compatible wire format.
    async fn chat_openai(
        &self,
        base_url: &str,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<ChatResponse, LlmError> {
        let model = self.model_for(request.role);
        let url = format!("{base_url}/chat/completions");
        let body = json!({
            "model": model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.user },
            ],
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        let start = Instant::now();
        let result = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .timeout(Duration::from_millis(request.timeout_ms))
            .send()
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                if e.is_timeout() {
                    warn!("Chat request to {} timed out after {}ms", model, request.timeout_ms);
                    return Err(LlmError::Timeout(request.timeout_ms));
                }
                warn!("Chat request to {} failed: {}", model, e);
                return Err(e.into());
            }
        };

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let detail = resp.text().await.unwrap_or_default();
            warn!("Chat API returned HTTP {}: {}", status, detail);
            return Err(LlmError::Upstream { status, detail });
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        let text = json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string();

        let tokens = json["usage"]["completion_tokens"].as_u64().unwrap_or(0) as u32;

        Ok(ChatResponse {
            text,
            tokens_generated: tokens,
            latency_ms,
            model: model.to_string(),
        })
    }

    /// Check if the client has a backend configured.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self.provider, LlmProvider::None)
    }
}
