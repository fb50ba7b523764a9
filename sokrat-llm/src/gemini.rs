//! Multimodal client — Gemini-style `generateContent` with inline media.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde_json::json;
use tracing::warn;

use crate::error::LlmError;

/// Client for the generative-language API that answers image, video, and
/// voice questions.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    timeout_ms: u64,
}

impl GeminiClient {
    /// Create a new multimodal client. `api_key: None` leaves the client in a
    /// degraded state where every call errors.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key,
            model: model.into(),
            timeout_ms,
        }
    }

    /// Answer a plain text question.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no key is configured, the request fails, or the
    /// response carries no text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(vec![json!({ "text": prompt })]).await
    }

    /// Answer a question about one attached piece of media.
    ///
    /// The media bytes are sent inline, base64-encoded, alongside the text
    /// part. Video uploads ride the same path; the model accepts common
    /// video MIME types inline up to the request size limit.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::generate_text`].
    pub async fn generate_with_media(
        &self,
        prompt: &str,
        mime_type: &str,
        media: &[u8],
    ) -> Result<String, LlmError> {
        let parts = vec![
            json!({ "text": prompt }),
            json!({
                "inline_data": {
                    "mime_type": mime_type,
                    "data": BASE64.encode(media),
                }
            }),
        ];
        self.generate(parts).await
    }

    async fn generate(&self, parts: Vec<serde_json::Value>) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::Unavailable("No Gemini API key configured".into()))?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );
        let body = json!({ "contents": [ { "parts": parts } ] });

        let result = self
            .http
            .post(&url)
            .json(&body)
            .timeout(Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                if e.is_timeout() {
                    warn!("Gemini request timed out after {}ms", self.timeout_ms);
                    return Err(LlmError::Timeout(self.timeout_ms));
                }
                warn!("Gemini request failed: {}", e);
                return Err(e.into());
            }
        };

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let detail = resp.text().await.unwrap_or_default();
            warn!("Gemini API returned HTTP {}: {}", status, detail);
            return Err(LlmError::Upstream { status, detail });
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| LlmError::ParseError(e.to_string()))?;

        // Safety blocks come back as a candidate with no parts.
        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or("")
            .to_string();
        if text.is_empty() {
            return Err(LlmError::ParseError(
                "Gemini response carried no text part".into(),
            ));
        }

        Ok(text)
    }

    /// Check if a key is configured.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}
