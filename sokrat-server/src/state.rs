//! Shared application state.
//!
//! One `AppConfig` is built at process start and every provider client is
//! constructed from it exactly once. Handlers receive the state through the
//! axum extractor; cloning is cheap because every field sits behind an `Arc`.

use std::path::PathBuf;
use std::sync::Arc;

use sokrat_core::AppConfig;
use sokrat_llm::{ChatRequest, GeminiClient, LlmClient, LlmProvider};
use sokrat_search::{SerperClient, WikipediaClient, YouTubeClient};
use tracing::warn;

use crate::tts::SpeechClient;

/// Everything a handler needs.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub llm: Arc<LlmClient>,
    pub gemini: Arc<GeminiClient>,
    pub serper: Arc<SerperClient>,
    pub wikipedia: Arc<WikipediaClient>,
    pub youtube: Arc<YouTubeClient>,
    pub speech: Arc<SpeechClient>,
}

impl AppState {
    /// Wire up every provider client from the config.
    ///
    /// API keys are resolved from the environment here, once. A missing key
    /// leaves the owning client in a degraded state that errors on use, so
    /// the process still serves the endpoints that do not need it.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let provider = if config.llm.provider == "none" {
            LlmProvider::None
        } else {
            match config.llm.api_key() {
                Some(api_key) => LlmProvider::OpenAiCompatible {
                    base_url: config.llm.base_url.clone(),
                    api_key,
                },
                None => {
                    warn!(
                        "{} is not set; chat endpoints will answer 502",
                        config.llm.api_key_env
                    );
                    LlmProvider::None
                }
            }
        };
        let llm = LlmClient::new(
            provider,
            config.llm.tutor_model.clone(),
            config.llm.quiz_model.clone(),
        );

        if config.gemini.api_key().is_none() {
            warn!(
                "{} is not set; multimedia endpoints will answer 502",
                config.gemini.api_key_env
            );
        }
        let gemini = GeminiClient::new(
            config.gemini.base_url.clone(),
            config.gemini.api_key(),
            config.gemini.model.clone(),
            config.gemini.request_timeout_ms,
        );

        if config.search.serper_api_key().is_none() {
            warn!(
                "{} is not set; web search and the quiz fallback are disabled",
                config.search.serper_api_key_env
            );
        }
        let serper = SerperClient::new(
            config.search.serper_base_url.clone(),
            config.search.serper_api_key(),
            config.search.result_limit,
        );
        let wikipedia = WikipediaClient::new(
            config.search.wikipedia_base_url.clone(),
            config.search.result_limit,
        );
        let youtube = YouTubeClient::new(
            config.search.youtube_base_url.clone(),
            config.search.youtube_api_key(),
            config.search.result_limit,
        );

        let speech = SpeechClient::new(
            PathBuf::from(&config.media.upload_dir),
            config.media.tts_lang.clone(),
        );

        Self {
            config: Arc::new(config),
            llm: Arc::new(llm),
            gemini: Arc::new(gemini),
            serper: Arc::new(serper),
            wikipedia: Arc::new(wikipedia),
            youtube: Arc::new(youtube),
            speech: Arc::new(speech),
        }
    }

    /// Apply the configured sampling and timeout knobs to a prompt-built
    /// request.
    #[must_use]
    pub fn tune(&self, request: ChatRequest) -> ChatRequest {
        request
            .with_temperature(self.config.llm.temperature)
            .with_max_tokens(self.config.llm.max_tokens)
            .with_timeout(self.config.llm.request_timeout_ms)
    }

    /// Directory where uploads are spooled and speech files parked.
    #[must_use]
    pub fn media_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.media.upload_dir)
    }
}
