//! Configuration for the Sokrat service.
//!
//! Maps directly to `sokrat.toml`. Secrets never live in the file: config
//! carries the *names* of environment variables, resolved once when the
//! provider clients are constructed at startup. One `AppConfig` is built at
//! process start and injected into every component; nothing reads the
//! environment after that.

use serde::{Deserialize, Serialize};

/// Top-level service configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Chat-completion LLM settings.
    #[serde(default)]
    pub llm: LlmConfig,
    /// Multimodal LLM settings.
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Search provider settings.
    #[serde(default)]
    pub search: SearchConfig,
    /// Media upload and speech synthesis settings.
    #[serde(default)]
    pub media: MediaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::CoreError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Origins allowed by the CORS layer.
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

/// Chat-completion LLM settings (OpenAI-compatible wire shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider: "openai-compatible" or "none".
    #[serde(default = "default_llm_provider")]
    pub provider: String,
    /// Base URL of the chat-completions API.
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_llm_key_env")]
    pub api_key_env: String,
    /// Model used for Socratic chat and summaries.
    #[serde(default = "default_tutor_model")]
    pub tutor_model: String,
    /// Model used for quiz generation.
    #[serde(default = "default_quiz_model")]
    pub quiz_model: String,
    /// Sampling temperature for every request.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate per request.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Hard timeout for any chat call in milliseconds.
    #[serde(default = "default_llm_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl LlmConfig {
    /// Resolve the configured API key from the environment.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai-compatible".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            tutor_model: "mixtral-8x7b-32768".to_string(),
            quiz_model: "llama3-70b-8192".to_string(),
            temperature: 0.5,
            max_tokens: 2048,
            request_timeout_ms: 30_000,
        }
    }
}

/// Multimodal LLM settings (Gemini-style `generateContent`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL of the generative-language API.
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_gemini_key_env")]
    pub api_key_env: String,
    /// Model used for image, video, and voice questions.
    #[serde(default = "default_gemini_model")]
    pub model: String,
    /// Hard timeout in milliseconds; video answers can take a while.
    #[serde(default = "default_gemini_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl GeminiConfig {
    /// Resolve the configured API key from the environment.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "GOOGLE_API_KEY".to_string(),
            model: "gemini-1.5-pro".to_string(),
            request_timeout_ms: 120_000,
        }
    }
}

/// Search provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the Google-results search API.
    #[serde(default = "default_serper_base_url")]
    pub serper_base_url: String,
    /// Name of the environment variable holding the search API key.
    #[serde(default = "default_serper_key_env")]
    pub serper_api_key_env: String,
    /// Base URL of the MediaWiki API.
    #[serde(default = "default_wikipedia_base_url")]
    pub wikipedia_base_url: String,
    /// Base URL of the YouTube Data API.
    #[serde(default = "default_youtube_base_url")]
    pub youtube_base_url: String,
    /// Name of the environment variable holding the YouTube API key.
    #[serde(default = "default_youtube_key_env")]
    pub youtube_api_key_env: String,
    /// Results requested per provider.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

impl SearchConfig {
    /// Resolve the web-search API key from the environment.
    #[must_use]
    pub fn serper_api_key(&self) -> Option<String> {
        std::env::var(&self.serper_api_key_env).ok()
    }

    /// Resolve the YouTube API key from the environment.
    #[must_use]
    pub fn youtube_api_key(&self) -> Option<String> {
        std::env::var(&self.youtube_api_key_env).ok()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            serper_base_url: "https://google.serper.dev".to_string(),
            serper_api_key_env: "SERPER_API_KEY".to_string(),
            wikipedia_base_url: "https://en.wikipedia.org/w/api.php".to_string(),
            youtube_base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            youtube_api_key_env: "YOUTUBE_API_KEY".to_string(),
            result_limit: 3,
        }
    }
}

/// Media upload and speech synthesis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Directory for per-request upload spools and synthesized speech files.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Language code for synthesized speech.
    #[serde(default = "default_tts_lang")]
    pub tts_lang: String,
    /// Upper bound on an uploaded request body in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            upload_dir: "uploads".to_string(),
            tts_lang: "en".to_string(),
            max_upload_bytes: 64 * 1024 * 1024,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_bind_addr() -> String { "0.0.0.0:8000".to_string() }
fn default_origins() -> Vec<String> { vec!["http://localhost:5173".to_string()] }
fn default_llm_provider() -> String { "openai-compatible".to_string() }
fn default_llm_base_url() -> String { "https://api.groq.com/openai/v1".to_string() }
fn default_llm_key_env() -> String { "GROQ_API_KEY".to_string() }
fn default_tutor_model() -> String { "mixtral-8x7b-32768".to_string() }
fn default_quiz_model() -> String { "llama3-70b-8192".to_string() }
fn default_gemini_base_url() -> String { "https://generativelanguage.googleapis.com/v1beta".to_string() }
fn default_gemini_key_env() -> String { "GOOGLE_API_KEY".to_string() }
fn default_gemini_model() -> String { "gemini-1.5-pro".to_string() }
fn default_serper_base_url() -> String { "https://google.serper.dev".to_string() }
fn default_serper_key_env() -> String { "SERPER_API_KEY".to_string() }
fn default_wikipedia_base_url() -> String { "https://en.wikipedia.org/w/api.php".to_string() }
fn default_youtube_base_url() -> String { "https://www.googleapis.com/youtube/v3".to_string() }
fn default_youtube_key_env() -> String { "YOUTUBE_API_KEY".to_string() }
fn default_upload_dir() -> String { "uploads".to_string() }
fn default_tts_lang() -> String { "en".to_string() }
fn default_temperature() -> f32 { 0.5 }
fn default_result_limit() -> usize { 3 }
fn default_max_tokens() -> u32 { 2048 }
fn default_llm_timeout_ms() -> u64 { 30_000 }
fn default_gemini_timeout_ms() -> u64 { 120_000 }
fn default_max_upload_bytes() -> usize { 64 * 1024 * 1024 }
