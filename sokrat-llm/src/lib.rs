//! # sokrat-llm — Provider Adapters for Sokrat
//!
//! One opaque seam between the tutoring endpoints and the hosted models:
//!   - **OpenAI-compatible chat** (Groq hosts the tutor and quiz models)
//!   - **Gemini-style multimodal** (image, video, and voice questions)
//!
//! Every call is a single attempt with a hard timeout. There is deliberately
//! no retry machinery in this crate: the only recovery path in the service is
//! the quiz endpoint switching to search-derived placeholder items, and that
//! decision belongs to the caller.

pub mod client;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod types;

pub use client::{LlmClient, LlmProvider};
pub use error::LlmError;
pub use gemini::GeminiClient;
pub use types::{ChatRequest, ChatResponse, ModelRole};
