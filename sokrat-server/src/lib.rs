//! # sokrat-server — HTTP service for Sokrat
//!
//! This crate wires the domain crates into an axum application: it owns the
//! route table, the shared state, and the endpoint-level policy (what
//! degrades, what 404s, what 502s).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │              axum router                   │
//! │  /query /generate-mcqs /grade-quiz         │
//! │  /search /resources                        │
//! │  /image-query /video-query /voice-query    │
//! │  /download-audio/{id} /health              │
//! └───────┬──────────────┬──────────────┬──────┘
//!         │              │              │
//!         ▼              ▼              ▼
//!  ┌────────────┐ ┌────────────┐ ┌────────────┐
//!  │ sokrat-core│ │ sokrat-llm │ │sokrat-search│
//!  │ parse/score│ │ chat/gemini│ │ 3 providers │
//!  └────────────┘ └────────────┘ └────────────┘
//! ```
//!
//! ## Modules
//!
//! - `routes` — route table, CORS, and one submodule per endpoint group
//! - `state` — `AppState` built once from the injected config
//! - `error` — `ApiError` with the `{"detail": ...}` response contract
//! - `tts` — speech synthesis for the multimedia answers

pub mod error;
pub mod routes;
pub mod state;
pub mod tts;
