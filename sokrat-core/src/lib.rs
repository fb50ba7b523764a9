//! # Sokrat Core Library
//!
//! Transport-free core of the Sokrat tutoring backend: everything here is
//! pure data-in, data-out and runs identically with or without network
//! providers wired up.
//!
//! - [`parser`] — turns free-text model output into validated [`QuizItem`]s
//! - [`scoring`] — grades submitted answers and writes the student report
//! - [`transcript`] — prunes and renders Socratic conversation history
//! - [`config`] — injected TOML configuration for the whole service
//!
//! ## Parsing Contract
//!
//! A quiz item leaves [`parser::parse_quiz_response`] only if it carries
//! exactly four options and an answer key naming one of them. Blocks that
//! fail validation are dropped and logged, never repaired; a response in
//! which every block is malformed parses to an empty list.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod parser;
pub mod quiz;
pub mod scoring;
pub mod transcript;

pub use config::AppConfig;
pub use error::CoreError;
pub use quiz::{QuizItem, OPTION_COUNT};
pub use scoring::ScoreReport;
