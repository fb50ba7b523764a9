//! # sokrat-search — Search Providers for Sokrat
//!
//! Thin clients for the three platforms the service draws on:
//!   - **Serper** — Google results as JSON (quiz fallback, `/search`, web resources)
//!   - **Wikipedia** — MediaWiki article search
//!   - **YouTube** — Data API video search
//!
//! Every provider reports through [`SearchOutcome`], which keeps "no
//! results" and "unrecognized payload" apart. Transport failures are the
//! only `Err` case.

pub mod error;
pub mod relevance;
pub mod resources;
pub mod serper;
pub mod types;
pub mod wikipedia;
pub mod youtube;

pub use error::SearchError;
pub use resources::ResourceBundle;
pub use serper::SerperClient;
pub use types::{SearchHit, SearchOutcome};
pub use wikipedia::WikipediaClient;
pub use youtube::YouTubeClient;
