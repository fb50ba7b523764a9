//! Error types for the Sokrat core library.

use thiserror::Error;

/// Top-level error type for core operations.
///
/// Quiz parsing and scoring are deliberately infallible (bad input degrades
/// to fewer records, never an error), so this covers configuration loading
/// and file access only.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, CoreError>;
