//! Error types for taskquery.
//!
//! Free-form query text never produces an error: anything the grammar does not
//! recognize degrades to content. Errors only come from configuration, from
//! a malformed grammar definition, or from I/O and serialization in the host.

use thiserror::Error;

/// Errors that can occur while configuring or running the query engine.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The requested locale code is not one of the supported locales.
    #[error("Unsupported locale '{0}' (expected one of: da, de, en, es, fr, it, ja, ko, nl, pl, pt, ru, sv, zh)")]
    UnsupportedLocale(String),

    /// The grammar definition could not be compiled.
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QueryError {
    /// Get the exit code for this error type.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UnsupportedLocale(_) | Self::Config(_) => 2,
            Self::Grammar(_) => 3,
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
