//! taskquery - free-form task query parsing
//!
//! This crate turns one line of quick-add text such as
//! `buy milk tomorrow at 5pm @errand #Home p1` into the structured payload a
//! task-tracking API expects. A locale-specific grammar is run through an
//! ambiguity-tolerant Earley parser; the first parse is reduced to a
//! [`TaskRecord`] and serialized as a [`TaskPayload`].
//!
//! ```no_run
//! use taskquery::{parse_query, Locale};
//!
//! let payload = parse_query("call mom tomorrow @family p2", Locale::En)?;
//! assert_eq!(payload.content, "call mom");
//! # Ok::<(), taskquery::QueryError>(())
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod grammar;
pub mod output;
pub mod parser;
pub mod task;
pub mod token;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::QueryError;
pub use grammar::{Grammar, Locale};
pub use parser::QueryParser;
pub use task::{reduce, Priority, TaskPayload, TaskRecord, PLACEHOLDER_CONTENT};
pub use token::{Token, TokenKind, TokenSequence};

/// Parse a query in `locale` and build its submission payload.
///
/// This compiles the locale's grammar on every call; hold a
/// [`QueryParser`] to parse many queries.
///
/// # Errors
///
/// Returns `QueryError::Grammar` if the locale's grammar fails to compile.
pub fn parse_query(input: &str, locale: Locale) -> Result<TaskPayload, QueryError> {
    let parser = QueryParser::new(locale)?;
    let tokens = parser.parse(input);
    Ok(TaskPayload::from(&reduce(&tokens)))
}
