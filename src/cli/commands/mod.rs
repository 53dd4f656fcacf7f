//! Command implementations for taskquery.
//!
//! Each command returns its rendered output; `main` prints it.

mod completions;
mod config;
mod parse;

pub use completions::{
    completion_install_instructions, completions, generate_completions, shell_from_str,
};
pub use config::config;
pub use parse::parse;

use crate::cli::args::OutputFormat;
use crate::error::QueryError;
use crate::grammar::Locale;
use crate::output::format_locales;

/// Execute locales command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn locales(format: OutputFormat) -> Result<String, QueryError> {
    format_locales(&Locale::ALL, format)
}
