//! Output formatting for taskquery.
//!
//! This module provides formatters for displaying parse results in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::QueryError;
use crate::grammar::Locale;
use crate::task::TaskRecord;
use crate::token::TokenSequence;

pub use json::*;
pub use pretty::*;

/// Format a parsed task based on output format
///
/// # Errors
///
/// Returns `QueryError::Json` if JSON serialization fails.
pub fn format_task(
    record: &TaskRecord<'_>,
    candidates: Option<&[TokenSequence]>,
    format: OutputFormat,
) -> Result<String, QueryError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(record, candidates)),
        OutputFormat::Json => format_task_json(record, candidates),
    }
}

/// Format the supported locales based on output format
///
/// # Errors
///
/// Returns `QueryError::Json` if JSON serialization fails.
pub fn format_locales(locales: &[Locale], format: OutputFormat) -> Result<String, QueryError> {
    match format {
        OutputFormat::Pretty => Ok(format_locales_pretty(locales)),
        OutputFormat::Json => format_locales_json(locales),
    }
}

/// Format the configuration based on output format
///
/// Pretty output is the YAML that `config init` writes.
///
/// # Errors
///
/// Returns `QueryError::Config` or `QueryError::Json` if serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, QueryError> {
    match format {
        OutputFormat::Pretty => Ok(config.to_yaml()?.trim_end().to_string()),
        OutputFormat::Json => format_config_json(config),
    }
}
