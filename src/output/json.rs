//! JSON output formatting for taskquery.
//!
//! This module provides functions for formatting parse results as JSON.

use serde_json::json;

use crate::config::Config;
use crate::error::QueryError;
use crate::grammar::Locale;
use crate::task::{TaskPayload, TaskRecord};
use crate::token::TokenSequence;

/// Format a task as its submission payload.
///
/// With candidates, the payload is wrapped together with every candidate
/// token sequence.
///
/// # Errors
///
/// Returns `QueryError::Json` if JSON serialization fails.
pub fn format_task_json(
    record: &TaskRecord<'_>,
    candidates: Option<&[TokenSequence]>,
) -> Result<String, QueryError> {
    let payload = TaskPayload::from(record);
    match candidates {
        None => payload.to_json_pretty(),
        Some(candidates) => {
            let output = json!({
                "payload": payload,
                "count": candidates.len(),
                "candidates": candidates,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        },
    }
}

/// Format the supported locales as JSON
///
/// # Errors
///
/// Returns `QueryError::Json` if JSON serialization fails.
pub fn format_locales_json(locales: &[Locale]) -> Result<String, QueryError> {
    let items: Vec<_> = locales
        .iter()
        .map(|l| json!({"code": l.code(), "name": l.name()}))
        .collect();
    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the configuration as JSON
///
/// # Errors
///
/// Returns `QueryError::Json` if JSON serialization fails.
pub fn format_config_json(config: &Config) -> Result<String, QueryError> {
    Ok(serde_json::to_string_pretty(config)?)
}
