//! Submission payload.
//!
//! The payload is the record projected onto the shape a task-tracking API
//! accepts: empty or absent fields are left out entirely, never sent as
//! `null` or `""`.

use serde::{Deserialize, Serialize};

use super::record::{Priority, TaskRecord};
use crate::error::QueryError;

/// API-ready task payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    /// Title, possibly the placeholder.
    pub content: String,

    /// Priority level (1-4).
    #[serde(default)]
    pub priority: Priority,

    /// Literal due-date phrase.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub due_string: String,

    /// Project name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Label names in query order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    /// Whether the record carried resolved label ids.
    #[serde(default)]
    pub label_ids: bool,
}

impl TaskPayload {
    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, QueryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, QueryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&TaskRecord<'_>> for TaskPayload {
    fn from(record: &TaskRecord<'_>) -> Self {
        Self {
            content: record.content().to_string(),
            priority: record.priority(),
            due_string: record.due_string().to_string(),
            project: record.project().map(String::from),
            labels: record.label_names().map(String::from).collect(),
            label_ids: !record.label_ids().is_empty(),
        }
    }
}
