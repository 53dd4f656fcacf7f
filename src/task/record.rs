//! The structured task record built from a token sequence.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Content used when a query supplied no title text.
pub const PLACEHOLDER_CONTENT: &str = "<no content>";

/// A task priority level, always within `1..=4`. Level 1 is the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    /// The lowest level, used when a query has no priority marker.
    pub const LOWEST: Self = Self(1);
    /// The highest level.
    pub const HIGHEST: Self = Self(4);

    /// Create a priority from its level. Returns `None` outside `1..=4`.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level >= Self::LOWEST.0 && level <= Self::HIGHEST.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Map a query marker digit to a level: `p1` is the most urgent marker
    /// and becomes the highest level, `p4` becomes the lowest.
    #[must_use]
    pub const fn from_marker(marker: u8) -> Option<Self> {
        if marker >= Self::LOWEST.0 && marker <= Self::HIGHEST.0 {
            Some(Self(Self::HIGHEST.0 + 1 - marker))
        } else {
            None
        }
    }

    /// The numeric level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::LOWEST
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| format!("priority {level} is outside 1..=4"))
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

/// A task assembled from one token sequence.
///
/// The record borrows the tokens it was reduced from: labels, extension
/// values and [`last`](Self::last) are references into that sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord<'a> {
    pub(super) content: String,
    pub(super) labels: Vec<&'a Token>,
    pub(super) priority: Priority,
    pub(super) due_string: String,
    pub(super) project: Option<String>,
    pub(super) label_ids: Vec<u64>,
    pub(super) extensions: BTreeMap<String, &'a Token>,
    pub(super) last: Option<&'a Token>,
}

impl Default for TaskRecord<'_> {
    fn default() -> Self {
        Self {
            content: PLACEHOLDER_CONTENT.to_string(),
            labels: Vec::new(),
            priority: Priority::default(),
            due_string: String::new(),
            project: None,
            label_ids: Vec::new(),
            extensions: BTreeMap::new(),
            last: None,
        }
    }
}

impl<'a> TaskRecord<'a> {
    /// The title text, or [`PLACEHOLDER_CONTENT`]. Never empty.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether real title text was supplied.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content != PLACEHOLDER_CONTENT
    }

    /// Label tokens in the order they appeared, duplicates included.
    #[must_use]
    pub fn labels(&self) -> &[&'a Token] {
        &self.labels
    }

    /// Label names in the order they appeared.
    pub fn label_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.labels.iter().map(|&t| t.value())
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// The literal due-date phrase, empty if none was given.
    #[must_use]
    pub fn due_string(&self) -> &str {
        &self.due_string
    }

    #[must_use]
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Resolved label ids. Empty until [`with_label_ids`](Self::with_label_ids).
    #[must_use]
    pub fn label_ids(&self) -> &[u64] {
        &self.label_ids
    }

    /// Attach label ids resolved by the caller.
    #[must_use]
    pub fn with_label_ids(mut self, ids: Vec<u64>) -> Self {
        self.label_ids = ids;
        self
    }

    /// Tokens of kinds that have no dedicated field, keyed by kind name.
    #[must_use]
    pub const fn extensions(&self) -> &BTreeMap<String, &'a Token> {
        &self.extensions
    }

    /// The token stored for an extension kind, if any.
    #[must_use]
    pub fn extension(&self, kind: &str) -> Option<&'a Token> {
        self.extensions.get(kind).copied()
    }

    /// The final token of the reduced sequence. `None` only for empty input.
    #[must_use]
    pub const fn last(&self) -> Option<&'a Token> {
        self.last
    }
}
