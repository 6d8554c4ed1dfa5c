//! Memo model

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a memo.
///
/// The memo service owns the id format, so any JSON number or string is
/// accepted and echoed back unchanged. Offline memos always use `Number`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemoId {
    Number(i64),
    /// Numbers outside the `i64` range, or with a fraction
    OtherNumber(serde_json::Number),
    Text(String),
}

impl MemoId {
    /// Numeric value of the id, if it has one.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::OtherNumber(_) | Self::Text(_) => None,
        }
    }
}

impl fmt::Display for MemoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::OtherNumber(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for MemoId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MemoId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MemoId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The editable part of a memo, as submitted by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoDraft {
    pub title: String,
    pub content: String,
}

impl MemoDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A memo in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    /// Unique identifier within the active collection
    pub id: MemoId,
    pub title: String,
    pub content: String,
    /// ISO-8601 creation timestamp, kept exactly as received
    pub created_at: String,
}

impl Memo {
    /// Build a memo from a draft with an explicit id and creation time.
    #[must_use]
    pub fn from_draft(id: MemoId, draft: MemoDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            created_at: format_timestamp(created_at),
        }
    }

    /// Copy of this memo with the editable fields replaced.
    ///
    /// `id` and `created_at` are preserved.
    #[must_use]
    pub fn with_draft(&self, draft: &MemoDraft) -> Self {
        Self {
            id: self.id.clone(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// Format a timestamp the way offline memos store it (`2024-01-01T00:00:00.000Z`).
#[must_use]
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
