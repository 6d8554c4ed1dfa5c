//! View models for the memo list.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::models::{Memo, MemoId};
use crate::state::AppState;

pub const EMPTY_PLACEHOLDER: &str = "No memos yet. Add a new memo using the form above.";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const OFFLINE_NOTICE: &str = "Offline mode (using local storage)";
pub const RECONNECT_LABEL: &str = "Reconnect";

const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

/// One row of the memo list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoItemView {
    pub id: MemoId,
    pub title: String,
    pub content: String,
    /// Creation time formatted for display
    pub created_label: String,
}

impl MemoItemView {
    pub fn from_memo(memo: &Memo) -> Self {
        Self {
            id: memo.id.clone(),
            title: memo.title.clone(),
            content: memo.content.clone(),
            created_label: format_created_at(&memo.created_at),
        }
    }
}

/// What the list area shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoListView {
    Loading,
    Empty,
    Items(Vec<MemoItemView>),
}

/// Build the list area for the current state.
pub fn list_view(state: &AppState) -> MemoListView {
    if state.loading {
        MemoListView::Loading
    } else if state.memos.is_empty() {
        MemoListView::Empty
    } else {
        MemoListView::Items(state.memos.iter().map(MemoItemView::from_memo).collect())
    }
}

/// Heading above the list, with the memo count.
pub fn list_header(count: usize) -> String {
    format!("Memos ({count})")
}

/// Format a creation timestamp in the local time zone.
///
/// Values without an offset are taken as local time; anything unparseable is
/// returned unchanged.
pub fn format_created_at(raw: &str) -> String {
    format_created_at_in(raw, &Local)
}

/// Format a creation timestamp in the given time zone.
pub fn format_created_at_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map_or_else(
            || raw.to_string(),
            |local| local.format(DISPLAY_FORMAT).to_string(),
        )
}
