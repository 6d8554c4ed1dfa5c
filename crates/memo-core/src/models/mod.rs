//! Data models for Memo Pad

mod memo;

pub use memo::{format_timestamp, Memo, MemoDraft, MemoId};
