//! Offline storage for the memo collection.
//!
//! The whole collection lives in a single JSON blob that is overwritten on
//! every save. A missing or unreadable blob loads as an empty collection.

mod file;
mod memory;

pub use file::FileFallbackStore;
pub use memory::InMemoryFallbackStore;

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::Memo;

/// Trait for offline memo storage backends.
pub trait FallbackStore: Send + Sync {
    /// Load the stored collection.
    ///
    /// Returns an empty collection if nothing was stored or the blob is corrupt.
    fn load(&self) -> Vec<Memo>;

    /// Replace the stored collection.
    fn save(&self, memos: &[Memo]) -> Result<()>;
}

impl<T: FallbackStore + ?Sized> FallbackStore for Arc<T> {
    fn load(&self) -> Vec<Memo> {
        (**self).load()
    }

    fn save(&self, memos: &[Memo]) -> Result<()> {
        (**self).save(memos)
    }
}

/// Decode a stored blob.
fn decode_blob(raw: &str) -> Result<Vec<Memo>> {
    serde_json::from_str(raw).map_err(|error| Error::Parse(error.to_string()))
}

/// Decode a stored blob, degrading to an empty collection on failure.
fn decode_blob_or_empty(raw: &str, source: &str) -> Vec<Memo> {
    match decode_blob(raw) {
        Ok(memos) => memos,
        Err(error) => {
            tracing::warn!("Ignoring unreadable memo blob in {}: {}", source, error);
            Vec::new()
        }
    }
}

fn encode_blob(memos: &[Memo]) -> Result<String> {
    Ok(serde_json::to_string(memos)?)
}
