//! In-memory offline store.

use std::io;
use std::sync::RwLock;

use super::{decode_blob_or_empty, encode_blob, FallbackStore};
use crate::error::{Error, Result};
use crate::models::Memo;

/// Offline store that keeps the serialized blob in memory.
///
/// Behaves like [`super::FileFallbackStore`] without touching the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryFallbackStore {
    blob: RwLock<Option<String>>,
}

impl InMemoryFallbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds the given raw blob.
    pub fn with_blob(raw: impl Into<String>) -> Self {
        Self {
            blob: RwLock::new(Some(raw.into())),
        }
    }

    /// The raw stored blob, if any.
    pub fn blob(&self) -> Option<String> {
        self.blob.read().ok().and_then(|blob| blob.clone())
    }
}

impl FallbackStore for InMemoryFallbackStore {
    fn load(&self) -> Vec<Memo> {
        self.blob()
            .map(|raw| decode_blob_or_empty(&raw, "memory"))
            .unwrap_or_default()
    }

    fn save(&self, memos: &[Memo]) -> Result<()> {
        let json = encode_blob(memos)?;
        let mut blob = self
            .blob
            .write()
            .map_err(|_| Error::Io(io::Error::other("offline store lock poisoned")))?;
        *blob = Some(json);
        Ok(())
    }
}
