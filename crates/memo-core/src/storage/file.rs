//! File-backed offline store.
//!
//! The collection is kept in one JSON file. Writes go through a temp file and
//! a rename so a crash never leaves a half-written blob behind.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::{decode_blob_or_empty, encode_blob, FallbackStore};
use crate::error::Result;
use crate::models::Memo;

/// Offline memo storage in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileFallbackStore {
    path: PathBuf,
}

impl FileFallbackStore {
    /// Create a store for the given file. Nothing is touched until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "memos".into(), |name| name.to_string_lossy().into_owned());
        self.path.with_file_name(format!(".{file_name}.tmp"))
    }
}

impl FallbackStore for FileFallbackStore {
    fn load(&self) -> Vec<Memo> {
        if !self.path.exists() {
            return Vec::new();
        }

        match fs::read_to_string(&self.path) {
            Ok(raw) => decode_blob_or_empty(&raw, &self.path.display().to_string()),
            Err(error) => {
                tracing::warn!("Failed to read {}: {}", self.path.display(), error);
                Vec::new()
            }
        }
    }

    fn save(&self, memos: &[Memo]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = encode_blob(memos)?;
        let temp_path = self.temp_path();
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved {} memos to {}", memos.len(), self.path.display());
        Ok(())
    }
}
