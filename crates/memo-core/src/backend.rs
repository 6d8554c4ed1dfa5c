//! Persistence backends.
//!
//! The memo collection is either served by the remote memo service or kept in
//! the offline store. Both sides implement [`PersistenceBackend`], so callers
//! pick a backend once per load and never branch on the mode afterwards.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::api::{HttpMemoApi, MemoApi};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{Memo, MemoDraft, MemoId};
use crate::storage::{FallbackStore, FileFallbackStore};
use crate::util::unix_millis_now;

/// Where the memo collection currently lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PersistenceMode {
    #[default]
    Remote,
    Fallback,
}

/// Uniform capability interface over remote and offline persistence.
#[async_trait]
pub trait PersistenceBackend: Send + Sync {
    fn mode(&self) -> PersistenceMode;

    /// Load the full collection, most recent first
    async fn list(&self) -> Result<Vec<Memo>>;

    /// Create a memo from a draft
    async fn create(&self, draft: &MemoDraft) -> Result<Memo>;

    /// Replace the editable fields of an existing memo
    async fn update(&self, existing: &Memo, draft: &MemoDraft) -> Result<Memo>;

    async fn delete(&self, id: &MemoId) -> Result<()>;

    /// Write the full collection back, if this backend keeps a local copy
    fn persist(&self, memos: &[Memo]) -> Result<()>;
}

/// Backend that forwards every call to the memo service.
pub struct RemoteBackend {
    api: Arc<dyn MemoApi>,
}

impl RemoteBackend {
    pub const fn new(api: Arc<dyn MemoApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PersistenceBackend for RemoteBackend {
    fn mode(&self) -> PersistenceMode {
        PersistenceMode::Remote
    }

    async fn list(&self) -> Result<Vec<Memo>> {
        self.api.list().await
    }

    async fn create(&self, draft: &MemoDraft) -> Result<Memo> {
        self.api.create(draft).await
    }

    async fn update(&self, existing: &Memo, draft: &MemoDraft) -> Result<Memo> {
        self.api.update(&existing.id, draft).await
    }

    async fn delete(&self, id: &MemoId) -> Result<()> {
        self.api.delete(id).await
    }

    fn persist(&self, _memos: &[Memo]) -> Result<()> {
        Ok(())
    }
}

/// Backend that synthesizes memos locally and keeps them in the offline store.
pub struct FallbackBackend {
    store: Arc<dyn FallbackStore>,
    last_id: AtomicI64,
}

impl FallbackBackend {
    pub fn new(store: Arc<dyn FallbackStore>) -> Self {
        Self {
            store,
            last_id: AtomicI64::new(0),
        }
    }

    /// Next offline id: the current time in milliseconds, bumped past any id
    /// already handed out or loaded.
    fn next_id(&self) -> i64 {
        let now = unix_millis_now();
        let update = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            });
        let (Ok(previous) | Err(previous)) = update;
        now.max(previous.saturating_add(1))
    }

    fn observe_ids(&self, memos: &[Memo]) {
        if let Some(max_id) = memos.iter().filter_map(|memo| memo.id.as_number()).max() {
            self.last_id.fetch_max(max_id, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl PersistenceBackend for FallbackBackend {
    fn mode(&self) -> PersistenceMode {
        PersistenceMode::Fallback
    }

    async fn list(&self) -> Result<Vec<Memo>> {
        let memos = self.store.load();
        self.observe_ids(&memos);
        Ok(memos)
    }

    async fn create(&self, draft: &MemoDraft) -> Result<Memo> {
        Ok(Memo::from_draft(
            MemoId::Number(self.next_id()),
            draft.clone(),
            Utc::now(),
        ))
    }

    async fn update(&self, existing: &Memo, draft: &MemoDraft) -> Result<Memo> {
        Ok(existing.with_draft(draft))
    }

    async fn delete(&self, _id: &MemoId) -> Result<()> {
        Ok(())
    }

    fn persist(&self, memos: &[Memo]) -> Result<()> {
        self.observe_ids(memos);
        self.store.save(memos)
    }
}

/// Result of the start sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub mode: PersistenceMode,
    pub memos: Vec<Memo>,
}

/// Both backends, with the start sequence that chooses between them.
#[derive(Clone)]
pub struct Backends {
    remote: Arc<RemoteBackend>,
    fallback: Arc<FallbackBackend>,
}

impl Backends {
    pub fn new(api: Arc<dyn MemoApi>, store: Arc<dyn FallbackStore>) -> Self {
        Self {
            remote: Arc::new(RemoteBackend::new(api)),
            fallback: Arc::new(FallbackBackend::new(store)),
        }
    }

    /// Build the HTTP client and file store described by the configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let api = HttpMemoApi::new(config.api_base_url.clone())?;
        let store = FileFallbackStore::new(config.storage_path.clone());
        Ok(Self::new(Arc::new(api), Arc::new(store)))
    }

    /// The backend serving the given mode.
    pub fn active(&self, mode: PersistenceMode) -> Arc<dyn PersistenceBackend> {
        match mode {
            PersistenceMode::Remote => self.remote.clone(),
            PersistenceMode::Fallback => self.fallback.clone(),
        }
    }

    /// Fetch from the memo service, switching to the offline store if it fails.
    ///
    /// A failing service is a mode switch, not an error.
    pub async fn load(&self) -> LoadOutcome {
        match self.remote.list().await {
            Ok(memos) => {
                tracing::info!("Loaded {} memos from the memo service", memos.len());
                LoadOutcome {
                    mode: PersistenceMode::Remote,
                    memos,
                }
            }
            Err(error) => {
                tracing::warn!("Memo service unreachable, switching to offline mode: {}", error);
                let memos = self.fallback.list().await.unwrap_or_default();
                tracing::info!("Loaded {} memos from offline storage", memos.len());
                LoadOutcome {
                    mode: PersistenceMode::Fallback,
                    memos,
                }
            }
        }
    }

    /// Write the collection to the offline store.
    pub fn persist_offline(&self, memos: &[Memo]) -> Result<()> {
        self.fallback.persist(memos)
    }
}
