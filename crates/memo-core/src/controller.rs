//! Application controller.
//!
//! Sequences backend calls, state transitions, and their effects. UI shells
//! that keep [`AppState`] in their own reactive containers implement
//! [`StateAccess`] for that container and run the same [`MemoController`].

use std::sync::Arc;

use crate::backend::{Backends, PersistenceBackend, PersistenceMode};
use crate::error::Error;
use crate::form::Submission;
use crate::models::{Memo, MemoDraft, MemoId};
use crate::prompt::{Prompt, DELETE_CONFIRMATION};
use crate::state::{AppState, Effect, Operation, Transition};

/// Create a memo through the backend and describe the outcome.
async fn create_flow(backend: &dyn PersistenceBackend, draft: &MemoDraft) -> Transition {
    match backend.create(draft).await {
        Ok(memo) => {
            tracing::info!("Created memo {}", memo.id);
            Transition::Created(memo)
        }
        Err(error) => failed(Operation::Create, &error),
    }
}

/// Update `existing` through the backend and describe the outcome.
///
/// `existing` is the collection entry with the target id, if there is one.
async fn update_flow(
    backend: &dyn PersistenceBackend,
    id: &MemoId,
    existing: Option<&Memo>,
    draft: &MemoDraft,
) -> Transition {
    let Some(existing) = existing else {
        return failed(Operation::Update, &Error::NotFound(id.to_string()));
    };
    match backend.update(existing, draft).await {
        Ok(memo) => {
            tracing::info!("Updated memo {}", memo.id);
            Transition::Updated(memo)
        }
        Err(error) => failed(Operation::Update, &error),
    }
}

/// Delete a memo through the backend and describe the outcome.
async fn delete_flow(backend: &dyn PersistenceBackend, id: &MemoId) -> Transition {
    match backend.delete(id).await {
        Ok(()) => {
            tracing::info!("Deleted memo {}", id);
            Transition::Deleted(id.clone())
        }
        Err(error) => failed(Operation::Delete, &error),
    }
}

/// Run effects returned by [`AppState::apply`].
///
/// Write failures are logged; they never change the state.
fn run_effects(backends: &Backends, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::PersistOffline(memos) => {
                if let Err(error) = backends.persist_offline(&memos) {
                    tracing::error!("Failed to save memos offline: {}", error);
                }
            }
        }
    }
}

fn failed(operation: Operation, error: &Error) -> Transition {
    tracing::warn!("{}{}", operation.error_prefix(), error);
    Transition::MutationFailed {
        operation,
        message: error.to_string(),
    }
}

/// Read and write access to the application state.
///
/// [`AppState`] implements it directly. UI shells that keep the state in a
/// reactive container wrap that container so [`MemoController`] can drive it.
pub trait StateAccess {
    fn mode(&self) -> PersistenceMode;

    fn find(&self, id: &MemoId) -> Option<Memo>;

    /// Apply a transition and return the effects it requests
    fn apply(&mut self, transition: Transition) -> Vec<Effect>;
}

impl StateAccess for AppState {
    fn mode(&self) -> PersistenceMode {
        Self::mode(self)
    }

    fn find(&self, id: &MemoId) -> Option<Memo> {
        Self::find(self, id).cloned()
    }

    fn apply(&mut self, transition: Transition) -> Vec<Effect> {
        Self::apply(self, transition)
    }
}

/// Drives the application state through the active backend.
///
/// The active backend is the one matching the mode recorded in the state, so
/// every clone of a controller over a shared state container agrees on it.
#[derive(Clone)]
pub struct MemoController<S = AppState> {
    state: S,
    backends: Backends,
    prompt: Arc<dyn Prompt>,
}

impl MemoController<AppState> {
    /// Create a controller in the loading state. Call [`Self::fetch`] to populate it.
    pub fn new(backends: Backends, prompt: Arc<dyn Prompt>) -> Self {
        Self::with_state(AppState::new(), backends, prompt)
    }
}

impl<S: StateAccess> MemoController<S> {
    /// Create a controller over an existing state container.
    pub fn with_state(state: S, backends: Backends, prompt: Arc<dyn Prompt>) -> Self {
        Self {
            state,
            backends,
            prompt,
        }
    }

    pub const fn state(&self) -> &S {
        &self.state
    }

    pub fn mode(&self) -> PersistenceMode {
        self.state.mode()
    }

    /// Backend serving the current mode.
    pub fn backend(&self) -> Arc<dyn PersistenceBackend> {
        self.backends.active(self.state.mode())
    }

    /// Load the collection, from the memo service if reachable, else offline.
    pub async fn fetch(&mut self) {
        self.apply(Transition::LoadStarted);
        let outcome = self.backends.load().await;
        self.apply(Transition::Loaded(outcome));
    }

    /// Re-run the start sequence; may leave offline mode.
    pub async fn retry_connection(&mut self) {
        tracing::info!("Retrying connection to the memo service");
        self.fetch().await;
    }

    pub async fn create(&mut self, draft: MemoDraft) {
        self.apply(Transition::MutationStarted);
        let backend = self.backend();
        let transition = create_flow(backend.as_ref(), &draft).await;
        self.apply(transition);
    }

    pub async fn update(&mut self, id: &MemoId, draft: MemoDraft) {
        self.apply(Transition::MutationStarted);
        let backend = self.backend();
        let existing = self.state.find(id);
        let transition = update_flow(backend.as_ref(), id, existing.as_ref(), &draft).await;
        self.apply(transition);
    }

    /// Ask the user whether a memo should be deleted.
    pub fn confirm_delete(&self) -> bool {
        self.prompt.confirm(DELETE_CONFIRMATION)
    }

    /// Delete a memo the user already agreed to remove.
    pub async fn delete_confirmed(&mut self, id: &MemoId) {
        self.apply(Transition::MutationStarted);
        let backend = self.backend();
        let transition = delete_flow(backend.as_ref(), id).await;
        self.apply(transition);
    }

    /// Delete a memo after the user confirms. Returns whether it was confirmed.
    pub async fn delete(&mut self, id: &MemoId) -> bool {
        if !self.confirm_delete() {
            return false;
        }
        self.delete_confirmed(id).await;
        true
    }

    /// Dispatch an accepted form submission.
    pub async fn submit(&mut self, submission: Submission) {
        match submission {
            Submission::Create(draft) => self.create(draft).await,
            Submission::Update(id, draft) => self.update(&id, draft).await,
        }
    }

    /// Load the memo with this id into the form. Returns false for unknown ids.
    pub fn edit(&mut self, id: &MemoId) -> bool {
        match self.state.find(id) {
            Some(memo) => {
                self.start_edit(memo);
                true
            }
            None => false,
        }
    }

    pub fn start_edit(&mut self, memo: Memo) {
        self.apply(Transition::EditStarted(memo));
    }

    pub fn cancel_edit(&mut self) {
        self.apply(Transition::EditCancelled);
    }

    fn apply(&mut self, transition: Transition) {
        let effects = self.state.apply(transition);
        run_effects(&self.backends, effects);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::MemoForm;
    use crate::storage::{FallbackStore, InMemoryFallbackStore};
    use crate::test_support::{memo, FakeMemoApi, ScriptedPrompt, SERVER_TIMESTAMP};

    struct Harness {
        controller: MemoController,
        api: Arc<FakeMemoApi>,
        store: Arc<InMemoryFallbackStore>,
        prompt: Arc<ScriptedPrompt>,
    }

    fn harness(api: FakeMemoApi, confirm: bool) -> Harness {
        let api = Arc::new(api);
        let store = Arc::new(InMemoryFallbackStore::new());
        let prompt = Arc::new(ScriptedPrompt::answering(confirm));
        let controller = MemoController::new(
            Backends::new(api.clone(), store.clone()),
            prompt.clone(),
        );
        Harness {
            controller,
            api,
            store,
            prompt,
        }
    }

    /// State container shared by every controller clone, like a UI signal.
    #[derive(Clone, Default)]
    struct SharedState(Arc<Mutex<AppState>>);

    impl SharedState {
        fn snapshot(&self) -> AppState {
            self.0.lock().unwrap().clone()
        }
    }

    impl StateAccess for SharedState {
        fn mode(&self) -> PersistenceMode {
            self.0.lock().unwrap().mode()
        }

        fn find(&self, id: &MemoId) -> Option<Memo> {
            self.0.lock().unwrap().find(id).cloned()
        }

        fn apply(&mut self, transition: Transition) -> Vec<Effect> {
            self.0.lock().unwrap().apply(transition)
        }
    }

    async fn offline_harness(stored: &[Memo], confirm: bool) -> Harness {
        let mut h = harness(FakeMemoApi::unreachable(), confirm);
        h.store.save(stored).unwrap();
        h.controller.fetch().await;
        h
    }

    #[tokio::test]
    async fn startup_failure_switches_to_offline_mode_silently() {
        let mut h = harness(FakeMemoApi::unreachable(), true);
        h.store.save(&[memo(7, "saved")]).unwrap();

        h.controller.fetch().await;

        let state = h.controller.state();
        assert!(state.fallback_mode);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.memos, vec![memo(7, "saved")]);
        assert_eq!(h.controller.mode(), PersistenceMode::Fallback);
    }

    #[tokio::test]
    async fn remote_create_prepends_server_memo() {
        let mut h = harness(FakeMemoApi::with_memos(vec![memo(1, "prev")]), true);
        h.controller.fetch().await;

        h.controller.create(MemoDraft::new("T", "C")).await;

        assert_eq!(
            h.controller.state().memos,
            vec![
                Memo {
                    id: MemoId::Number(42),
                    title: "T".to_string(),
                    content: "C".to_string(),
                    created_at: SERVER_TIMESTAMP.to_string(),
                },
                memo(1, "prev"),
            ]
        );
        // Remote mode never touches the offline blob
        assert_eq!(h.store.blob(), None);
    }

    #[tokio::test]
    async fn successive_creates_keep_newest_first() {
        let mut h = offline_harness(&[], true).await;

        for title in ["one", "two", "three"] {
            h.controller.create(MemoDraft::new(title, "body")).await;
            assert_eq!(h.controller.state().memos[0].title, title);
        }
        let stored = h.store.load();
        assert_eq!(stored, h.controller.state().memos);
    }

    #[tokio::test]
    async fn declined_delete_changes_nothing() {
        let mut h = harness(FakeMemoApi::with_memos(vec![memo(1, "keep")]), false);
        h.controller.fetch().await;

        let confirmed = h.controller.delete(&MemoId::Number(1)).await;

        assert!(!confirmed);
        assert_eq!(h.controller.state().memos, vec![memo(1, "keep")]);
        assert_eq!(h.api.calls(), vec!["list".to_string()]);
        assert_eq!(h.prompt.confirms(), vec![DELETE_CONFIRMATION.to_string()]);
    }

    #[tokio::test]
    async fn confirmed_remote_delete_removes_entry() {
        let mut h = harness(
            FakeMemoApi::with_memos(vec![memo(2, "b"), memo(1, "a")]),
            true,
        );
        h.controller.fetch().await;

        assert!(h.controller.delete(&MemoId::Number(1)).await);

        assert_eq!(h.controller.state().memos, vec![memo(2, "b")]);
        assert!(h.api.calls().contains(&"delete 1".to_string()));
    }

    #[tokio::test]
    async fn failed_remote_delete_keeps_entry_and_reports() {
        let mut h = harness(FakeMemoApi::with_memos(vec![memo(1, "a")]), true);
        h.controller.fetch().await;
        h.api.fail_mutations("Request failed with HTTP 500");

        h.controller.delete(&MemoId::Number(1)).await;

        let state = h.controller.state();
        assert_eq!(state.memos, vec![memo(1, "a")]);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to delete memo: Request failed with HTTP 500")
        );
        assert!(!state.fallback_mode);
    }

    #[tokio::test]
    async fn mutation_failure_does_not_switch_modes() {
        let mut h = harness(FakeMemoApi::with_memos(Vec::new()), true);
        h.controller.fetch().await;
        h.api.set_reachable(false);

        h.controller.create(MemoDraft::new("t", "c")).await;

        let state = h.controller.state();
        assert_eq!(state.error.as_deref(), Some("Failed to add memo: Network Error"));
        assert!(!state.fallback_mode);
        assert!(state.memos.is_empty());

        // The next attempt clears the previous message
        h.api.set_reachable(true);
        h.controller.create(MemoDraft::new("t", "c")).await;
        assert_eq!(h.controller.state().error, None);
        assert_eq!(h.controller.state().memos.len(), 1);
    }

    #[tokio::test]
    async fn offline_update_edits_in_place() {
        let mut stored = memo(5, "old");
        stored.content = "keep me".to_string();
        let mut h = offline_harness(&[memo(6, "other"), stored.clone()], true).await;
        h.controller.start_edit(stored.clone());

        h.controller
            .update(&MemoId::Number(5), MemoDraft::new("new", "keep me"))
            .await;

        let state = h.controller.state();
        let updated = state.find(&MemoId::Number(5)).unwrap();
        assert_eq!(updated.title, "new");
        assert_eq!(updated.content, "keep me");
        assert_eq!(updated.created_at, stored.created_at);
        assert_eq!(state.editing_memo, None);
        assert_eq!(state.memos[0], memo(6, "other"));
        assert_eq!(h.store.load(), state.memos);
    }

    #[tokio::test]
    async fn remote_update_uses_server_representation() {
        let mut h = harness(FakeMemoApi::with_memos(vec![memo(5, "old")]), true);
        h.controller.fetch().await;
        h.controller.start_edit(memo(5, "old"));

        h.controller
            .update(&MemoId::Number(5), MemoDraft::new("new", "text"))
            .await;

        let state = h.controller.state();
        assert_eq!(state.memos, h.api.server_memos());
        assert_eq!(state.editing_memo, None);
    }

    #[tokio::test]
    async fn failed_update_keeps_editing() {
        let mut h = harness(FakeMemoApi::with_memos(vec![memo(5, "old")]), true);
        h.controller.fetch().await;
        h.controller.start_edit(memo(5, "old"));
        h.api.fail_mutations("Request failed with HTTP 409");

        h.controller
            .update(&MemoId::Number(5), MemoDraft::new("new", "text"))
            .await;

        let state = h.controller.state();
        assert_eq!(state.editing_memo, Some(memo(5, "old")));
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to update memo: Request failed with HTTP 409")
        );
    }

    #[tokio::test]
    async fn update_of_unknown_memo_is_reported() {
        let mut h = offline_harness(&[memo(1, "a")], true).await;

        h.controller
            .update(&MemoId::Number(99), MemoDraft::new("x", "y"))
            .await;

        let error = h.controller.state().error.clone().unwrap();
        assert!(error.starts_with("Failed to update memo: "));
        assert!(error.contains("99"));
    }

    #[tokio::test]
    async fn offline_delete_persists_without_remote_call() {
        let mut h = offline_harness(&[memo(2, "b"), memo(1, "a")], true).await;

        h.controller.delete(&MemoId::Number(2)).await;

        assert_eq!(h.controller.state().memos, vec![memo(1, "a")]);
        assert_eq!(h.store.load(), vec![memo(1, "a")]);
        assert_eq!(h.api.calls(), vec!["list".to_string()]);
    }

    #[tokio::test]
    async fn retry_reconnects_and_leaves_offline_blob() {
        let mut h = offline_harness(&[memo(1, "offline")], true).await;
        assert!(h.controller.state().fallback_mode);

        h.api.set_reachable(true);
        h.controller.retry_connection().await;

        let state = h.controller.state();
        assert!(!state.fallback_mode);
        assert!(state.memos.is_empty());
        assert_eq!(h.store.load(), vec![memo(1, "offline")]);
    }

    #[tokio::test]
    async fn retry_when_healthy_refreshes_from_server() {
        let mut h = harness(FakeMemoApi::with_memos(vec![memo(1, "a")]), true);
        h.controller.fetch().await;
        let before = h.controller.state().clone();

        h.controller.retry_connection().await;

        assert_eq!(h.controller.state(), &before);
    }

    #[tokio::test]
    async fn empty_title_never_reaches_the_controller() {
        let mut h = harness(FakeMemoApi::with_memos(Vec::new()), true);
        h.controller.fetch().await;

        let mut form = MemoForm::new();
        form.set_title("");
        form.set_content("content");
        let submission = form.submit_with(h.prompt.as_ref());

        assert!(submission.is_none());
        assert_eq!(h.api.calls(), vec!["list".to_string()]);
        assert_eq!(h.prompt.alerts().len(), 1);
    }

    #[tokio::test]
    async fn submit_dispatches_create_and_update() {
        let mut h = harness(FakeMemoApi::with_memos(vec![memo(5, "old")]), true);
        h.controller.fetch().await;

        h.controller
            .submit(Submission::Create(MemoDraft::new("fresh", "body")))
            .await;
        h.controller
            .submit(Submission::Update(
                MemoId::Number(5),
                MemoDraft::new("edited", "body"),
            ))
            .await;

        assert_eq!(
            h.api.calls(),
            vec![
                "list".to_string(),
                "create fresh".to_string(),
                "update 5".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn clones_over_shared_state_agree_on_the_backend() {
        let api = Arc::new(FakeMemoApi::unreachable());
        let store = Arc::new(InMemoryFallbackStore::new());
        store.save(&[memo(1, "saved")]).unwrap();
        let shared = SharedState::default();
        let mut loader = MemoController::with_state(
            shared.clone(),
            Backends::new(api.clone(), store.clone()),
            Arc::new(ScriptedPrompt::answering(true)),
        );
        let mut writer = loader.clone();

        loader.fetch().await;
        assert_eq!(writer.mode(), PersistenceMode::Fallback);
        assert_eq!(writer.backend().mode(), PersistenceMode::Fallback);

        writer.create(MemoDraft::new("fresh", "body")).await;

        let state = shared.snapshot();
        assert_eq!(state.memos.len(), 2);
        assert_eq!(state.memos[0].title, "fresh");
        assert_eq!(store.load(), state.memos);
        assert_eq!(api.calls(), vec!["list".to_string()]);
    }

    #[tokio::test]
    async fn edit_loads_only_known_memos() {
        let mut h = harness(FakeMemoApi::with_memos(vec![memo(5, "old")]), true);
        h.controller.fetch().await;

        assert!(!h.controller.edit(&MemoId::Number(99)));
        assert_eq!(h.controller.state().editing_memo, None);

        assert!(h.controller.edit(&MemoId::Number(5)));
        assert_eq!(h.controller.state().editing_memo, Some(memo(5, "old")));

        h.controller.cancel_edit();
        assert_eq!(h.controller.state().editing_memo, None);
    }

    #[tokio::test]
    async fn delete_confirmed_skips_the_prompt() {
        let mut h = harness(FakeMemoApi::with_memos(vec![memo(1, "a")]), false);
        h.controller.fetch().await;

        assert!(!h.controller.confirm_delete());
        h.controller.delete_confirmed(&MemoId::Number(1)).await;

        assert!(h.controller.state().memos.is_empty());
        assert_eq!(h.prompt.confirms().len(), 1);
        assert_eq!(
            h.api.calls(),
            vec!["list".to_string(), "delete 1".to_string()]
        );
    }
}
