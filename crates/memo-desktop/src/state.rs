//! Application state management
//!
//! The memo state lives in a signal shared through a Dioxus context provider.
//! Intents spawn a task that runs a clone of the shared controller; every
//! clone reads and writes the same signal.

use std::sync::Arc;

use dioxus::prelude::*;

use memo_core::backend::{Backends, PersistenceMode};
use memo_core::controller::{MemoController, StateAccess};
use memo_core::form::Submission;
use memo_core::prompt::Prompt;
use memo_core::state::{AppState, Effect, Transition};
use memo_core::{Memo, MemoId};

/// [`AppState`] held in a signal.
#[derive(Clone, Copy)]
pub struct SignalState(Signal<AppState>);

impl StateAccess for SignalState {
    fn mode(&self) -> PersistenceMode {
        self.0.read().mode()
    }

    fn find(&self, id: &MemoId) -> Option<Memo> {
        self.0.read().find(id).cloned()
    }

    fn apply(&mut self, transition: Transition) -> Vec<Effect> {
        self.0.write().apply(transition)
    }
}

/// Global application context
#[derive(Clone)]
pub struct MemoContext {
    /// Memo collection, edit target, loading flag, error, and offline flag
    pub state: Signal<AppState>,
    pub prompt: Arc<dyn Prompt>,
    controller: MemoController<SignalState>,
}

impl MemoContext {
    pub fn new(state: Signal<AppState>, backends: Backends, prompt: Arc<dyn Prompt>) -> Self {
        let controller = MemoController::with_state(SignalState(state), backends, prompt.clone());
        Self {
            state,
            prompt,
            controller,
        }
    }

    /// Load memos from the service, or from offline storage if it is down.
    pub fn fetch(&self) {
        let mut controller = self.controller.clone();
        spawn(async move { controller.fetch().await });
    }

    pub fn retry_connection(&self) {
        let mut controller = self.controller.clone();
        spawn(async move { controller.retry_connection().await });
    }

    pub fn submit(&self, submission: Submission) {
        let mut controller = self.controller.clone();
        spawn(async move { controller.submit(submission).await });
    }

    /// Ask for confirmation, then delete the memo.
    pub fn delete(&self, id: MemoId) {
        if !self.controller.confirm_delete() {
            return;
        }
        let mut controller = self.controller.clone();
        spawn(async move { controller.delete_confirmed(&id).await });
    }

    /// Load the memo with this id into the form.
    pub fn edit(&self, id: &MemoId) {
        self.controller.clone().edit(id);
    }

    pub fn cancel_edit(&self) {
        self.controller.clone().cancel_edit();
    }
}
