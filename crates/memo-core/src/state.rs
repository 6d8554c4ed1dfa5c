//! Application state and its transitions.
//!
//! [`AppState::apply`] is pure: it updates the state for one [`Transition`]
//! and returns the side effects the caller has to run afterwards.

use crate::backend::{LoadOutcome, PersistenceMode};
use crate::models::{Memo, MemoId};

/// The mutation a failure message refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Fixed prefix shown in front of the underlying failure message.
    pub const fn error_prefix(self) -> &'static str {
        match self {
            Self::Create => "Failed to add memo: ",
            Self::Update => "Failed to update memo: ",
            Self::Delete => "Failed to delete memo: ",
        }
    }
}

/// Everything that can happen to the application state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A fetch (initial load or reconnect) began
    LoadStarted,
    /// A fetch finished, from either backend
    Loaded(LoadOutcome),
    /// A create/update/delete is about to run
    MutationStarted,
    Created(Memo),
    Updated(Memo),
    Deleted(MemoId),
    MutationFailed {
        operation: Operation,
        message: String,
    },
    EditStarted(Memo),
    EditCancelled,
}

/// Side effects requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the offline blob with this collection
    PersistOffline(Vec<Memo>),
}

/// State of the memo client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    /// Memo collection, most recently created first
    pub memos: Vec<Memo>,
    /// Memo currently loaded into the form for editing
    pub editing_memo: Option<Memo>,
    pub loading: bool,
    /// Message of the last failed mutation
    pub error: Option<String>,
    /// Whether the offline store is serving the collection
    pub fallback_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            memos: Vec::new(),
            editing_memo: None,
            loading: true,
            error: None,
            fallback_mode: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn mode(&self) -> PersistenceMode {
        if self.fallback_mode {
            PersistenceMode::Fallback
        } else {
            PersistenceMode::Remote
        }
    }

    /// Find a memo in the collection by id
    pub fn find(&self, id: &MemoId) -> Option<&Memo> {
        self.memos.iter().find(|memo| &memo.id == id)
    }

    /// Apply a transition, returning the effects to run.
    pub fn apply(&mut self, transition: Transition) -> Vec<Effect> {
        match transition {
            Transition::LoadStarted => {
                self.loading = true;
                self.error = None;
                Vec::new()
            }
            Transition::Loaded(outcome) => {
                self.fallback_mode = outcome.mode == PersistenceMode::Fallback;
                self.memos = outcome.memos;
                self.loading = false;
                self.persist_if_offline()
            }
            Transition::MutationStarted => {
                self.error = None;
                Vec::new()
            }
            Transition::Created(memo) => {
                self.memos.insert(0, memo);
                self.persist_if_offline()
            }
            Transition::Updated(updated) => {
                for memo in &mut self.memos {
                    if memo.id == updated.id {
                        *memo = updated.clone();
                    }
                }
                self.editing_memo = None;
                self.persist_if_offline()
            }
            Transition::Deleted(id) => {
                self.memos.retain(|memo| memo.id != id);
                self.persist_if_offline()
            }
            Transition::MutationFailed { operation, message } => {
                self.error = Some(format!("{}{message}", operation.error_prefix()));
                Vec::new()
            }
            Transition::EditStarted(memo) => {
                self.editing_memo = Some(memo);
                Vec::new()
            }
            Transition::EditCancelled => {
                self.editing_memo = None;
                Vec::new()
            }
        }
    }

    fn persist_if_offline(&self) -> Vec<Effect> {
        if self.fallback_mode {
            vec![Effect::PersistOffline(self.memos.clone())]
        } else {
            Vec::new()
        }
    }
}
