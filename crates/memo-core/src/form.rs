//! Memo form model.
//!
//! Holds the title/content draft, follows the memo selected for editing, and
//! validates submissions before anything reaches the controller.

use crate::error::{Error, Result};
use crate::models::{Memo, MemoDraft, MemoId};
use crate::prompt::{Prompt, FORM_INCOMPLETE};
use crate::util::is_blank;

/// An accepted form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create(MemoDraft),
    Update(MemoId, MemoDraft),
}

/// State of the memo form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoForm {
    title: String,
    content: String,
    edit_target: Option<MemoId>,
}

impl MemoForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub const fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Label of the submit button
    pub const fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Add"
        }
    }

    /// Follow the memo selected for editing.
    ///
    /// Fields are reset only when the target's identity changes: a new target
    /// pre-populates them, no target clears them.
    pub fn sync_edit_target(&mut self, target: Option<&Memo>) {
        let target_id = target.map(|memo| memo.id.clone());
        if target_id == self.edit_target {
            return;
        }

        if let Some(memo) = target {
            self.title.clone_from(&memo.title);
            self.content.clone_from(&memo.content);
        } else {
            self.title.clear();
            self.content.clear();
        }
        self.edit_target = target_id;
    }

    /// Validate and take the draft.
    ///
    /// On success the fields are cleared, also in edit mode; the edit target
    /// stays until the caller syncs a new one.
    pub fn submit(&mut self) -> Result<Submission> {
        if is_blank(&self.title) || is_blank(&self.content) {
            return Err(Error::Validation(FORM_INCOMPLETE.to_string()));
        }

        let draft = MemoDraft {
            title: std::mem::take(&mut self.title),
            content: std::mem::take(&mut self.content),
        };
        Ok(match &self.edit_target {
            Some(id) => Submission::Update(id.clone(), draft),
            None => Submission::Create(draft),
        })
    }

    /// Like [`Self::submit`], but a rejected submission is shown as an alert.
    pub fn submit_with(&mut self, prompt: &dyn Prompt) -> Option<Submission> {
        match self.submit() {
            Ok(submission) => Some(submission),
            Err(_) => {
                prompt.alert(FORM_INCOMPLETE);
                None
            }
        }
    }
}
