//! User prompts.
//!
//! Confirmation and alert dialogs are injected so flows can run headless.

/// Question asked before a memo is deleted.
pub const DELETE_CONFIRMATION: &str = "Delete this memo?";

/// Alert shown when the form is submitted with an empty field.
pub const FORM_INCOMPLETE: &str = "Please enter both a title and content.";

/// Blocking dialogs offered by the host UI.
pub trait Prompt: Send + Sync {
    /// Ask a yes/no question. Returns `true` if the user agreed.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to acknowledge.
    fn alert(&self, message: &str);
}
