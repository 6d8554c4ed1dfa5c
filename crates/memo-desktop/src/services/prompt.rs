//! Native dialogs for confirmations and alerts.

use memo_core::prompt::Prompt;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

const DIALOG_TITLE: &str = "Memo Pad";

/// [`Prompt`] backed by the platform's message dialogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePrompt;

impl Prompt for NativePrompt {
    fn confirm(&self, message: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(DIALOG_TITLE)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();
        result == MessageDialogResult::Yes
    }

    fn alert(&self, message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(DIALOG_TITLE)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
