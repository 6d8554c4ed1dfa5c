//! Application services
//!
//! Platform integrations used by the desktop shell.

mod prompt;

pub use prompt::NativePrompt;
