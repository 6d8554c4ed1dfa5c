//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use memo_core::backend::Backends;
use memo_core::state::AppState;

use crate::services::NativePrompt;
use crate::state::MemoContext;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // Injected by the launcher
    let backends = use_context::<Backends>();
    let state = use_signal(AppState::new);
    let mut initialized = use_signal(|| false);

    let context = use_context_provider(|| {
        MemoContext::new(state, backends, Arc::new(NativePrompt))
    });

    // Initial fetch (only once)
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true);
        context.fetch();
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: #f3f4f6;
                color: #1f2937;
            ",
            Home {}
        }
    }
}
