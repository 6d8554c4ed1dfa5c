//! Home view - main application screen

use dioxus::prelude::*;

use memo_core::presentation::list_header;

use crate::components::{ErrorBanner, MemoForm, MemoList, OfflineBanner};
use crate::state::MemoContext;

/// Home view component - header, form, and memo list
#[component]
pub fn Home() -> Element {
    let context = use_context::<MemoContext>();
    let (header, fallback_mode, error) = {
        let state = context.state.read();
        (
            list_header(state.memos.len()),
            state.fallback_mode,
            state.error.clone(),
        )
    };

    rsx! {
        div {
            class: "home-container",
            style: "max-width: 896px; margin: 0 auto; padding: 32px 16px;",

            header {
                style: "margin-bottom: 32px;",
                h1 {
                    style: "font-size: 36px; font-weight: bold; margin: 0 0 8px 0;",
                    "Memo Pad"
                }
                if fallback_mode {
                    OfflineBanner {}
                }
            }

            if let Some(message) = error {
                ErrorBanner { message }
            }

            div {
                style: "margin-bottom: 32px;",
                MemoForm {}
            }

            div {
                h2 {
                    style: "font-size: 24px; font-weight: 600; margin: 0 0 16px 0;",
                    "{header}"
                }
                MemoList {}
            }
        }
    }
}
