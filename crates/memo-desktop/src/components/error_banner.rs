//! Error banner component

use dioxus::prelude::*;

/// Message of the last failed memo operation
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "error-banner",
            style: "
                margin-bottom: 16px;
                padding: 16px;
                background: #fee2e2;
                border: 1px solid #f87171;
                border-radius: 6px;
                color: #b91c1c;
            ",
            "{message}"
        }
    }
}
