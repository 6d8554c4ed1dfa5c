//! Offline indicator with a reconnect action

use dioxus::prelude::*;

use memo_core::presentation::{OFFLINE_NOTICE, RECONNECT_LABEL};

use crate::state::MemoContext;

#[component]
pub fn OfflineBanner() -> Element {
    let context = use_context::<MemoContext>();

    rsx! {
        div {
            class: "offline-banner",
            style: "
                margin-top: 8px;
                padding: 8px;
                display: flex;
                align-items: center;
                justify-content: space-between;
                background: #fef9c3;
                border: 1px solid #facc15;
                border-radius: 6px;
                color: #a16207;
                font-size: 14px;
            ",
            span { "{OFFLINE_NOTICE}" }
            button {
                style: "
                    margin-left: 8px;
                    padding: 4px 8px;
                    background: #eab308;
                    color: white;
                    border: none;
                    border-radius: 4px;
                    font-size: 12px;
                    cursor: pointer;
                ",
                onclick: move |_| context.retry_connection(),
                "{RECONNECT_LABEL}"
            }
        }
    }
}
