//! Memo list component

use dioxus::prelude::*;

use memo_core::presentation::{list_view, MemoListView, EMPTY_PLACEHOLDER, LOADING_MESSAGE};
use memo_core::MemoId;

use super::MemoItem;
use crate::state::MemoContext;

const PANEL_STYLE: &str = "
    background: white;
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    padding: 32px;
    text-align: center;
    color: #6b7280;
";

/// List of memos, newest first
#[component]
pub fn MemoList() -> Element {
    let context = use_context::<MemoContext>();
    let view = list_view(&context.state.read());

    match view {
        MemoListView::Loading => rsx! {
            div { style: PANEL_STYLE, "{LOADING_MESSAGE}" }
        },
        MemoListView::Empty => rsx! {
            div { style: PANEL_STYLE, "{EMPTY_PLACEHOLDER}" }
        },
        MemoListView::Items(items) => rsx! {
            div {
                class: "memo-list",
                style: "display: flex; flex-direction: column; gap: 16px;",

                for item in items {
                    {
                        let memo_key = item.id.to_string();
                        let edit_context = context.clone();
                        let delete_context = context.clone();

                        rsx! {
                            MemoItem {
                                key: "{memo_key}",
                                item,
                                onedit: move |id: MemoId| edit_context.edit(&id),
                                ondelete: move |id: MemoId| delete_context.delete(id),
                            }
                        }
                    }
                }
            }
        },
    }
}
