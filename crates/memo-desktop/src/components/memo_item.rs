//! Memo item component

use dioxus::prelude::*;

use memo_core::presentation::MemoItemView;
use memo_core::MemoId;

/// A single memo card with edit and delete actions.
#[component]
pub fn MemoItem(
    item: MemoItemView,
    onedit: EventHandler<MemoId>,
    ondelete: EventHandler<MemoId>,
) -> Element {
    let edit_id = item.id.clone();
    let delete_id = item.id.clone();

    rsx! {
        div {
            class: "memo-item",
            style: "
                background: white;
                border-radius: 8px;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                padding: 24px;
            ",

            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 12px;",
                h3 {
                    style: "font-size: 20px; font-weight: 600; margin: 0;",
                    "{item.title}"
                }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: "background: none; border: none; color: #3b82f6; font-weight: 500; cursor: pointer;",
                        onclick: move |_| onedit.call(edit_id.clone()),
                        "Edit"
                    }
                    button {
                        style: "background: none; border: none; color: #ef4444; font-weight: 500; cursor: pointer;",
                        onclick: move |_| ondelete.call(delete_id.clone()),
                        "Delete"
                    }
                }
            }

            p {
                style: "white-space: pre-wrap; margin: 0 0 12px 0;",
                "{item.content}"
            }

            div {
                style: "font-size: 14px; color: #6b7280;",
                "Created: {item.created_label}"
            }
        }
    }
}
