//! Memo form component

use dioxus::prelude::*;

use memo_core::form::MemoForm as FormModel;

use crate::state::MemoContext;

const FIELD_STYLE: &str = "
    width: 100%;
    box-sizing: border-box;
    padding: 8px 16px;
    border: 1px solid #d1d5db;
    border-radius: 8px;
    font-family: inherit;
    font-size: 14px;
";

/// Title/content form that creates memos, or updates the memo being edited
#[component]
pub fn MemoForm() -> Element {
    let context = use_context::<MemoContext>();
    let mut form = use_signal(FormModel::new);
    let app_state = context.state;

    // Follow the edit target; only an identity change resets the fields
    use_effect(move || {
        let target = app_state.read().editing_memo.clone();
        form.write().sync_edit_target(target.as_ref());
    });

    let (title, content, is_editing, submit_label) = {
        let current = form.read();
        (
            current.title().to_string(),
            current.content().to_string(),
            current.is_editing(),
            current.submit_label(),
        )
    };

    let submit_context = context.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submission = form.write().submit_with(submit_context.prompt.as_ref());
        if let Some(submission) = submission {
            submit_context.submit(submission);
        }
    };

    let cancel_context = context.clone();
    let cancel = move |_| cancel_context.cancel_edit();

    rsx! {
        form {
            class: "memo-form",
            style: "
                background: white;
                border-radius: 8px;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                padding: 24px;
            ",
            onsubmit: handle_submit,

            div {
                style: "margin-bottom: 16px;",
                label {
                    r#for: "title",
                    style: "display: block; font-weight: 600; margin-bottom: 8px;",
                    "Title"
                }
                input {
                    id: "title",
                    r#type: "text",
                    style: FIELD_STYLE,
                    value: "{title}",
                    placeholder: "Enter a title...",
                    oninput: move |evt| form.write().set_title(evt.value()),
                }
            }

            div {
                style: "margin-bottom: 16px;",
                label {
                    r#for: "content",
                    style: "display: block; font-weight: 600; margin-bottom: 8px;",
                    "Content"
                }
                textarea {
                    id: "content",
                    rows: "6",
                    style: "{FIELD_STYLE} resize: none;",
                    value: "{content}",
                    placeholder: "Write your memo...",
                    oninput: move |evt| form.write().set_content(evt.value()),
                }
            }

            div {
                style: "display: flex; gap: 8px;",
                button {
                    r#type: "submit",
                    style: "
                        flex: 1;
                        padding: 8px 16px;
                        background: #3b82f6;
                        color: white;
                        font-weight: 600;
                        border: none;
                        border-radius: 8px;
                        cursor: pointer;
                    ",
                    "{submit_label}"
                }
                if is_editing {
                    button {
                        r#type: "button",
                        style: "
                            flex: 1;
                            padding: 8px 16px;
                            background: #6b7280;
                            color: white;
                            font-weight: 600;
                            border: none;
                            border-radius: 8px;
                            cursor: pointer;
                        ",
                        onclick: cancel,
                        "Cancel"
                    }
                }
            }
        }
    }
}
