use dioxus::prelude::*;
use tasks::{Category, Priority, TaskDraft};

/// The add-task form. Owns its fields; the parent decides when it closes,
/// so a failed create keeps what the user typed.
#[component]
pub fn TaskForm(busy: bool, on_submit: EventHandler<TaskDraft>, on_cancel: EventHandler<()>) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(|| Category::Personal);
    let mut priority = use_signal(|| Priority::Medium);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(TaskDraft {
            title: title(),
            description: description(),
            category: category(),
            priority: priority(),
        });
    };

    rsx! {
        form {
            class: "task-form",
            onsubmit: handle_submit,

            div {
                class: "form-field",
                input {
                    r#type: "text",
                    placeholder: "What needs to be done?",
                    value: title(),
                    required: true,
                    oninput: move |evt| title.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                textarea {
                    placeholder: "Add a description...",
                    rows: "3",
                    value: description(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }

            div {
                class: "form-row",
                select {
                    value: category().as_str(),
                    onchange: move |evt| {
                        if let Some(picked) = Category::from_value(&evt.value()) {
                            category.set(picked);
                        }
                    },
                    for choice in Category::ALL {
                        option { value: choice.as_str(), "{choice.label()}" }
                    }
                }
                select {
                    value: priority().as_str(),
                    onchange: move |evt| {
                        if let Some(picked) = Priority::from_value(&evt.value()) {
                            priority.set(picked);
                        }
                    },
                    for choice in Priority::ALL {
                        option { value: choice.as_str(), "{choice.label()} Priority" }
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Adding..." } else { "Add Task" }
                }
            }
        }
    }
}
