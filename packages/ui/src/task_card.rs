use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaPen, FaTrash};
use dioxus_free_icons::Icon;
use tasks::{Category, Priority, Task, TaskPatch};

/// One task in the list. Shows the record, or an inline title/description
/// editor when `editing` is set. The editor keeps its own draft; a failed
/// save leaves it open with the user's text intact.
#[component]
pub fn TaskCard(
    task: Task,
    editing: bool,
    on_toggle: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_save: EventHandler<(String, TaskPatch)>,
    on_cancel: EventHandler<()>,
    on_delete: EventHandler<String>,
) -> Element {
    let color = priority_color(task.priority);
    let card_class = if task.completed {
        "task-card completed"
    } else {
        "task-card"
    };

    rsx! {
        div {
            class: card_class,
            style: "border-left-color: {color};",

            if editing {
                EditFields { task: task.clone(), on_save, on_cancel }
            } else {
                TaskDisplay { task, on_toggle, on_edit, on_delete }
            }
        }
    }
}

#[component]
fn TaskDisplay(
    task: Task,
    on_toggle: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let emoji = category_emoji(task.category);
    let date = task.created_at.format("%-m/%-d/%Y").to_string();
    let priority_style = format!("color: {};", priority_color(task.priority));

    rsx! {
        div {
            class: "task-main",

            button {
                class: if task.completed { "toggle-btn checked" } else { "toggle-btn" },
                onclick: {
                    let id = task.id.clone();
                    move |_| on_toggle.call(id.clone())
                },
                if task.completed {
                    Icon { width: 12, height: 12, fill: "currentColor", icon: FaCheck }
                }
            }

            div {
                class: "task-body",
                h3 { class: "task-title", "{task.title}" }
                if !task.description.is_empty() {
                    p { class: "task-description", "{task.description}" }
                }
                div {
                    class: "task-meta",
                    span { class: "category-badge", "{emoji} {task.category.label()}" }
                    span {
                        class: "priority-badge",
                        style: priority_style,
                        "{task.priority.label()}"
                    }
                    span { class: "task-date", "{date}" }
                }
            }

            div {
                class: "task-actions",
                button {
                    class: "action-btn",
                    title: "Edit",
                    onclick: {
                        let id = task.id.clone();
                        move |_| on_edit.call(id.clone())
                    },
                    Icon { width: 13, height: 13, fill: "currentColor", icon: FaPen }
                }
                button {
                    class: "action-btn danger",
                    title: "Delete",
                    onclick: {
                        let id = task.id.clone();
                        move |_| on_delete.call(id.clone())
                    },
                    Icon { width: 13, height: 13, fill: "currentColor", icon: FaTrash }
                }
            }
        }
    }
}

#[component]
fn EditFields(
    task: Task,
    on_save: EventHandler<(String, TaskPatch)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(|| task.title.clone());
    let mut description = use_signal(|| task.description.clone());

    let id = task.id.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let patch = TaskPatch {
            title: Some(title()),
            description: Some(description()),
            ..TaskPatch::default()
        };
        on_save.call((id.clone(), patch));
    };

    rsx! {
        form {
            class: "task-edit",
            onsubmit: handle_save,

            input {
                r#type: "text",
                value: title(),
                oninput: move |evt| title.set(evt.value()),
            }
            textarea {
                value: description(),
                oninput: move |evt| description.set(evt.value()),
            }
            div {
                class: "form-actions",
                button { class: "primary", r#type: "submit", "Save" }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

/// Accent colour for the card's left border and the priority badge.
fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "#ff4757",
        Priority::Medium => "#ffa726",
        Priority::Low => "#66bb6a",
    }
}

fn category_emoji(category: Category) -> &'static str {
    match category {
        Category::Personal => "\u{1F464}",
        Category::Work => "\u{1F4BC}",
        Category::Learning => "\u{1F4DA}",
        Category::Health => "\u{1F3C3}",
        Category::Finance => "\u{1F4B0}",
    }
}
