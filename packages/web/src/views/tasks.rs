use dioxus::prelude::*;

use tasks::{visible_tasks, Filter, SortKey, Stats, Task, TaskDraft, TaskPatch, TaskQuery};
use ui::{use_session, AppHeader, ErrorBanner, StatsPanel, TaskCard, TaskControls, TaskForm};

const TASKS_CSS: Asset = asset!("/assets/tasks.css");

#[component]
pub fn Tasks() -> Element {
    let session = use_session();

    let mut all_tasks = use_signal(Vec::<Task>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut search = use_signal(String::new);
    let mut filter = use_signal(|| Filter::All);
    let mut sort = use_signal(|| SortKey::Date);
    let mut show_add_form = use_signal(|| false);
    let mut show_stats = use_signal(|| false);
    let mut editing = use_signal(|| Option::<String>::None);

    // Load the list on mount. `peek` keeps the loader from re-running when
    // the session signal changes, e.g. on a theme toggle.
    let _loader = use_resource(move || async move {
        let manager = ui::make_manager(session.peek().token.clone());
        match manager.load().await {
            Ok(list) => all_tasks.set(list),
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    });

    // Everything below the controls renders from this projection; the full
    // list stays untouched in `all_tasks`.
    let visible = use_memo(move || {
        let query = TaskQuery {
            search: search(),
            filter: filter(),
            sort: sort(),
        };
        visible_tasks(&all_tasks(), &query)
    });
    let stats = use_memo(move || Stats::from_tasks(&all_tasks()));

    // Creation shares the loading flag with the initial fetch, so the list
    // swaps back to the spinner while the new task is in flight.
    let handle_create = move |draft: TaskDraft| {
        spawn(async move {
            loading.set(true);
            let manager = ui::make_manager(session.peek().token.clone());
            match manager.create(&all_tasks(), &draft).await {
                Ok(next) => {
                    all_tasks.set(next);
                    show_add_form.set(false);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    let handle_toggle = move |id: String| {
        spawn(async move {
            let manager = ui::make_manager(session.peek().token.clone());
            match manager.toggle(&all_tasks(), &id).await {
                Ok(next) => all_tasks.set(next),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_save = move |(id, patch): (String, TaskPatch)| {
        spawn(async move {
            let manager = ui::make_manager(session.peek().token.clone());
            match manager.update(&all_tasks(), &id, &patch).await {
                Ok(next) => {
                    all_tasks.set(next);
                    editing.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            let manager = ui::make_manager(session.peek().token.clone());
            match manager.delete(&all_tasks(), &id).await {
                Ok(next) => all_tasks.set(next),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let is_empty = visible().is_empty();
    let unfiltered = search().is_empty() && filter() == Filter::All;

    rsx! {
        document::Stylesheet { href: TASKS_CSS }

        div {
            class: if session().dark_mode { "app dark" } else { "app" },

            AppHeader {
                stats: stats(),
                on_toggle_stats: move |_| show_stats.set(!show_stats()),
            }

            if show_stats() {
                StatsPanel { stats: stats() }
            }

            TaskControls {
                search: search(),
                filter: filter(),
                sort: sort(),
                on_search: move |value| search.set(value),
                on_filter: move |value| filter.set(value),
                on_sort: move |value| sort.set(value),
                on_add: move |_| show_add_form.set(!show_add_form()),
            }

            if let Some(message) = error() {
                ErrorBanner {
                    message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            if show_add_form() {
                TaskForm {
                    busy: loading(),
                    on_submit: handle_create,
                    on_cancel: move |_| show_add_form.set(false),
                }
            }

            div {
                class: "task-list",

                if loading() {
                    div {
                        class: "loading-state",
                        div { class: "spinner" }
                        p { "Loading tasks..." }
                    }
                } else if is_empty {
                    div {
                        class: "empty-state",
                        span { class: "empty-icon", "\u{1F4DD}" }
                        h3 { "No tasks found" }
                        p {
                            if unfiltered {
                                "Create your first task to get started"
                            } else {
                                "Try adjusting your search or filter"
                            }
                        }
                    }
                } else {
                    for task in visible() {
                        TaskCard {
                            key: "{task.id}",
                            editing: editing().as_deref() == Some(task.id.as_str()),
                            on_toggle: handle_toggle,
                            on_edit: move |id| editing.set(Some(id)),
                            on_save: handle_save,
                            on_cancel: move |_| editing.set(None),
                            on_delete: handle_delete,
                            task: task.clone(),
                        }
                    }
                }
            }
        }
    }
}
