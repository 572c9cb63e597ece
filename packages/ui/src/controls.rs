use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaPlus};
use dioxus_free_icons::Icon;
use tasks::{Category, Filter, SortKey};

/// The bar above the list: search box, filter and sort selects, add button.
///
/// All state lives in the parent; this component only reports changes.
#[component]
pub fn TaskControls(
    search: String,
    filter: Filter,
    sort: SortKey,
    on_search: EventHandler<String>,
    on_filter: EventHandler<Filter>,
    on_sort: EventHandler<SortKey>,
    on_add: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "controls",

            div {
                class: "search-box",
                Icon {
                    class: "search-icon",
                    width: 14,
                    height: 14,
                    fill: "currentColor",
                    icon: FaMagnifyingGlass,
                }
                input {
                    r#type: "text",
                    placeholder: "Search tasks...",
                    value: search,
                    oninput: move |evt| on_search.call(evt.value()),
                }
            }

            select {
                class: "filter-select",
                value: filter.value(),
                onchange: move |evt| on_filter.call(Filter::from_value(&evt.value())),
                option { value: "all", "All Tasks" }
                option { value: "pending", "Active" }
                option { value: "completed", "Completed" }
                for category in Category::ALL {
                    option { value: category.as_str(), "{category.label()}" }
                }
            }

            select {
                class: "sort-select",
                value: sort.value(),
                onchange: move |evt| on_sort.call(SortKey::from_value(&evt.value())),
                option { value: "date", "Sort by Date" }
                option { value: "priority", "Sort by Priority" }
                option { value: "name", "Sort by Name" }
            }

            button {
                class: "add-task-btn",
                onclick: move |_| on_add.call(()),
                Icon { width: 14, height: 14, fill: "currentColor", icon: FaPlus }
                span { "Add Task" }
            }
        }
    }
}
