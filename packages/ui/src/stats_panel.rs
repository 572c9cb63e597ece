use dioxus::prelude::*;
use tasks::Stats;

/// Collapsible overview of the whole collection, shown above the controls.
#[component]
pub fn StatsPanel(stats: Stats) -> Element {
    rsx! {
        div {
            class: "stats-panel",
            StatCard { icon: "\u{1F4CA}", value: stats.total, label: "Total Tasks" }
            StatCard { icon: "\u{23F3}", value: stats.pending, label: "In Progress" }
            StatCard { icon: "\u{2705}", value: stats.completed, label: "Completed" }
            StatCard { icon: "\u{1F525}", value: stats.high_priority, label: "High Priority" }
        }
    }
}

#[component]
fn StatCard(icon: String, value: usize, label: String) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-card-icon", "{icon}" }
            div {
                class: "stat-card-body",
                span { class: "stat-card-value", "{value}" }
                span { class: "stat-card-label", "{label}" }
            }
        }
    }
}
