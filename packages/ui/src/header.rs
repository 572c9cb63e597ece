use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaRightFromBracket, FaSun};
use dioxus_free_icons::Icon;
use tasks::Stats;

use crate::session::{logout, toggle_theme, use_session};

#[component]
pub fn AppHeader(stats: Stats, on_toggle_stats: EventHandler<()>) -> Element {
    let session = use_session();
    let dark = session().dark_mode;
    let username = session()
        .user
        .map(|u| u.username)
        .unwrap_or_default();

    rsx! {
        header {
            class: "app-header",

            div {
                class: "header-left",
                span { class: "logo-icon", "\u{2728}" }
                h1 { class: "logo-text", "TaskWise" }
            }

            div {
                class: "header-stats",
                button {
                    class: "stat-chip",
                    onclick: move |_| on_toggle_stats.call(()),
                    span { class: "stat-chip-value", "{stats.pending}" }
                    span { class: "stat-chip-label", "Active" }
                }
                button {
                    class: "stat-chip",
                    onclick: move |_| on_toggle_stats.call(()),
                    span { class: "stat-chip-value", "{stats.completed}" }
                    span { class: "stat-chip-label", "Done" }
                }
            }

            div {
                class: "header-right",
                button {
                    class: "theme-toggle",
                    title: if dark { "Switch to light mode" } else { "Switch to dark mode" },
                    onclick: move |_| toggle_theme(session),
                    if dark {
                        Icon { width: 16, height: 16, fill: "currentColor", icon: FaSun }
                    } else {
                        Icon { width: 16, height: 16, fill: "currentColor", icon: FaMoon }
                    }
                }
                div {
                    class: "user-menu",
                    span { class: "user-name", "{username}" }
                    button {
                        class: "logout-btn",
                        onclick: move |_| logout(session),
                        Icon { width: 14, height: 14, fill: "currentColor", icon: FaRightFromBracket }
                        span { "Sign Out" }
                    }
                }
            }
        }
    }
}
