//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const COMPONENTS_CSS: Asset = asset!("/assets/components.css");

mod session;
pub use session::{login, logout, toggle_theme, use_session, SessionProvider, SessionState};

mod client;
pub use client::{make_client, make_manager};

mod header;
pub use header::AppHeader;

mod stats_panel;
pub use stats_panel::StatsPanel;

mod controls;
pub use controls::TaskControls;

mod task_form;
pub use task_form::TaskForm;

mod task_card;
pub use task_card::TaskCard;

mod error_banner;
pub use error_banner::ErrorBanner;
