use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

/// Dismissible banner for surfacing a request failure above the task list.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "error-banner",
            span { "{message}" }
            button {
                class: "dismiss-btn",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                Icon { width: 14, height: 14, fill: "currentColor", icon: FaXmark }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The icon component must share the workspace's dioxus-core; a version
    // split fails this test at compile time.
    #[test]
    fn test_banner_renders_with_dismiss_icon() {
        fn app() -> Element {
            rsx! {
                ErrorBanner { message: "Request failed", on_dismiss: move |_| {} }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }
}
