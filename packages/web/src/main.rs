use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Login, Tasks};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Stylesheet { href: MAIN_CSS }
        document::Stylesheet { href: ui::COMPONENTS_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// `/` is the task list, but only for signed-in users.
#[component]
fn Home() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    if session().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Tasks {}
    }
}
