//! Sign-in and sign-up view.

use dioxus::prelude::*;

use ui::icons::{FaMoon, FaSun};
use ui::{toggle_theme, use_session, Icon};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut signing_up = use_signal(|| false);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in, go straight to the list
    if session().user.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let client = ui::make_client(None);
            let result = if signing_up() {
                client.register(&username(), &email(), &password()).await
            } else {
                client.login(&email(), &password()).await
            };

            match result {
                Ok(auth) => {
                    ui::login(session, auth.token, auth.user);
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let dark = session().dark_mode;

    rsx! {
        div {
            class: if dark { "auth-container dark" } else { "auth-container" },

            div {
                class: "theme-toggle-auth",
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
            }

            div {
                class: "auth-card",

                div {
                    class: "auth-header",
                    span { class: "logo-icon", "\u{2728}" }
                    h1 { "TaskWise" }
                    p { "Advanced task management" }
                }

                div {
                    class: "auth-tabs",
                    button {
                        class: if !signing_up() { "active" } else { "" },
                        onclick: move |_| signing_up.set(false),
                        "Sign In"
                    }
                    button {
                        class: if signing_up() { "active" } else { "" },
                        onclick: move |_| signing_up.set(true),
                        "Create Account"
                    }
                }

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if signing_up() {
                        input {
                            r#type: "text",
                            placeholder: "Full Name",
                            value: username(),
                            required: true,
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email Address",
                        value: email(),
                        required: true,
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        required: true,
                        minlength: "6",
                        oninput: move |evt| password.set(evt.value()),
                    }

                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Processing..."
                        } else if signing_up() {
                            "Create Account"
                        } else {
                            "Sign In"
                        }
                    }
                }

                div {
                    class: "auth-footer",
                    p { "Connect Now" }
                }
            }
        }
    }
}
