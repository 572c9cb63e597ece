//! Session context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;
use store::{Session, SessionStore};

/// Session state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub token: Option<String>,
    /// Whether the dark theme is active. In-memory only; every visit starts dark.
    pub dark_mode: bool,
}

impl SessionState {
    /// Rehydrate from durable storage. Missing or partial data means signed
    /// out. Runs synchronously, so the first route render already knows who
    /// is signed in.
    pub fn restored() -> Self {
        match session_store().load::<UserInfo>() {
            Some(Session { token, user }) => Self {
                user: Some(user),
                token: Some(token),
                dark_mode: true,
            },
            None => Self {
                user: None,
                token: None,
                dark_mode: true,
            },
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
/// Wrap the app with this once, above the router.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::restored);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Persist a fresh sign-in and update the context.
pub fn login(mut session: Signal<SessionState>, token: String, user: UserInfo) {
    session_store().save(&Session {
        token: token.clone(),
        user: user.clone(),
    });
    tracing::info!(username = %user.username, "signed in");
    let dark_mode = session.peek().dark_mode;
    session.set(SessionState {
        user: Some(user),
        token: Some(token),
        dark_mode,
    });
}

/// Clear the stored session and the context.
pub fn logout(mut session: Signal<SessionState>) {
    session_store().clear();
    tracing::info!("signed out");
    let dark_mode = session.peek().dark_mode;
    session.set(SessionState {
        user: None,
        token: None,
        dark_mode,
    });
}

/// Flip the theme for this visit.
pub fn toggle_theme(mut session: Signal<SessionState>) {
    let mut state = session.peek().clone();
    state.dark_mode = !state.dark_mode;
    session.set(state);
}

fn session_store() -> SessionStore<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::new(store::MemoryStore::new())
    }
}
