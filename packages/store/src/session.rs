//! # Session persistence over a key-value store
//!
//! [`SessionStore`] keeps the signed-in identity across page reloads. All
//! reads and writes go through the [`KeyValueStore`] trait, so the same logic
//! works against browser `localStorage` ([`crate::LocalStore`]) and an
//! in-memory map for tests and non-browser builds ([`crate::MemoryStore`]).
//!
//! ## Storage layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `"token"` | The bearer token, stored as a raw string. |
//! | `"user"` | The signed-in user, stored as JSON. |
//!
//! The two keys are a pair: [`load`](SessionStore::load) returns a session
//! only when both are present and the user JSON parses. Anything less is
//! treated as signed out and the leftovers are cleared, so a half-written
//! pair can never produce a token-less user or a user-less token.

use serde::{de::DeserializeOwned, Serialize};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// A signed-in identity: the bearer token and the user it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Session<U> {
    pub token: String,
    pub user: U,
}

/// Durable session storage backed by a [`KeyValueStore`].
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored session, or `None` when signed out.
    ///
    /// A partial pair (token without user, user without token) and an
    /// unparseable user both count as signed out and are cleared.
    pub fn load<U: DeserializeOwned>(&self) -> Option<Session<U>> {
        let token = self.store.get(TOKEN_KEY);
        let user_raw = self.store.get(USER_KEY);
        match (token, user_raw) {
            (Some(token), Some(raw)) => match serde_json::from_str(&raw) {
                Ok(user) => Some(Session { token, user }),
                Err(_) => {
                    self.clear();
                    None
                }
            },
            (None, None) => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    /// Persist both halves of the session. Writes nothing if the user
    /// cannot be serialised, leaving the previous state intact.
    pub fn save<U: Serialize>(&self, session: &Session<U>) {
        let Ok(user_raw) = serde_json::to_string(&session.user) else {
            return;
        };
        self.store.set(TOKEN_KEY, &session.token);
        self.store.set(USER_KEY, &user_raw);
    }

    /// Remove both keys.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    /// The stored token alone, without decoding the user.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct TestUser {
        name: String,
    }

    fn user(name: &str) -> TestUser {
        TestUser {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let sessions = SessionStore::new(MemoryStore::new());

        assert!(sessions.load::<TestUser>().is_none());

        sessions.save(&Session {
            token: "abc123".to_string(),
            user: user("dana"),
        });

        let loaded = sessions.load::<TestUser>().unwrap();
        assert_eq!(loaded.token, "abc123");
        assert_eq!(loaded.user, user("dana"));
        assert_eq!(sessions.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = MemoryStore::new();
        let sessions = SessionStore::new(store.clone());

        sessions.save(&Session {
            token: "abc".to_string(),
            user: user("dana"),
        });
        sessions.clear();

        assert!(sessions.load::<TestUser>().is_none());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn test_token_without_user_is_signed_out_and_cleared() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "orphan");

        let sessions = SessionStore::new(store.clone());
        assert!(sessions.load::<TestUser>().is_none());
        // The orphaned half is gone too
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_user_without_token_is_signed_out_and_cleared() {
        let store = MemoryStore::new();
        store.set(USER_KEY, r#"{"name":"dana"}"#);

        let sessions = SessionStore::new(store.clone());
        assert!(sessions.load::<TestUser>().is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn test_corrupt_user_json_is_signed_out_and_cleared() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "abc");
        store.set(USER_KEY, "not json");

        let sessions = SessionStore::new(store.clone());
        assert!(sessions.load::<TestUser>().is_none());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }
}
