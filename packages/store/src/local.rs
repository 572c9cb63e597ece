//! # localStorage-backed store for the web platform
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used in the
//! browser. It goes through `gloo-storage`'s raw `localStorage` handle so
//! values land as plain strings under the exact keys the rest of the stack
//! expects, with no extra encoding layer.
//!
//! All methods swallow storage errors (returning `None` for reads, doing
//! nothing for writes). A full or disabled `localStorage` degrades to "no
//! stored session" rather than crashing the app.

use crate::session::KeyValueStore;
use gloo_storage::{LocalStorage, Storage};

/// Browser localStorage. Zero-size; every call grabs the window's storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = LocalStorage::raw().set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}
