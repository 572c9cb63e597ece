//! # The HTTP layer between the UI and the TaskWise backend
//!
//! Everything that talks to the backend lives here. The UI never builds a
//! request itself; it calls [`TaskManager`] (for task operations) or
//! [`ApiClient`] (for auth) and gets typed results back.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | The [`Transport`] trait: one async `send` from request to response. Implementations live in sibling modules. |
//! | [`fetch`] | [`FetchTransport`], the browser implementation over `gloo-net` (`web` feature). |
//! | [`memory`] | [`MemoryTransport`], canned responses plus a request log for tests and non-browser builds. |
//! | [`client`] | [`ApiClient`]: base URL, bearer token, JSON plumbing, error normalisation, typed endpoints. |
//! | [`manager`] | [`TaskManager`]: collection operations that take the current list and return the confirmed next one. |
//! | [`models`] | Auth wire types (`UserInfo`, `AuthResponse`). |
//! | [`error`] | [`ApiError`], whose `Display` is the single user-facing message. |

pub mod client;
pub mod error;
pub mod manager;
pub mod models;
pub mod transport;

mod memory;
pub use memory::MemoryTransport;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod fetch;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use fetch::FetchTransport;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use manager::TaskManager;
pub use models::{AuthResponse, UserInfo};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
