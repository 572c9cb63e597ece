//! Shared client constructors for all task and auth operations.
//!
//! Returns clients backed by the platform transport:
//! - **Web** (WASM + `web` feature): the Fetch API via [`api::FetchTransport`]
//! - **Everything else**: [`api::MemoryTransport`], where every call fails;
//!   non-browser builds have no backend to talk to.

use api::{ApiClient, TaskManager, Transport};

/// Create a client for one operation. Construction is cheap; nothing is
/// cached between operations.
pub fn make_client(token: Option<String>) -> ApiClient<impl Transport> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        ApiClient::new(api::FetchTransport::new(), token)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        ApiClient::new(api::MemoryTransport::new(), token)
    }
}

/// Create a task manager for one operation.
pub fn make_manager(token: Option<String>) -> TaskManager<impl Transport> {
    TaskManager::new(make_client(token))
}
