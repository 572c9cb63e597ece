//! # ApiClient: wire plumbing and typed endpoints
//!
//! [`ApiClient`] owns everything every request has in common: the base URL,
//! the bearer token, JSON encoding, status checking, and turning failure
//! bodies into [`ApiError`]s. The endpoint methods are thin typed wrappers
//! over that plumbing.
//!
//! ## Endpoints
//!
//! | Method | Backend route | Returns |
//! |--------|--------------|---------|
//! | [`login`](ApiClient::login) | `POST /login` | [`AuthResponse`] |
//! | [`register`](ApiClient::register) | `POST /register` | [`AuthResponse`] |
//! | [`fetch_tasks`](ApiClient::fetch_tasks) | `GET /todos` | `Vec<Task>` |
//! | [`create_task`](ApiClient::create_task) | `POST /todos` | the stored [`Task`] |
//! | [`update_task`](ApiClient::update_task) | `PUT /todos/{id}` | the updated [`Task`] |
//! | [`delete_task`](ApiClient::delete_task) | `DELETE /todos/{id}` | `()`, confirmed by status alone |
//!
//! ## Error normalisation
//!
//! Any non-success status becomes [`ApiError::Status`]. When the failure body
//! is JSON with a `message` field, that message is carried along and shown to
//! the user; anything else falls back to a generic failure line. A success
//! body that fails to decode is [`ApiError::Decode`].

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::ApiError;
use crate::models::AuthResponse;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use tasks::{Task, TaskDraft, TaskPatch};

/// Where the backend lives unless the caller says otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// A configured connection to the backend: transport, base URL, credentials.
pub struct ApiClient<T: Transport> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, token: Option<String>) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL, token)
    }

    pub fn with_base_url(transport: T, base_url: &str, token: Option<String>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Exchange credentials for a token and the user they belong to.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = json!({ "email": email, "password": password });
        self.request(Method::Post, "/login", Some(body)).await
    }

    /// Create an account; a success signs the new user straight in.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = json!({ "username": username, "email": email, "password": password });
        self.request(Method::Post, "/register", Some(body)).await
    }

    /// The authoritative task list.
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.request(Method::Get, "/todos", None).await
    }

    /// Store a new task; the response is the record as the backend stored it.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.request(Method::Post, "/todos", Some(encode(draft)?))
            .await
    }

    /// Apply a partial update; the response is the full updated record.
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        self.request(Method::Put, &format!("/todos/{id}"), Some(encode(patch)?))
            .await
    }

    /// Delete a task. Confirmed by status alone; the body is ignored.
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.dispatch(Method::Delete, &format!("/todos/{id}"), None)
            .await?;
        Ok(())
    }

    /// Send, check the status, decode the success body.
    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let response = self.dispatch(method, path, body).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            bearer: self.token.clone(),
            body,
        };
        tracing::debug!(method = method.as_str(), path, "api request");

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            tracing::warn!(status = response.status, path, "api request failed");
            Err(ApiError::Status {
                status: response.status,
                message: extract_message(&response.body),
            })
        }
    }
}

/// Pull the `message` field out of a failure body, when there is one.
fn extract_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
}

fn encode(value: &impl serde::Serialize) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
