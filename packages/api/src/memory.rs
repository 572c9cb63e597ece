use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Scripted transport for testing and non-browser fallback.
///
/// Responses are served in the order they were queued; every dispatched
/// request is recorded for inspection. Clones share both queues. With
/// nothing queued, every send fails as a network error, which is also the
/// behaviour non-browser builds get.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and raw body.
    pub fn push_response(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queue a response with a JSON body.
    pub fn push_json(&self, status: u16, body: &serde_json::Value) {
        self.push_response(status, &body.to_string());
    }

    /// Queue a transport-level failure.
    pub fn push_error(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Every request dispatched so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no backend configured".to_string())))
    }
}
