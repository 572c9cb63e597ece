//! # Browser transport over the Fetch API
//!
//! [`FetchTransport`] is the [`Transport`] implementation used on the web
//! platform, built on `gloo-net`. Every request carries
//! `Content-Type: application/json`, and `Authorization: Bearer <token>` is
//! attached exactly when the request holds a token.
//!
//! A response body that cannot be read is treated as empty rather than as a
//! failure; whether an empty body matters is the client's call (a DELETE is
//! confirmed by status alone, a GET will fail to decode).

use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use gloo_net::http::RequestBuilder;

/// Fetch-backed transport. Zero-size; each send builds a fresh request.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            Method::Get => gloo_net::http::Method::GET,
            Method::Post => gloo_net::http::Method::POST,
            Method::Put => gloo_net::http::Method::PUT,
            Method::Delete => gloo_net::http::Method::DELETE,
        };

        let mut builder = RequestBuilder::new(&request.url)
            .method(method)
            .header("Content-Type", "application/json");
        if let Some(ref token) = request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let ready = match request.body {
            Some(ref body) => builder.body(body.to_string()),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ready
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
