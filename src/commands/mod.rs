//! API Command Wrappers
//!
//! Frontend bindings to the orders REST API, organized by resource.
//! Every call goes through a [`Transport`], so the same client runs against
//! browser fetch or an in-memory API in tests.

mod order;
mod item;
mod health;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use gloo_net::http::Request;
use leptos::logging::log;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

pub use order::SearchFilters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One outgoing request; `body` is already JSON text.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and hands back whatever the server answered.
///
/// Non-2xx statuses are still `Ok` here; [`ApiClient`] turns them into
/// [`ApiError::Status`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// Browser fetch transport
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Content-Type", "application/json");

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

/// Typed client for the orders API
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn exchange(&self, method: Method, url: String, body: Option<String>) -> ApiResult<ApiResponse> {
        log!("[API] {} {}", method.as_str(), url);
        let response = self.transport.send(ApiRequest { method, url, body }).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_status(response.status, &response.body))
        }
    }

    /// Call an API path and decode the JSON answer.
    async fn call<R: DeserializeOwned>(&self, method: Method, path: &str, body: Option<String>) -> ApiResult<R> {
        let response = self.exchange(method, self.config.url(path), body).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Call an API path whose answer carries no body (204).
    async fn call_empty(&self, method: Method, path: &str) -> ApiResult<()> {
        self.exchange(method, self.config.url(path), None).await.map(|_| ())
    }
}

fn encode<B: Serialize>(body: &B) -> ApiResult<Option<String>> {
    serde_json::to_string(body)
        .map(Some)
        .map_err(|e| ApiError::Encode(e.to_string()))
}
