//! HTTP client wrapper for the task-sync backend
//!
//! [`ApiClient`] resolves paths against a fixed base URL, attaches the stored
//! bearer token, and registers every call with the [`RequestTracker`]. The
//! actual I/O is delegated to a [`Transport`] so the same client runs natively
//! (reqwest) and in the browser (gloo-net).

#[cfg(feature = "native")]
pub mod reqwest_transport;
pub mod routes;

#[cfg(feature = "native")]
pub use reqwest_transport::ReqwestTransport;

use crate::loader::RequestTracker;
use crate::session::Session;
use crate::types::{ApiErrorBody, AppError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// HTTP methods used against the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Fully-resolved outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status plus body text
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the network I/O for [`ApiClient`].
///
/// Futures are not required to be `Send`; the client runs on a single
/// cooperative event loop.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Send a request. Errors here are transport failures only; HTTP error
    /// statuses come back as a normal [`HttpResponse`].
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Configured client shared by every view
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
    session: Session,
    tracker: RequestTracker,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, session: Session) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            transport,
            session,
            tracker: RequestTracker::new(),
        }
    }

    /// Share an existing tracker instead of creating one
    pub fn with_tracker(mut self, tracker: RequestTracker) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET and decode
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let resp = self.execute(Method::Get, path, None).await?;
        decode(&resp)
    }

    /// POST a JSON body and decode the response
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R> {
        let resp = self.execute(Method::Post, path, Some(encode(body)?)).await?;
        decode(&resp)
    }

    /// POST a JSON body, ignoring the response body
    pub async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(Method::Post, path, Some(encode(body)?)).await?;
        Ok(())
    }

    /// PUT a JSON body, ignoring the response body
    pub async fn put_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(Method::Put, path, Some(encode(body)?)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::Delete, path, None).await?;
        Ok(())
    }

    /// Send a request and map non-2xx statuses to [`AppError::Request`]
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse> {
        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        };

        let _in_flight = self.tracker.begin();
        tracing::debug!(method = method.as_str(), path, "Dispatching request");

        let resp = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(method = method.as_str(), path, error = %e, "Transport failure");
            e
        })?;

        if !resp.is_success() {
            let message = error_message(&resp);
            tracing::warn!(
                method = method.as_str(),
                path,
                status = resp.status,
                %message,
                "Request failed"
            );
            return Err(AppError::Request {
                status: resp.status,
                message,
            });
        }

        Ok(resp)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String> {
    serde_json::to_string(body).map_err(|e| AppError::InvalidInput(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R> {
    serde_json::from_str(&resp.body).map_err(|e| AppError::Decode(e.to_string()))
}

fn error_message(resp: &HttpResponse) -> String {
    if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&resp.body) {
        if let Some(message) = body.into_message() {
            return message;
        }
    }
    let text = resp.body.trim();
    if !text.is_empty() && !text.starts_with('{') {
        return text.to_string();
    }
    format!("Request failed with status {}", resp.status)
}
