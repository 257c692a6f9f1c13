//! Mock implementations for testing.
//!
//! [`MockTransport`] answers requests from scripted responses keyed by method
//! and path, and records every request it sees.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use teamsync::types::Result;
use teamsync::{
    ApiClient, HttpRequest, HttpResponse, MemoryStore, Method, RequestTracker, Session, Transport,
};

/// Origin every mock client is built against
pub const BASE: &str = "http://mock.test";

/// Scripted transport.
///
/// Each `(method, path)` holds a queue of responses. Responses are consumed in
/// order and the last one repeats, so a route scripted once answers every
/// call. Unscripted routes answer 404.
///
/// # Examples
///
/// ```ignore
/// let mock = MockTransport::new();
/// mock.on(Method::Get, "/api/projects", 200, json!([]));
/// let api = client(&mock, "token");
/// ```
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
    probe: Mutex<Option<(RequestTracker, Vec<usize>)>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a JSON response for a route.
    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) {
        self.on_raw(method, path, status, &body.to_string());
    }

    /// Queue a raw text response for a route.
    pub fn on_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(HttpResponse {
                status,
                body: body.to_string(),
            });
    }

    /// Record the tracker's in-flight count at every send.
    pub fn probe(&self, tracker: &RequestTracker) {
        *self.probe.lock() = Some((tracker.clone(), Vec::new()));
    }

    /// In-flight counts seen by the probe
    pub fn observed(&self) -> Vec<usize> {
        self.probe
            .lock()
            .as_ref()
            .map(|(_, seen)| seen.clone())
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// `"METHOD /path"` for every request, in order
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), path_of(&r.url)))
            .collect()
    }

    /// Decoded body of the last request to a route
    pub fn last_body(&self, method: Method, path: &str) -> Option<Value> {
        self.requests
            .lock()
            .iter()
            .rev()
            .find(|r| r.method == method && path_of(&r.url) == path)
            .and_then(|r| r.body.as_deref())
            .and_then(|b| serde_json::from_str(b).ok())
    }

    fn respond(&self, method: Method, path: &str) -> HttpResponse {
        let mut routes = self.routes.lock();
        match routes.get_mut(&(method, path.to_string())) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(not_found),
            Some(queue) => queue.front().cloned().unwrap_or_else(not_found),
            None => not_found(),
        }
    }
}

fn not_found() -> HttpResponse {
    HttpResponse {
        status: 404,
        body: r#"{"message":"Not found"}"#.to_string(),
    }
}

fn path_of(url: &str) -> &str {
    url.strip_prefix(BASE).unwrap_or(url)
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        if let Some((tracker, seen)) = self.probe.lock().as_mut() {
            seen.push(tracker.in_flight());
        }
        let method = request.method;
        let path = path_of(&request.url).to_string();
        self.requests.lock().push(request);

        // Let concurrently joined requests start before this one settles.
        tokio::task::yield_now().await;

        Ok(self.respond(method, &path))
    }
}

/// Client against [`BASE`] signed in with `token` (empty for signed out)
pub fn client(transport: &Arc<MockTransport>, token: &str) -> ApiClient {
    let session = if token.is_empty() {
        Session::in_memory()
    } else {
        Session::new(Arc::new(MemoryStore::with_token(token)))
    };
    ApiClient::new(BASE, transport.clone(), session)
}
