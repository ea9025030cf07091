// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use bytes::Bytes;
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::core::ErrorResponse;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Route = (String, String);

#[derive(Default)]
struct MockState {
    responses: HashMap<Route, VecDeque<(u16, String)>>,
    calls: HashMap<Route, usize>,
    bodies: HashMap<Route, Vec<serde_json::Value>>,
}

/// A mock HTTP service that replays scripted responses per method and path.
///
/// Registering several responses for the same route plays them in order; the
/// last one keeps being returned once the others are used up.
#[derive(Clone)]
pub struct MockService {
    state: Arc<Mutex<MockState>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
        self
    }

    /// Number of requests received for the exact method and path
    pub fn calls(&self, method: &str, path: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .get(&(method.to_string(), path.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// JSON request bodies received for the exact method and path
    pub fn bodies(&self, method: &str, path: &str) -> Vec<serde_json::Value> {
        self.state
            .lock()
            .unwrap()
            .bodies
            .get(&(method.to_string(), path.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn next_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut state = self.state.lock().unwrap();
        let route = (method.to_string(), path.to_string());
        *state.calls.entry(route.clone()).or_default() += 1;

        let queue = state.responses.get_mut(&route)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }

    fn record_body(&self, method: &str, path: &str, body: &Bytes) {
        if body.is_empty() {
            return;
        }
        if let Ok(value) = serde_json::from_slice(body) {
            self.state
                .lock()
                .unwrap()
                .bodies
                .entry((method.to_string(), path.to_string()))
                .or_default()
                .push(value);
        }
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let response = self.next_response(&method, &path);
        let mock = self.clone();

        Box::pin(async move {
            let body = req.into_body().collect().await?.to_bytes();
            mock.record_body(&method, &path, &body);

            // Unscripted routes answer 404
            let (status, body) = response.unwrap_or_else(|| (404, not_found_json("", "")));
            let response = Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))?;
            Ok::<_, tower::BoxError>(response)
        })
    }
}

/// Create a mock namespace JSON response
pub fn namespace_json(name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "test-uid"
        },
        "status": {
            "phase": "Active"
        }
    })
    .to_string()
}

/// Create a Status failure response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(
        404,
        "NotFound",
        &format!("{} \"{}\" not found", resource, name),
    )
}

/// Build a kube API error as the client would return it
pub fn api_error(code: u16, reason: &str) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message: format!("{} ({})", reason, code),
        reason: reason.to_string(),
        code,
    })
}
