//! In-memory transport for tests.
//!
//! Responses are keyed by method and path. Every request is recorded so
//! tests can assert how many calls an operation made.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use crate::error::ApiError;
use crate::transport::{Method, Request, Response, Transport};

/// Fake transport with canned responses.
#[derive(Debug, Default)]
pub struct FakeTransport {
    routes: HashMap<(Method, String), Response>,
    requests: Mutex<Vec<Request>>,
    hang: bool,
}

impl FakeTransport {
    /// Create a fake with no routes. Unrouted requests answer 404.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fake whose requests never complete.
    #[must_use]
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }

    /// Answer `method path` with a JSON body.
    #[must_use]
    pub fn respond(
        mut self,
        method: Method,
        path: impl Into<String>,
        status: u16,
        body: serde_json::Value,
    ) -> Self {
        let body = body.to_string().into_bytes();
        self.routes
            .insert((method, path.into()), Response { status, body });
        self
    }

    /// Answer `method path` with an empty body.
    #[must_use]
    pub fn respond_empty(mut self, method: Method, path: impl Into<String>, status: u16) -> Self {
        self.routes.insert(
            (method, path.into()),
            Response {
                status,
                body: Vec::new(),
            },
        );
        self
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.log().clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.log().len()
    }

    fn log(&self) -> std::sync::MutexGuard<'_, Vec<Request>> {
        // A poisoned log only means another test thread panicked mid-push.
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response, ApiError>> + Send {
        let response = self
            .routes
            .get(&(request.method, request.path.clone()))
            .cloned()
            .unwrap_or_else(|| Response {
                status: 404,
                body: br#"{"error":"not found"}"#.to_vec(),
            });
        self.log().push(request);
        let hang = self.hang;

        async move {
            if hang {
                std::future::pending::<()>().await;
            }
            Ok(response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn routes_by_method_and_path() {
        let fake = FakeTransport::new()
            .respond(Method::Get, "/a", 200, json!({"ok": true}))
            .respond_empty(Method::Delete, "/a", 204);

        let get = fake.execute(Request::new(Method::Get, "/a")).await.expect("get");
        assert_eq!(get.status, 200);

        let delete = fake
            .execute(Request::new(Method::Delete, "/a"))
            .await
            .expect("delete");
        assert_eq!(delete.status, 204);
        assert!(delete.body.is_empty());

        assert_eq!(fake.call_count(), 2);
    }

    #[tokio::test]
    async fn unrouted_request_is_not_found() {
        let fake = FakeTransport::new();
        let response = fake
            .execute(Request::new(Method::Get, "/missing"))
            .await
            .expect("response");
        assert_eq!(response.status, 404);
        assert_eq!(fake.requests()[0].path, "/missing");
    }
}
