//! Transport abstraction between typed operations and the wire.
//!
//! [`ApiClient`](crate::ApiClient) builds a [`Request`] for every operation
//! and hands it to a [`Transport`]. The production implementation is
//! [`HttpTransport`]; tests substitute a fake.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::ApiError;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.vultr.com/v2";

/// Default per-request timeout enforced by the HTTP transport.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET.
    Get,
    /// POST.
    Post,
    /// PUT.
    Put,
    /// PATCH.
    Patch,
    /// DELETE.
    Delete,
}

impl Method {
    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single API request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the API base, starting with `/`.
    pub path: String,
    /// Query parameters.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl Request {
    /// Create a request with no query and no body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Attach query parameters.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response from a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Something that can carry a [`Request`] to the API and bring back a [`Response`].
pub trait Transport: Send + Sync {
    /// Execute one request.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained. Non-success
    /// statuses are returned as a [`Response`], not as an error.
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response, ApiError>> + Send;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response, ApiError>> + Send {
        (**self).execute(request)
    }
}

/// Transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("authenticated", &!self.api_key.is_empty())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport against the default endpoint.
    ///
    /// An empty `api_key` sends unauthenticated requests, which the API
    /// accepts for public catalogue endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a transport against a custom endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vultr-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Endpoint this transport talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        debug!(method = %request.method, path = %request.path, "Sending request");

        let mut builder = self.client.request(method, &url);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(status, "Received response");
        trace!(bytes = body.len(), "Response body");

        Ok(Response { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn request_builder() {
        let request = Request::new(Method::Post, "/ssh-keys")
            .with_query(vec![("per_page".into(), "10".into())])
            .with_body(serde_json::json!({"name": "laptop"}));
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/ssh-keys");
        assert_eq!(request.query.len(), 1);
        assert_eq!(request.body, Some(serde_json::json!({"name": "laptop"})));
    }

    #[test]
    fn response_success_range() {
        assert!(Response { status: 200, body: vec![] }.is_success());
        assert!(Response { status: 204, body: vec![] }.is_success());
        assert!(!Response { status: 404, body: vec![] }.is_success());
        assert!(!Response { status: 500, body: vec![] }.is_success());
    }

    #[test]
    fn http_transport_trims_base_url() {
        let transport =
            HttpTransport::with_base_url("https://example.test/v2/", "").expect("client builds");
        assert_eq!(transport.base_url(), "https://example.test/v2");
    }

    #[test]
    fn http_transport_debug_hides_key() {
        let transport = HttpTransport::new("secret-token").expect("client builds");
        let debug = format!("{transport:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("authenticated: true"));
    }
}
