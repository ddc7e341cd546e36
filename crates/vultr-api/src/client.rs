//! Typed client over a [`Transport`].
//!
//! Resource operations live next to their models in the resource modules;
//! this module holds the client type and the envelope handling they share.
//!
//! # Example
//!
//! ```rust,no_run
//! use vultr_api::{ApiClient, HttpTransport, ListOptions};
//!
//! # async fn example() -> Result<(), vultr_api::ApiError> {
//! let client = ApiClient::new(HttpTransport::new("my-token")?);
//! let page = client.list_regions(&ListOptions::default()).await?;
//! println!("{} regions", page.items.len());
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::paging::{ListOptions, Meta, Page};
use crate::transport::{Method, Request, Transport};

/// Percent-encode one user-supplied path segment.
///
/// Separators and reserved characters are escaped, and the dot segments
/// `.` and `..` are escaped whole, so an ID can never address a different
/// endpoint.
pub(crate) fn segment(raw: &str) -> Cow<'_, str> {
    match raw {
        "." => Cow::Borrowed("%2E"),
        ".." => Cow::Borrowed("%2E%2E"),
        _ => urlencoding::encode(raw),
    }
}

/// Client for the Vultr v2 API.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over the given transport.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, request: Request) -> Result<Vec<u8>, ApiError> {
        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            return Err(ApiError::from_response(response.status, &response.body));
        }
        Ok(response.body)
    }

    /// Send a request whose response carries no body of interest.
    pub(crate) async fn send_empty(&self, request: Request) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }

    /// Send a request and decode the response body as a JSON object.
    async fn send_object(&self, request: Request) -> Result<Map<String, Value>, ApiError> {
        let body = self.send(request).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Map::new());
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET a list endpoint whose records sit under `key`.
    pub(crate) async fn list<R: DeserializeOwned>(
        &self,
        path: &str,
        key: &'static str,
        options: &ListOptions,
    ) -> Result<Page<R>, ApiError> {
        let request = Request::new(Method::Get, path).with_query(options.query());
        let mut object = self.send_object(request).await?;

        let items = match object.remove(key) {
            Some(Value::Null) | None => Vec::new(),
            Some(value) => serde_json::from_value(value)?,
        };
        let meta = match object.remove("meta") {
            Some(Value::Null) | None => None,
            Some(value) => Some(serde_json::from_value::<Meta>(value)?),
        };

        Ok(Page { items, meta })
    }

    /// GET a single record that sits under `key`.
    pub(crate) async fn fetch<R: DeserializeOwned>(
        &self,
        path: &str,
        key: &'static str,
    ) -> Result<R, ApiError> {
        self.exchange(Request::new(Method::Get, path), key).await
    }

    /// Send `body` with `method` and decode the record under `key`.
    pub(crate) async fn submit<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        key: &'static str,
    ) -> Result<R, ApiError> {
        let request = Request::new(method, path).with_body(encode(body)?);
        self.exchange(request, key).await
    }

    /// Send `body` with `method`, ignoring the response body.
    pub(crate) async fn submit_empty<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let request = Request::new(method, path).with_body(encode(body)?);
        self.send_empty(request).await
    }

    /// DELETE a path.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(Request::new(Method::Delete, path)).await
    }

    /// POST to an action endpoint with no body.
    pub(crate) async fn action(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(Request::new(Method::Post, path)).await
    }

    async fn exchange<R: DeserializeOwned>(
        &self,
        request: Request,
        key: &'static str,
    ) -> Result<R, ApiError> {
        let mut object = self.send_object(request).await?;
        let value = object.remove(key).ok_or(ApiError::MissingField(key))?;
        Ok(serde_json::from_value(value)?)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeTransport;
    use serde::Deserialize;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: String,
    }

    #[tokio::test]
    async fn list_decodes_items_and_meta() {
        let fake = FakeTransport::new().respond(
            Method::Get,
            "/things",
            200,
            json!({"things": [{"id": "a"}, {"id": "b"}], "meta": {"total": 2, "links": {"next": "", "prev": ""}}}),
        );
        let client = ApiClient::new(fake);
        let page: Page<Thing> = client
            .list("/things", "things", &ListOptions::default())
            .await
            .expect("list succeeds");

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.meta.and_then(|m| m.total), Some(2));
    }

    #[tokio::test]
    async fn list_tolerates_null_meta_and_missing_key() {
        let fake = FakeTransport::new().respond(Method::Get, "/things", 200, json!({"meta": null}));
        let client = ApiClient::new(fake);
        let page: Page<Thing> = client
            .list("/things", "things", &ListOptions::default())
            .await
            .expect("list succeeds");

        assert!(page.items.is_empty());
        assert!(page.meta.is_none());
    }

    #[tokio::test]
    async fn list_sends_paging_query() {
        let fake = FakeTransport::new().respond(Method::Get, "/things", 200, json!({"things": []}));
        let client = ApiClient::new(fake);
        let options = ListOptions {
            per_page: Some(5),
            cursor: Some("next-abc".into()),
        };
        let _: Page<Thing> = client.list("/things", "things", &options).await.expect("list");

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].query,
            vec![
                ("per_page".to_string(), "5".to_string()),
                ("cursor".to_string(), "next-abc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn fetch_reports_missing_key() {
        let fake = FakeTransport::new().respond(Method::Get, "/things/a", 200, json!({"other": {}}));
        let client = ApiClient::new(fake);
        let err = client
            .fetch::<Thing>("/things/a", "thing")
            .await
            .expect_err("missing key");
        assert!(matches!(err, ApiError::MissingField("thing")));
    }

    #[tokio::test]
    async fn non_success_status_becomes_error() {
        let fake = FakeTransport::new().respond(
            Method::Get,
            "/things/a",
            404,
            json!({"error": "Thing not found", "status": 404}),
        );
        let client = ApiClient::new(fake);
        let err = client
            .fetch::<Thing>("/things/a", "thing")
            .await
            .expect_err("404");
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("Thing not found"));
    }

    #[tokio::test]
    async fn delete_accepts_empty_body() {
        let fake = FakeTransport::new().respond_empty(Method::Delete, "/things/a", 204);
        let client = ApiClient::new(fake);
        client.delete("/things/a").await.expect("delete succeeds");
        assert_eq!(client.transport().call_count(), 1);
    }

    #[test_case("cb676a46-66fd-4dfb-b839-443f2e6c0b60", "cb676a46-66fd-4dfb-b839-443f2e6c0b60" ; "plain id")]
    #[test_case("example.com", "example.com" ; "domain keeps dots")]
    #[test_case("../ssh-keys/x", "..%2Fssh-keys%2Fx" ; "separator")]
    #[test_case("..", "%2E%2E" ; "parent segment")]
    #[test_case(".", "%2E" ; "current segment")]
    #[test_case("a b?c#d", "a%20b%3Fc%23d" ; "reserved characters")]
    fn segment_escapes_path_characters(raw: &str, expected: &str) {
        assert_eq!(segment(raw), expected);
    }
}
