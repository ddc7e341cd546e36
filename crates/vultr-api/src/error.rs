//! Error types for the vultr-api crate.

use thiserror::Error;

/// Errors that can occur while talking to the Vultr API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("decoding error: {0}")]
    Decoding(#[from] serde_json::Error),

    /// The request body could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A field the operation depends on was absent from the response.
    #[error("missing field in response: {0}")]
    MissingField(&'static str),
}

/// Longest raw body, in characters, carried into an error message.
const BODY_SUMMARY_LIMIT: usize = 200;

/// Squash a non-JSON body onto one bounded line.
fn body_summary(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.is_empty() {
        return "request failed".to_string();
    }
    if line.chars().count() <= BODY_SUMMARY_LIMIT {
        return line;
    }
    let mut cut: String = line.chars().take(BODY_SUMMARY_LIMIT).collect();
    cut.push_str("...");
    cut
}

impl ApiError {
    /// Build a status error from a raw response body.
    ///
    /// Uses the API's `{"error": "..."}` envelope when present and falls back
    /// to the body text otherwise.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        #[derive(serde::Deserialize)]
        struct Envelope {
            error: String,
        }

        let message = match serde_json::from_slice::<Envelope>(body) {
            Ok(envelope) if !envelope.error.is_empty() => envelope.error,
            _ => body_summary(body),
        };

        Self::Status { status, message }
    }

    /// HTTP status of the failure, when the API produced one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_uses_error_envelope() {
        let err = ApiError::from_response(404, br#"{"error":"Invalid backup ID","status":404}"#);
        assert_eq!(err.to_string(), "Invalid backup ID (HTTP 404)");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn from_response_falls_back_to_body_text() {
        let err = ApiError::from_response(502, b"bad gateway\n");
        assert_eq!(err.to_string(), "bad gateway (HTTP 502)");
    }

    #[test]
    fn from_response_empty_body() {
        let err = ApiError::from_response(500, b"");
        assert_eq!(err.to_string(), "request failed (HTTP 500)");
    }

    #[test]
    fn from_response_flattens_html_body() {
        let body = b"<html>\n  <head><title>502 Bad Gateway</title></head>\n  <body>\n\tnginx\n  </body>\n</html>\n";
        let err = ApiError::from_response(502, body);
        let text = err.to_string();
        assert!(!text.contains('\n'), "{text}");
        assert!(!text.contains('\t'), "{text}");
        assert_eq!(
            text,
            "<html> <head><title>502 Bad Gateway</title></head> <body> nginx </body> </html> (HTTP 502)"
        );
    }

    #[test]
    fn from_response_truncates_long_body() {
        let body = "x".repeat(BODY_SUMMARY_LIMIT * 3);
        let err = ApiError::from_response(500, body.as_bytes());
        let expected = format!("{}... (HTTP 500)", "x".repeat(BODY_SUMMARY_LIMIT));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "transport error: connection refused");
    }
}
