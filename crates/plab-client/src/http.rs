//! Shared HTTP response helpers for the backend operations.
//!
//! Centralizes the non-success handling so each operation only states its
//! fallback message and whether the server's own `message` may be shown.

use crate::error::ApiError;

/// How a failed operation builds its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMessage {
    /// Prefer the JSON `message` field of the error body, else the fallback.
    Server(&'static str),
    /// Always the fallback, whatever the body says.
    Generic(&'static str),
}

impl FailureMessage {
    const fn fallback(self) -> &'static str {
        match self {
            Self::Server(text) | Self::Generic(text) => text,
        }
    }
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. On failure the body is read
/// once and turned into [`ApiError::Api`] according to `failure`.
pub async fn check_response(
    resp: reqwest::Response,
    failure: FailureMessage,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = match failure {
        FailureMessage::Server(_) => server_message(&body),
        FailureMessage::Generic(_) => None,
    }
    .unwrap_or_else(|| failure.fallback().to_string());

    tracing::warn!(status = status.as_u16(), %message, "backend request failed");
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Non-blank `message` string from a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    const FALLBACK: &str = "Something went wrong.";

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "{}");
        assert!(
            check_response(resp, FailureMessage::Server(FALLBACK))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn server_message_is_surfaced_verbatim() {
        let resp = mock_response(400, r#"{"message": "Product name is too long"}"#);
        let err = check_response(resp, FailureMessage::Server(FALLBACK))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 400, .. }));
        assert_eq!(err.to_string(), "Product name is too long");
    }

    #[tokio::test]
    async fn unparseable_body_uses_fallback() {
        let resp = mock_response(502, "<html>Bad Gateway</html>");
        let err = check_response(resp, FailureMessage::Server(FALLBACK))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), FALLBACK);
    }

    #[tokio::test]
    async fn generic_policy_ignores_server_message() {
        let resp = mock_response(500, r#"{"message": "stack trace here"}"#);
        let err = check_response(resp, FailureMessage::Generic(FALLBACK))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), FALLBACK);
    }

    #[test]
    fn blank_or_non_string_message_is_ignored() {
        assert_eq!(server_message(r#"{"message": "  "}"#), None);
        assert_eq!(server_message(r#"{"message": 42}"#), None);
        assert_eq!(server_message(r#"{"error": "x"}"#), None);
        assert_eq!(
            server_message(r#"{"message": "quota exceeded"}"#).as_deref(),
            Some("quota exceeded")
        );
    }
}
