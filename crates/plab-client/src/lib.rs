//! # plab-client
//!
//! HTTP client for the Persona Lab research backend.
//!
//! One method per backend operation, each single-shot with no retry:
//! - `POST /api/research/setup` ([`ApiClient::setup_research`])
//! - `GET /api/questions/recommendations` ([`ApiClient::question_recommendations`])
//! - `POST /api/questions/{id}/submit` ([`ApiClient::submit_questions`])
//! - `GET /api/insights/analyze/{id}` ([`ApiClient::analyze_insights`])
//! - `GET /api/insights/download/{id}` ([`ApiClient::download_report`])
//!
//! [`pacing`] joins a call with the simulated progress timeline.

pub mod disposition;
pub mod insights;
pub mod pacing;
pub mod questions;
pub mod research;

mod error;
mod http;

pub use error::ApiError;
pub use insights::DownloadedReport;
pub use questions::SubmitAck;
pub use research::SetupOutcome;

use plab_config::ApiConfig;
use std::time::Duration;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// No request timeout is applied unless `timeout` is given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("persona-lab/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(config.base_url(), config.timeout())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Percent-encode an id for use as a path segment.
fn segment(id: &plab_core::ids::SessionId) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plab_core::ids::SessionId;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:5001/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5001");
        assert_eq!(
            client.url("/api/research/setup"),
            "http://localhost:5001/api/research/setup"
        );
    }

    #[test]
    fn from_config_uses_configured_url() {
        let config = ApiConfig {
            base_url: "https://research.example.com".into(),
            timeout_secs: Some(30),
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "https://research.example.com");
    }

    #[test]
    fn ids_are_encoded_as_path_segments() {
        let id = SessionId::new("a b/c").unwrap();
        assert_eq!(segment(&id), "a%20b%2Fc");
    }
}
