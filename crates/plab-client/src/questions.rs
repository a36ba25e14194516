//! Question suggestions and submission.

use plab_core::ids::SessionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    ApiClient,
    error::ApiError,
    http::{FailureMessage, check_response},
    segment,
};

const RECOMMEND_FAILED: FailureMessage =
    FailureMessage::Generic("Failed to load question recommendations.");
const SUBMIT_FAILED: FailureMessage =
    FailureMessage::Server("Failed to submit questions. Please try again.");

#[derive(Debug, Deserialize)]
struct RecommendationsResponse {
    #[serde(default)]
    recommendations: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    questions: &'a [String],
}

/// Acknowledgement of a question submission.
///
/// The backend's payload is not interpreted beyond an optional `status`;
/// the raw body is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitAck {
    pub status: Option<String>,
    pub raw: Value,
}

impl SubmitAck {
    fn from_value(raw: Value) -> Self {
        let status = raw
            .get("status")
            .and_then(Value::as_str)
            .map(ToString::to_string);
        Self { status, raw }
    }
}

impl ApiClient {
    /// Fetch suggested question texts.
    ///
    /// Non-string entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status
    /// (always with the generic message).
    pub async fn question_recommendations(&self) -> Result<Vec<String>, ApiError> {
        let url = self.url("/api/questions/recommendations");
        tracing::debug!(method = "GET", %url, "fetching question recommendations");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, %e, "recommendations request failed"))?;
        let resp = check_response(resp, RECOMMEND_FAILED).await?;
        let body: RecommendationsResponse = resp.json().await?;

        Ok(body
            .recommendations
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) if !text.trim().is_empty() => Some(text),
                _ => None,
            })
            .collect())
    }

    /// Submit the ordered question texts for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status
    /// (with the server's `message` when it sent one).
    pub async fn submit_questions(
        &self,
        session: &SessionId,
        questions: &[String],
    ) -> Result<SubmitAck, ApiError> {
        let url = self.url(&format!("/api/questions/{}/submit", segment(session)));
        tracing::debug!(method = "POST", %url, count = questions.len(), "submitting questions");

        let resp = self
            .http
            .post(&url)
            .json(&SubmitRequest { questions })
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, %e, "submit request failed"))?;
        let resp = check_response(resp, SUBMIT_FAILED).await?;

        // An empty or non-JSON 2xx body still counts as accepted.
        let bytes = resp.bytes().await?;
        let raw = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        Ok(SubmitAck::from_value(raw))
    }
}
