//! Research setup: profile in, personas and session id out.

use plab_core::entities::{PersonaProfile, ResearchProfile};
use plab_core::enums::{AgeRange, GenderFilter};
use plab_core::ids::{SessionId, optional_session_id};
use serde::{Deserialize, Serialize};

use crate::{
    ApiClient,
    error::ApiError,
    http::{FailureMessage, check_response},
};

const SETUP_FAILED: FailureMessage =
    FailureMessage::Server("Failed to set up the research. Please try again.");

/// Setup request body, using the backend's field names.
///
/// Unset filters go out as empty strings.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SetupRequest<'a> {
    pub product: &'a str,
    pub target: &'a str,
    pub age: &'static str,
    pub gender: &'static str,
    pub job: &'a str,
    pub additional_context: &'a str,
}

impl<'a> From<&'a ResearchProfile> for SetupRequest<'a> {
    fn from(profile: &'a ResearchProfile) -> Self {
        Self {
            product: profile.product.trim(),
            target: profile.target_audience.trim(),
            age: profile.age_range.map_or("", AgeRange::as_str),
            gender: profile.gender.map_or("", GenderFilter::as_str),
            job: profile.occupation.trim(),
            additional_context: profile.additional_context.trim(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SetupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    recommended_clones: Option<Vec<PersonaProfile>>,
    #[serde(default, deserialize_with = "optional_session_id")]
    research_id: Option<SessionId>,
}

/// Decoded setup result.
///
/// `session_id` is `None` when the backend answered without a usable id; the
/// wizard refuses to leave step 1 in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOutcome {
    pub status: String,
    pub personas: Vec<PersonaProfile>,
    pub session_id: Option<SessionId>,
}

impl From<SetupResponse> for SetupOutcome {
    fn from(resp: SetupResponse) -> Self {
        Self {
            status: resp.status.unwrap_or_default(),
            personas: resp
                .recommended_clones
                .unwrap_or_default()
                .into_iter()
                .map(PersonaProfile::with_avatar)
                .collect(),
            session_id: resp.research_id,
        }
    }
}

impl ApiClient {
    /// Submit a research profile and receive the generated personas.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-success status (with
    /// the server's `message` when it sent one), or an undecodable body.
    pub async fn setup_research(
        &self,
        profile: &ResearchProfile,
    ) -> Result<SetupOutcome, ApiError> {
        let url = self.url("/api/research/setup");
        tracing::debug!(method = "POST", %url, product = %profile.product, "setting up research");

        let resp = self
            .http
            .post(&url)
            .json(&SetupRequest::from(profile))
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, %e, "setup request failed"))?;
        let resp = check_response(resp, SETUP_FAILED).await?;
        let body: SetupResponse = resp.json().await?;

        let outcome = SetupOutcome::from(body);
        tracing::debug!(
            personas = outcome.personas.len(),
            has_session = outcome.session_id.is_some(),
            "research setup finished"
        );
        Ok(outcome)
    }
}
