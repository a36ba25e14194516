//! Wizard controller: the single source of truth for the research flow.
//!
//! The active step and the data accumulated so far live in one
//! `WizardState` value. Steps report completion through the named
//! transition methods; nothing else mutates the state.
//!
//! ```text
//! Setup ──complete_setup──▶ Questions ──complete_questions──▶ Collecting
//!                                                               │
//!                        Insights ◀──finish_processing (timer)──┘
//! reset(): any step ──▶ Setup
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::entities::{PersonaProfile, ResearchProfile};
use crate::enums::WizardStep;
use crate::errors::CoreError;
use crate::ids::SessionId;

/// Fixed delay between entering step 3 and showing insights.
///
/// The backend is not polled; if analysis takes longer than this the insight
/// step shows its error state and the user can only reset.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(3);

/// Data accumulated once setup has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionData {
    profile: ResearchProfile,
    personas: Vec<PersonaProfile>,
    session_id: SessionId,
}

/// Step plus the payload that step is allowed to see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum WizardState {
    #[default]
    Setup,
    Questions(SessionData),
    Collecting(SessionData),
    Insights(SessionData),
}

impl WizardState {
    const fn step(&self) -> WizardStep {
        match self {
            Self::Setup => WizardStep::Setup,
            Self::Questions(_) => WizardStep::Questions,
            Self::Collecting(_) => WizardStep::Collecting,
            Self::Insights(_) => WizardStep::Insights,
        }
    }

    const fn data(&self) -> Option<&SessionData> {
        match self {
            Self::Setup => None,
            Self::Questions(data) | Self::Collecting(data) | Self::Insights(data) => Some(data),
        }
    }
}

/// Serializable view of the controller state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WizardSnapshot {
    pub step: u8,
    pub step_name: WizardStep,
    pub profile: Option<ResearchProfile>,
    pub personas: Vec<PersonaProfile>,
    pub session_id: Option<SessionId>,
}

#[derive(Debug, Clone, Default)]
pub struct WizardController {
    state: WizardState,
}

impl WizardController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.state.step()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&ResearchProfile> {
        self.state.data().map(|data| &data.profile)
    }

    #[must_use]
    pub fn personas(&self) -> &[PersonaProfile] {
        self.state.data().map_or(&[], |data| data.personas.as_slice())
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&SessionId> {
        self.state.data().map(|data| &data.session_id)
    }

    /// Session id for a question or insight operation.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingSession`] before setup has succeeded. This
    /// is terminal for the calling step; the only way forward is [`Self::reset`].
    pub fn require_session(&self) -> Result<&SessionId, CoreError> {
        self.session_id().ok_or(CoreError::MissingSession)
    }

    /// Step 1 → 2. Requires a session id issued by the backend.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidTransition`] when not on the setup step
    /// - [`CoreError::MissingSession`] when `session_id` is `None`
    /// - [`CoreError::Validation`] when the profile lacks required fields
    ///
    /// The state is unchanged on error.
    pub fn complete_setup(
        &mut self,
        profile: ResearchProfile,
        personas: Vec<PersonaProfile>,
        session_id: Option<SessionId>,
    ) -> Result<(), CoreError> {
        self.check_transition(WizardStep::Questions)?;
        let session_id = session_id.ok_or(CoreError::MissingSession)?;
        profile.validate()?;
        self.state = WizardState::Questions(SessionData {
            profile,
            personas,
            session_id,
        });
        Ok(())
    }

    /// Step 2 → 3, after questions were accepted by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] when not on the questions step.
    pub fn complete_questions(&mut self) -> Result<(), CoreError> {
        self.check_transition(WizardStep::Collecting)?;
        self.state = match std::mem::take(&mut self.state) {
            WizardState::Questions(data) => WizardState::Collecting(data),
            other => other,
        };
        Ok(())
    }

    /// Step 3 → 4, fired by the processing timer rather than a server signal.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] when not on the collecting step.
    pub fn finish_processing(&mut self) -> Result<(), CoreError> {
        self.check_transition(WizardStep::Insights)?;
        self.state = match std::mem::take(&mut self.state) {
            WizardState::Collecting(data) => WizardState::Insights(data),
            other => other,
        };
        Ok(())
    }

    /// Back to step 1 with everything cleared. Allowed from any step.
    pub fn reset(&mut self) {
        self.state = WizardState::Setup;
    }

    #[must_use]
    pub fn snapshot(&self) -> WizardSnapshot {
        let step = self.step();
        WizardSnapshot {
            step: step.number(),
            step_name: step,
            profile: self.profile().cloned(),
            personas: self.personas().to_vec(),
            session_id: self.session_id().cloned(),
        }
    }

    fn check_transition(&self, next: WizardStep) -> Result<(), CoreError> {
        let from = self.step();
        if from.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition { from, to: next })
        }
    }
}
