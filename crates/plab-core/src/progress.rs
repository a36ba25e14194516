//! Cosmetic progress timeline shown while questions are being answered.
//!
//! The timeline is a pure function of elapsed time and has no relationship to
//! what the backend is actually doing. Stage 1 fills quickly, stage 2 slower,
//! and stage 3 creeps toward a cap below 100 % and holds there until the real
//! call finishes. Joining the timeline with the network call lives in
//! `plab-client::pacing`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::CoreError;

/// One of the three simulated stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Sending,
    Answering,
    Collecting,
}

impl Stage {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sending => "Sending questions to clones",
            Self::Answering => "Clones are answering",
            Self::Collecting => "Collecting responses",
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Sending => 1,
            Self::Answering => 2,
            Self::Collecting => 3,
        }
    }
}

/// A point on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressSample {
    pub stage: Stage,
    /// Simulated completion, `0.0..=cap`.
    pub percent: f64,
}

/// Three fixed-duration stages with their percent targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    pub stage_one: Duration,
    pub stage_two: Duration,
    pub stage_three: Duration,
    /// Percent reached at the end of stage 1.
    pub stage_one_target: f64,
    /// Percent reached at the end of stage 2.
    pub stage_two_target: f64,
    /// Percent held once stage 3 is over. Always below 100.
    pub cap: f64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            stage_one: Duration::from_millis(1_000),
            stage_two: Duration::from_millis(2_000),
            stage_three: Duration::from_millis(2_000),
            stage_one_target: 30.0,
            stage_two_target: 70.0,
            cap: 95.0,
        }
    }
}

impl Timeline {
    /// Build a timeline with the default percent targets.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `cap` is not in `(70, 100)`.
    pub fn new(
        stage_one: Duration,
        stage_two: Duration,
        stage_three: Duration,
        cap: f64,
    ) -> Result<Self, CoreError> {
        let defaults = Self::default();
        if !(cap > defaults.stage_two_target && cap < 100.0) {
            return Err(CoreError::Validation(format!(
                "progress cap must be between {} and 100 (exclusive), got {cap}",
                defaults.stage_two_target
            )));
        }
        Ok(Self {
            stage_one,
            stage_two,
            stage_three,
            cap,
            ..defaults
        })
    }

    /// Minimum time the submit step takes, however fast the backend answers.
    #[must_use]
    pub fn floor(&self) -> Duration {
        self.stage_one + self.stage_two + self.stage_three
    }

    /// Stage and percent after `elapsed`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> ProgressSample {
        let stage_two_start = self.stage_one;
        let stage_three_start = self.stage_one + self.stage_two;

        if elapsed < stage_two_start {
            ProgressSample {
                stage: Stage::Sending,
                percent: lerp(0.0, self.stage_one_target, fraction(elapsed, self.stage_one)),
            }
        } else if elapsed < stage_three_start {
            ProgressSample {
                stage: Stage::Answering,
                percent: lerp(
                    self.stage_one_target,
                    self.stage_two_target,
                    fraction(elapsed - stage_two_start, self.stage_two),
                ),
            }
        } else {
            ProgressSample {
                stage: Stage::Collecting,
                percent: lerp(
                    self.stage_two_target,
                    self.cap,
                    fraction(elapsed - stage_three_start, self.stage_three),
                ),
            }
        }
    }
}

fn fraction(elapsed: Duration, span: Duration) -> f64 {
    if span.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / span.as_secs_f64()).clamp(0.0, 1.0)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (to - from).mul_add(t, from)
}
