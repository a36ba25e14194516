//! Simulated progress timeline configuration.

use plab_core::progress::Timeline;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

const fn default_stage_one_ms() -> u64 {
    1_000
}

const fn default_stage_two_ms() -> u64 {
    2_000
}

const fn default_stage_three_ms() -> u64 {
    2_000
}

const fn default_cap_percent() -> f64 {
    95.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProgressConfig {
    #[serde(default = "default_stage_one_ms")]
    pub stage_one_ms: u64,

    #[serde(default = "default_stage_two_ms")]
    pub stage_two_ms: u64,

    #[serde(default = "default_stage_three_ms")]
    pub stage_three_ms: u64,

    /// Percent held while waiting past the simulated floor. Must stay below 100.
    #[serde(default = "default_cap_percent")]
    pub cap_percent: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            stage_one_ms: default_stage_one_ms(),
            stage_two_ms: default_stage_two_ms(),
            stage_three_ms: default_stage_three_ms(),
            cap_percent: default_cap_percent(),
        }
    }
}

impl ProgressConfig {
    /// Build the simulated timeline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `cap_percent` is out of range.
    pub fn timeline(&self) -> Result<Timeline, ConfigError> {
        Timeline::new(
            Duration::from_millis(self.stage_one_ms),
            Duration::from_millis(self.stage_two_ms),
            Duration::from_millis(self.stage_three_ms),
            self.cap_percent,
        )
        .map_err(|error| ConfigError::InvalidValue {
            field: "progress.cap_percent".into(),
            reason: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeline_matches_core_default() {
        let timeline = ProgressConfig::default().timeline().expect("valid defaults");
        assert_eq!(timeline, Timeline::default());
    }

    #[test]
    fn cap_of_hundred_is_invalid() {
        let config = ProgressConfig {
            cap_percent: 100.0,
            ..Default::default()
        };
        let err = config.timeline().unwrap_err();
        assert!(err.to_string().contains("progress.cap_percent"));
    }
}
