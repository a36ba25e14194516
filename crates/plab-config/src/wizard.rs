//! Wizard pacing and local file output.

use plab_core::wizard::DEFAULT_PROCESSING_DELAY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

fn default_processing_delay_ms() -> u64 {
    u64::try_from(DEFAULT_PROCESSING_DELAY.as_millis()).unwrap_or(u64::MAX)
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WizardConfig {
    /// Fixed wait between question submission and fetching insights.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    /// Directory for downloaded reports and local exports.
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
            download_dir: default_download_dir(),
        }
    }
}

impl WizardConfig {
    #[must_use]
    pub const fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = WizardConfig::default();
        assert_eq!(config.processing_delay(), DEFAULT_PROCESSING_DELAY);
        assert_eq!(config.processing_delay_ms, 3_000);
        assert_eq!(config.download_dir, PathBuf::from("."));
    }
}
