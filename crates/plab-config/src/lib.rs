//! # plab-config
//!
//! Layered configuration loading for Persona Lab using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PLAB_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.plab/config.toml`
//! 4. User-level `~/.config/persona-lab/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PLAB_API__BASE_URL` -> `api.base_url`,
//! `PLAB_WIZARD__PROCESSING_DELAY_MS` -> `wizard.processing_delay_ms`, etc.
//! The API base URL override is the only variable most deployments need.
//!
//! # Usage
//!
//! ```no_run
//! use plab_config::PlabConfig;
//!
//! let config = PlabConfig::load_with_dotenv(None).expect("config");
//! println!("backend: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod progress;
mod wizard;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use progress::ProgressConfig;
pub use wizard::WizardConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for all overrides.
pub const ENV_PREFIX: &str = "PLAB_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlabConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl PlabConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".plab/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.progress.timeline()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("persona-lab").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PlabConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url(), "http://localhost:5001");
        assert_eq!(config.wizard.processing_delay_ms, 3_000);
        assert_eq!(config.progress.stage_one_ms, 1_000);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = PlabConfig::figment(None);
        let config: PlabConfig = figment.extract().expect("should extract defaults");
        assert!(config.api.timeout_secs.is_none());
    }
}
