//! Backend API configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

/// Default backend base URL.
fn default_base_url() -> String {
    String::from("http://localhost:5001")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend base URL, without a trailing `/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional request timeout in seconds. Unset means requests never time out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slashes removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// The base URL must be absolute HTTP(S).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for any other scheme or an empty value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if has_host {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http:// or https:// URL, got '{}'", self.base_url),
            })
        }
    }
}
