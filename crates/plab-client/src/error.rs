//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the research backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, timeout, body decode.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status. `message` is either the
    /// server's own `message` field or a fixed per-operation fallback, and is
    /// shown to the user as is.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// User-facing message.
        message: String,
    },

    /// A success response whose body could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// Writing a downloaded report to disk failed.
    #[error("failed to save report to {path}: {source}")]
    Save {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status when the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
