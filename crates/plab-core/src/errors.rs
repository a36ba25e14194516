//! Cross-cutting error types for Persona Lab.
//!
//! Network errors live in `plab-client` and configuration errors in
//! `plab-config`; the CLI converges everything into `anyhow`.

use thiserror::Error;

use crate::enums::WizardStep;

/// Errors raised by the wizard controller and local validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A wizard transition was attempted that is not allowed from the current step.
    #[error("Invalid wizard transition from {from} to {to}")]
    InvalidTransition { from: WizardStep, to: WizardStep },

    /// An operation needs a research session id and none was issued.
    #[error("No research session id is available; start a new research to continue")]
    MissingSession,

    /// Data failed validation (required field, empty question list, ...).
    #[error("Validation error: {0}")]
    Validation(String),
}
