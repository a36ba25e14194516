use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AgeRange, GenderFilter};
use crate::errors::CoreError;

/// Product and audience description entered in step 1.
///
/// Immutable once submitted; the wizard controller owns it for the rest of
/// the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchProfile {
    pub product: String,
    pub target_audience: String,
    pub age_range: Option<AgeRange>,
    pub gender: Option<GenderFilter>,
    /// Occupation or field, free text.
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub additional_context: String,
}

impl ResearchProfile {
    /// Product name and target audience are required.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first blank required field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.product.trim().is_empty() {
            return Err(CoreError::Validation("product name is required".into()));
        }
        if self.target_audience.trim().is_empty() {
            return Err(CoreError::Validation("target audience is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ResearchProfile {
        ResearchProfile {
            product: "Notion".into(),
            target_audience: "students".into(),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_profile_is_valid() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn blank_product_is_rejected() {
        let profile = ResearchProfile {
            product: "   ".into(),
            ..profile()
        };
        let err = profile.validate().unwrap_err();
        assert_eq!(err, CoreError::Validation("product name is required".into()));
    }

    #[test]
    fn blank_audience_is_rejected() {
        let profile = ResearchProfile {
            target_audience: String::new(),
            ..profile()
        };
        assert!(profile.validate().is_err());
    }
}
