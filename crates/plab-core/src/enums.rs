//! Step, filter, and format enums for Persona Lab.
//!
//! Wire-facing enums serialize to the exact strings the backend expects.
//! [`WizardStep`] provides `allowed_next_states()` so the controller can
//! reject transitions the four-step flow does not define.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// WizardStep
// ---------------------------------------------------------------------------

/// Active step of the research wizard.
///
/// ```text
/// setup → questions → collecting → insights
///   ↑__________ reset (from any step) ________|
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Setup,
    Questions,
    Collecting,
    Insights,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [Self; 4] = [Self::Setup, Self::Questions, Self::Collecting, Self::Insights];

    /// Valid forward transitions. Reset is handled separately and is always allowed.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Setup => &[Self::Questions],
            Self::Questions => &[Self::Collecting],
            Self::Collecting => &[Self::Insights],
            Self::Insights => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// One-based step number shown to the user.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Setup => 1,
            Self::Questions => 2,
            Self::Collecting => 3,
            Self::Insights => 4,
        }
    }

    /// Overall wizard progress for this step, in percent.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.number() * 25
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Setup => "Research setup",
            Self::Questions => "Question authoring",
            Self::Collecting => "Collecting responses",
            Self::Insights => "Insight analysis",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Questions => "questions",
            Self::Collecting => "collecting",
            Self::Insights => "insights",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AgeRange
// ---------------------------------------------------------------------------

/// Age bracket offered by the setup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AgeRange {
    #[serde(rename = "20-25")]
    From20To25,
    #[serde(rename = "26-30")]
    From26To30,
    #[serde(rename = "31-35")]
    From31To35,
    #[serde(rename = "36-40")]
    From36To40,
    #[serde(rename = "41+")]
    Over40,
}

impl AgeRange {
    pub const ALL: [Self; 5] = [
        Self::From20To25,
        Self::From26To30,
        Self::From31To35,
        Self::From36To40,
        Self::Over40,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From20To25 => "20-25",
            Self::From26To30 => "26-30",
            Self::From31To35 => "31-35",
            Self::From36To40 => "36-40",
            Self::Over40 => "41+",
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeRange {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == trimmed)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "invalid age range '{raw}' (expected one of 20-25, 26-30, 31-35, 36-40, 41+)"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// GenderFilter
// ---------------------------------------------------------------------------

/// Gender filter applied when the backend picks personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GenderFilter {
    All,
    Male,
    Female,
}

impl GenderFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenderFilter {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(CoreError::Validation(format!(
                "invalid gender '{raw}' (expected all, male or female)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// QuestionType
// ---------------------------------------------------------------------------

/// Kind of question. Only `open` is produced by the authoring flow today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    Open,
    Rating,
    Choice,
}

impl QuestionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Rating => "rating",
            Self::Choice => "choice",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportFormat
// ---------------------------------------------------------------------------

/// File format requested from the report download endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Json,
    #[default]
    Pdf,
}

impl ReportFormat {
    /// Query parameter value and fallback file extension.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pdf" => Ok(Self::Pdf),
            _ => Err(CoreError::Validation(format!(
                "invalid report format '{raw}' (expected json or pdf)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(step_collecting, WizardStep, WizardStep::Collecting, "collecting");
    test_serde_roundtrip!(age_young, AgeRange, AgeRange::From20To25, "20-25");
    test_serde_roundtrip!(age_over_forty, AgeRange, AgeRange::Over40, "41+");
    test_serde_roundtrip!(gender_all, GenderFilter, GenderFilter::All, "all");
    test_serde_roundtrip!(question_open, QuestionType, QuestionType::Open, "open");
    test_serde_roundtrip!(format_pdf, ReportFormat, ReportFormat::Pdf, "pdf");

    #[test]
    fn steps_only_move_forward_one_at_a_time() {
        assert!(WizardStep::Setup.can_transition_to(WizardStep::Questions));
        assert!(WizardStep::Questions.can_transition_to(WizardStep::Collecting));
        assert!(WizardStep::Collecting.can_transition_to(WizardStep::Insights));
        assert!(!WizardStep::Setup.can_transition_to(WizardStep::Insights));
        assert!(!WizardStep::Questions.can_transition_to(WizardStep::Setup));
        assert!(WizardStep::Insights.allowed_next_states().is_empty());
    }

    #[test]
    fn step_numbers_and_percent() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(WizardStep::Questions.percent(), 50);
        assert_eq!(WizardStep::Insights.percent(), 100);
    }

    #[test]
    fn age_range_parses_display_form() {
        for range in AgeRange::ALL {
            assert_eq!(range.as_str().parse::<AgeRange>().unwrap(), range);
        }
        assert!("18-19".parse::<AgeRange>().is_err());
    }

    #[test]
    fn gender_and_format_parse_case_insensitive() {
        assert_eq!("Female".parse::<GenderFilter>().unwrap(), GenderFilter::Female);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        let err = "xml".parse::<ReportFormat>().unwrap_err();
        assert!(err.to_string().contains("invalid report format 'xml'"));
    }
}
