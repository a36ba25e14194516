use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::{lenient_strings, null_as_default};

/// Raw response of `GET /api/insights/analyze/{id}`.
///
/// Evidence and per-respondent answers keep their wire shape (`Value`); run
/// the report through [`crate::normalize::NormalizedReport`] before display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InsightReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub key_themes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub insights: Vec<InsightItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<Recommendation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detailed_responses: Vec<QuestionResponses>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saved_insights: Vec<Value>,
    #[serde(default)]
    pub insights_count: Option<u64>,
}

/// One synthesized finding with the evidence that backs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InsightItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supporting_evidence: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rationale: String,
}

/// Answers collected for a single question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QuestionResponses {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responses: Vec<Value>,
}
