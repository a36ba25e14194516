//! Local export of a finished research run.
//!
//! Independent of the server-side report download: the client assembles the
//! profile, the per-question answers and the insights it already holds into
//! one pretty-printed JSON document.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{PersonaProfile, Recommendation, ResearchProfile};
use crate::normalize::{NormalizedInsight, NormalizedQuestion, NormalizedReport};

/// Insight section of the export document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportedInsights {
    pub summary: Option<String>,
    pub key_themes: Vec<String>,
    pub findings: Vec<NormalizedInsight>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportDocument {
    pub research_data: Option<ResearchProfile>,
    pub personas: Vec<PersonaProfile>,
    pub responses: Vec<NormalizedQuestion>,
    pub insights: ExportedInsights,
    pub timestamp: DateTime<Utc>,
}

impl ExportDocument {
    #[must_use]
    pub fn new(
        profile: Option<&ResearchProfile>,
        personas: &[PersonaProfile],
        report: &NormalizedReport,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            research_data: profile.cloned(),
            personas: personas.to_vec(),
            responses: report.responses.clone(),
            insights: ExportedInsights {
                summary: report.summary.clone(),
                key_themes: report.key_themes.clone(),
                findings: report.insights.clone(),
                recommendations: report.recommendations.clone(),
            },
            timestamp,
        }
    }

    /// `research-results-<unix-millis>.json`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("research-results-{}.json", self.timestamp.timestamp_millis())
    }

    /// Pretty-printed JSON body.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::InsightReport;
    use chrono::TimeZone;

    #[test]
    fn file_name_uses_unix_millis() {
        let timestamp = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let doc = ExportDocument::new(None, &[], &NormalizedReport::default(), timestamp);
        assert_eq!(doc.file_name(), "research-results-1700000000123.json");
    }

    #[test]
    fn document_carries_profile_responses_and_insights() {
        let report: InsightReport = serde_json::from_value(serde_json::json!({
            "summary": "ok",
            "detailed_responses": [{"question_text": "Q?", "responses": ["A"]}]
        }))
        .unwrap();
        let profile = ResearchProfile {
            product: "Notion".into(),
            target_audience: "students".into(),
            ..Default::default()
        };

        let doc = ExportDocument::new(
            Some(&profile),
            &[],
            &NormalizedReport::from(&report),
            Utc::now(),
        );
        let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        assert_eq!(json["research_data"]["product"], "Notion");
        assert_eq!(json["responses"][0]["question"], "Q?");
        assert_eq!(json["responses"][0]["answers"][0]["text"], "A");
        assert_eq!(json["insights"]["summary"], "ok");
        assert!(json["timestamp"].is_string());
    }
}
