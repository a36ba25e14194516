//! Serde roundtrip and JsonSchema validation tests for entity and output types.

use chrono::Utc;
use plab_core::entities::*;
use plab_core::enums::*;
use plab_core::export::ExportDocument;
use plab_core::ids::SessionId;
use plab_core::normalize::NormalizedReport;
use plab_core::wizard::{WizardController, WizardSnapshot};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn profile() -> ResearchProfile {
    ResearchProfile {
        product: "YouTube".into(),
        target_audience: "commuters".into(),
        age_range: Some(AgeRange::From26To30),
        gender: Some(GenderFilter::All),
        occupation: "developer".into(),
        additional_context: "mobile usage".into(),
    }
}

fn persona() -> PersonaProfile {
    PersonaProfile {
        id: "2".into(),
        name: "Park Junho".into(),
        age: Some(28),
        gender: "male".into(),
        occupation: "Frontend developer".into(),
        personality: "logical".into(),
        background: "five years at a large company".into(),
        avatar: "👨‍💻".into(),
    }
}

fn report() -> InsightReport {
    serde_json::from_value(serde_json::json!({
        "summary": "Ads are the main pain point.",
        "key_themes": ["ads", "background play"],
        "insights": [{
            "title": "Ad fatigue",
            "description": "Mid-roll ads break immersion",
            "supporting_evidence": [{"clone_name": "Minji", "evidence": "too many ads"}]
        }],
        "recommendations": [{"action": "Cap ads", "rationale": "Retention"}],
        "detailed_responses": [{
            "question_text": "What bothers you?",
            "responses": [{"clone_name": "Sujin", "answer": "algorithm bias"}]
        }],
        "saved_insights": [],
        "insights_count": 1
    }))
    .unwrap()
}

roundtrip_and_validate!(research_profile_roundtrip, ResearchProfile, profile());
roundtrip_and_validate!(persona_roundtrip, PersonaProfile, persona());
roundtrip_and_validate!(insight_report_roundtrip, InsightReport, report());
roundtrip_and_validate!(
    normalized_report_roundtrip,
    NormalizedReport,
    NormalizedReport::from(&report())
);
roundtrip_and_validate!(wizard_snapshot_roundtrip, WizardSnapshot, {
    let mut wizard = WizardController::new();
    wizard
        .complete_setup(profile(), vec![persona()], SessionId::new("res-9"))
        .unwrap();
    wizard.snapshot()
});
roundtrip_and_validate!(
    export_document_roundtrip,
    ExportDocument,
    ExportDocument::new(
        Some(&profile()),
        &[persona()],
        &NormalizedReport::from(&report()),
        Utc::now(),
    )
);
