//! Tolerant normalization of insight payloads.
//!
//! Evidence items and respondent answers arrive as plain strings, JSON-encoded
//! strings, or objects whose text and name live under varying keys. Each item
//! is classified once into an [`Evidence`] shape and reduced to a
//! [`DisplayEntry`]; renderers only ever see the canonical form.
//!
//! Free-text answers may carry a reasoning trace closed by [`REASONING_CLOSE_TAG`];
//! [`strip_reasoning`] drops it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::entities::{InsightReport, Recommendation};

/// Closing delimiter of a prepended reasoning trace.
pub const REASONING_CLOSE_TAG: &str = "</think>";

/// Name shown when a payload carries no respondent name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Which object keys carry the respondent name and the text.
#[derive(Debug, Clone, Copy)]
pub struct KeySet {
    pub names: &'static [&'static str],
    pub texts: &'static [&'static str],
}

/// Keys read from `supporting_evidence` items.
pub const EVIDENCE_KEYS: KeySet = KeySet {
    names: &["clone_name"],
    texts: &["evidence", "response", "text"],
};

/// Keys read from `detailed_responses[].responses` items.
pub const ANSWER_KEYS: KeySet = KeySet {
    names: &["clone_name", "name"],
    texts: &["answer", "response", "text", "evidence"],
};

/// Canonical `{name, text}` pair consumed by every renderer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DisplayEntry {
    pub name: Option<String>,
    pub text: String,
}

impl DisplayEntry {
    /// Name for display, falling back to [`UNKNOWN_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

impl fmt::Display for DisplayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}: {}", self.text),
            None => f.write_str(&self.text),
        }
    }
}

/// Wire shapes an evidence or answer item can take.
#[derive(Debug, Clone, PartialEq)]
pub enum Evidence {
    /// A plain string, shown as-is.
    Plain(String),
    /// A string holding a JSON object with a `clone_name` key.
    Encoded(Map<String, Value>),
    /// A JSON object.
    Structured(Map<String, Value>),
    /// Anything else (numbers, arrays, booleans, null).
    Other(Value),
}

impl Evidence {
    /// Classify a raw payload item.
    #[must_use]
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::String(raw) => Self::classify_str(raw),
            Value::Object(map) => Self::Structured(map.clone()),
            other => Self::Other(other.clone()),
        }
    }

    fn classify_str(raw: &str) -> Self {
        if raw.trim_start().starts_with('{') && raw.contains("clone_name") {
            if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
                return Self::Encoded(map);
            }
        }
        Self::Plain(raw.to_string())
    }

    /// Reduce to a display entry using the given key set.
    ///
    /// Objects always get a name (default [`UNKNOWN_NAME`]); their text is
    /// the first non-empty text key, or the whole object as compact JSON.
    #[must_use]
    pub fn normalize(&self, keys: KeySet) -> DisplayEntry {
        match self {
            Self::Plain(text) => DisplayEntry {
                name: None,
                text: text.clone(),
            },
            Self::Encoded(map) | Self::Structured(map) => DisplayEntry {
                name: Some(
                    first_present(map, keys.names).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                ),
                text: first_present(map, keys.texts)
                    .unwrap_or_else(|| Value::Object(map.clone()).to_string()),
            },
            Self::Other(value) => DisplayEntry {
                name: None,
                text: stringify(value),
            },
        }
    }
}

fn first_present(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .map(stringify)
        .find(|text| !text.is_empty())
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Format one `supporting_evidence` item as `"<name>: <text>"` or the raw text.
#[must_use]
pub fn format_evidence(value: &Value) -> String {
    Evidence::classify(value).normalize(EVIDENCE_KEYS).to_string()
}

/// Normalize one respondent answer, stripping any reasoning trace.
#[must_use]
pub fn normalize_answer(value: &Value) -> DisplayEntry {
    let mut entry = Evidence::classify(value).normalize(ANSWER_KEYS);
    entry.text = strip_reasoning(&entry.text);
    entry
}

/// Drop everything up to and including the first [`REASONING_CLOSE_TAG`], then trim.
#[must_use]
pub fn strip_reasoning(text: &str) -> String {
    text.find(REASONING_CLOSE_TAG)
        .map_or(text, |idx| &text[idx + REASONING_CLOSE_TAG.len()..])
        .trim()
        .to_string()
}

// ── Normalized report ──────────────────────────────────────────────

/// A finding with its evidence already formatted for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NormalizedInsight {
    pub title: String,
    pub description: String,
    pub evidence: Vec<String>,
}

/// All answers to one question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NormalizedQuestion {
    pub question: String,
    pub answers: Vec<DisplayEntry>,
}

/// Display-ready insight report. Produced once per fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NormalizedReport {
    pub summary: Option<String>,
    pub key_themes: Vec<String>,
    pub insights: Vec<NormalizedInsight>,
    pub recommendations: Vec<Recommendation>,
    pub responses: Vec<NormalizedQuestion>,
    pub insights_count: u64,
}

impl NormalizedReport {
    /// True when the backend returned nothing worth rendering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.key_themes.is_empty()
            && self.insights.is_empty()
            && self.recommendations.is_empty()
            && self.responses.is_empty()
    }
}

impl From<&InsightReport> for NormalizedReport {
    fn from(report: &InsightReport) -> Self {
        let summary = Some(report.summary.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let key_themes = report
            .key_themes
            .iter()
            .map(|theme| theme.trim())
            .filter(|theme| !theme.is_empty())
            .map(str::to_string)
            .collect();

        let insights: Vec<NormalizedInsight> = report
            .insights
            .iter()
            .map(|item| NormalizedInsight {
                title: item.title.clone(),
                description: item.description.clone(),
                evidence: item.supporting_evidence.iter().map(format_evidence).collect(),
            })
            .collect();

        let responses = report
            .detailed_responses
            .iter()
            .map(|group| NormalizedQuestion {
                question: group.question_text.clone(),
                answers: group.responses.iter().map(normalize_answer).collect(),
            })
            .collect();

        let insights_count = report
            .insights_count
            .unwrap_or_else(|| u64::try_from(insights.len()).unwrap_or(u64::MAX));

        Self {
            summary,
            key_themes,
            insights,
            recommendations: report.recommendations.clone(),
            responses,
            insights_count,
        }
    }
}
