//! Identifier types.
//!
//! The backend hands out research ids and persona ids as either JSON strings
//! or numbers. Both are normalized to strings here so the rest of the crate
//! never branches on the wire representation.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque research session identifier issued by `POST /api/research/setup`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Build a session id from a non-blank string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Interpret a loosely-typed JSON value as a session id.
    ///
    /// Strings and numbers are accepted; `null`, blank strings and any other
    /// shape yield `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        id_from_value(value).and_then(Self::new)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stringify a string-or-number id. Other shapes have no id.
#[must_use]
pub fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Serde helper: optional session id from string, number, or null.
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a JSON value.
pub fn optional_session_id<'de, D>(deserializer: D) -> Result<Option<SessionId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(SessionId::from_value))
}

/// Serde helper: string-or-number id, empty when absent or of another shape.
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a JSON value.
pub fn lenient_string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_from_value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_id_accepts_strings_and_numbers() {
        assert_eq!(
            SessionId::from_value(&json!("res-42")).map(|id| id.to_string()),
            Some("res-42".to_string())
        );
        assert_eq!(
            SessionId::from_value(&json!(42)).map(|id| id.to_string()),
            Some("42".to_string())
        );
    }

    #[test]
    fn session_id_rejects_null_blank_and_objects() {
        assert!(SessionId::from_value(&Value::Null).is_none());
        assert!(SessionId::from_value(&json!("   ")).is_none());
        assert!(SessionId::from_value(&json!({"id": 1})).is_none());
    }

    #[test]
    fn optional_session_id_helper() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "optional_session_id")]
            research_id: Option<SessionId>,
        }

        let with_number: Payload = serde_json::from_str(r#"{"research_id": 7}"#).unwrap();
        assert_eq!(with_number.research_id.unwrap().as_str(), "7");

        let with_null: Payload = serde_json::from_str(r#"{"research_id": null}"#).unwrap();
        assert!(with_null.research_id.is_none());

        let missing: Payload = serde_json::from_str("{}").unwrap();
        assert!(missing.research_id.is_none());
    }
}
