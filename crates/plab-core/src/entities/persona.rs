use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::lenient::{lenient_age, null_as_default};
use crate::avatar;
use crate::ids::lenient_string_id;

/// A synthetic respondent ("clone") generated by the backend.
///
/// Read-only on the client. Every field tolerates being absent or `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersonaProfile {
    #[serde(default, deserialize_with = "lenient_string_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub occupation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub personality: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub background: String,
    /// Display glyph. Filled from the occupation when the backend sends none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar: String,
}

impl PersonaProfile {
    /// Fill a missing avatar from the occupation/gender lookup.
    #[must_use]
    pub fn with_avatar(mut self) -> Self {
        if self.avatar.trim().is_empty() {
            self.avatar = avatar::glyph_for(&self.occupation, &self.gender).to_string();
        }
        self
    }
}
