//! Entity structs for Persona Lab domain objects.
//!
//! Wire-facing structs are decoded defensively: absent or `null` fields fall
//! back to their defaults so a partially-filled backend payload still renders.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod lenient;
mod persona;
mod profile;
mod question;
mod report;

pub use persona::PersonaProfile;
pub use profile::ResearchProfile;
pub use question::{Question, QuestionDraft, suggested_questions};
pub use report::{InsightItem, InsightReport, QuestionResponses, Recommendation};
