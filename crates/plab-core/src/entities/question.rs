use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QuestionType;
use crate::errors::CoreError;

/// A locally authored question. Never persisted; only the text is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
}

impl Question {
    fn open(id: String, text: String) -> Self {
        Self {
            id,
            text,
            kind: QuestionType::Open,
        }
    }

    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Editable list of questions for step 2.
///
/// Always holds at least one question. Ids are local and only need to be
/// unique within the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    questions: Vec<Question>,
    next_id: u64,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionDraft {
    /// A draft with a single empty question.
    #[must_use]
    pub fn new() -> Self {
        let mut draft = Self {
            questions: Vec::new(),
            next_id: 1,
        };
        draft.push(String::new());
        draft
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Append an empty question and return its id.
    pub fn add(&mut self) -> String {
        self.push(String::new())
    }

    /// Remove a question by id.
    ///
    /// # Errors
    ///
    /// Refuses to remove the last remaining question, and reports unknown ids.
    pub fn remove(&mut self, id: &str) -> Result<(), CoreError> {
        if self.questions.len() <= 1 {
            return Err(CoreError::Validation(
                "at least one question must remain".into(),
            ));
        }
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        if self.questions.len() == before {
            return Err(CoreError::Validation(format!("unknown question id '{id}'")));
        }
        Ok(())
    }

    /// Replace the text of a question.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for an unknown id.
    pub fn update(&mut self, id: &str, text: impl Into<String>) -> Result<(), CoreError> {
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| CoreError::Validation(format!("unknown question id '{id}'")))?;
        question.text = text.into();
        Ok(())
    }

    /// Put a suggested question into the first blank slot, or append it.
    ///
    /// Returns the id of the question that now holds the suggestion.
    pub fn apply_suggestion(&mut self, suggestion: impl Into<String>) -> String {
        let suggestion = suggestion.into();
        if let Some(question) = self.questions.iter_mut().find(|q| q.is_blank()) {
            question.text = suggestion;
            return question.id.clone();
        }
        self.push(suggestion)
    }

    /// Non-blank question texts in authoring order, ready to submit.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when every question is blank.
    pub fn submission(&self) -> Result<Vec<String>, CoreError> {
        let texts: Vec<String> = self
            .questions
            .iter()
            .filter(|q| !q.is_blank())
            .map(|q| q.text.trim().to_string())
            .collect();
        if texts.is_empty() {
            return Err(CoreError::Validation(
                "enter at least one question".into(),
            ));
        }
        Ok(texts)
    }

    fn push(&mut self, text: String) -> String {
        let id = format!("q-{}", self.next_id);
        self.next_id += 1;
        self.questions.push(Question::open(id.clone(), text));
        id
    }
}

/// One question per text, in order. An empty iterator yields a single blank
/// question.
impl<S: Into<String>> FromIterator<S> for QuestionDraft {
    fn from_iter<I: IntoIterator<Item = S>>(texts: I) -> Self {
        let mut draft = Self {
            questions: Vec::new(),
            next_id: 1,
        };
        for text in texts {
            draft.push(text.into());
        }
        if draft.questions.is_empty() {
            draft.push(String::new());
        }
        draft
    }
}

/// Built-in question templates for a product, used when the backend has no
/// recommendations to offer.
#[must_use]
pub fn suggested_questions(product: &str) -> Vec<String> {
    let product = product.trim();
    vec![
        format!("What is the most inconvenient thing about using {product}?"),
        format!("Which {product} feature do you use most often?"),
        format!("If you could improve {product}, what would you change?"),
        format!("What matters most to you when using {product}?"),
        format!("Have you tried any alternatives to {product}?"),
    ]
}
