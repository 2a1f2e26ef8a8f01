use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub mod reporting;
pub mod response;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    SingleChoice,
    Text,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "single-choice",
            QuestionKind::Text => "text",
        }
    }
}

/// A question inside a quiz. `options` is present exactly when the question
/// is single-choice; the convention is upheld by the creation service, never
/// by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Quiz record persisted under the `questa_quizzes` collection.
///
/// Serialized field names stay camelCase so an existing data directory
/// keeps loading unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Insertion order is display order.
    pub questions: Vec<Question>,

    /// Owning user id (ref: external auth collaborator, unenforced)
    pub created_by: String,

    pub created_at: DateTime<Utc>,

    /// Always set to `true` on the creation path; checked only by the
    /// response submission guard.
    pub is_public: bool,
}

/// Request to create a quiz
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewQuiz {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    pub description: Option<String>,

    pub questions: Vec<QuestionDraft>,
}

/// A question as entered in the quiz builder, before ids are assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDraft {
    pub kind: QuestionKind,
    pub prompt: String,

    /// Ignored for text questions.
    #[serde(default)]
    pub options: Vec<String>,
}

impl QuestionDraft {
    pub fn single_choice(prompt: impl Into<String>, options: &[&str]) -> Self {
        QuestionDraft {
            kind: QuestionKind::SingleChoice,
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn text(prompt: impl Into<String>) -> Self {
        QuestionDraft {
            kind: QuestionKind::Text,
            prompt: prompt.into(),
            options: Vec::new(),
        }
    }

    /// A draft is complete when its prompt has text and, for single-choice,
    /// at least two options have non-blank text. Incomplete drafts are
    /// dropped at creation time rather than rejected.
    pub fn is_complete(&self) -> bool {
        if self.prompt.trim().is_empty() {
            return false;
        }
        match self.kind {
            QuestionKind::SingleChoice => {
                self.options.iter().filter(|o| !o.trim().is_empty()).count() >= 2
            }
            QuestionKind::Text => true,
        }
    }
}
