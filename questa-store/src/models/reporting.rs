use chrono::{DateTime, Utc};
use serde::Serialize;

use super::response::QuizResponse;
use super::Quiz;

/// One dashboard card: a quiz owned by the requesting user, with counts.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOverview {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub question_count: usize,

    /// Number of collected responses (filled in by the service)
    pub response_count: usize,

    pub created_at: DateTime<Utc>,
}

impl From<&Quiz> for QuizOverview {
    fn from(quiz: &Quiz) -> Self {
        QuizOverview {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            question_count: quiz.questions.len(),
            response_count: 0, // filled in by the service
            created_at: quiz.created_at,
        }
    }
}

/// A quiz together with its collected responses, insertion order preserved.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseListing {
    pub quiz: Quiz,
    pub responses: Vec<QuizResponse>,
}

impl ResponseListing {
    pub fn total(&self) -> usize {
        self.responses.len()
    }
}
