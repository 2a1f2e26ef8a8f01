use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response record persisted under the `questa_responses` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub id: String,

    /// Quiz this response belongs to (unenforced at the store layer).
    pub quiz_id: String,

    /// Keyed by question id; keys are present only for questions the
    /// respondent actually answered.
    pub answers: HashMap<String, String>,

    pub submitted_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter_name: Option<String>,
}

impl QuizResponse {
    /// Submitted text for one question, if the respondent answered it.
    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }
}

/// Answers as collected from a respondent, before an id is assigned.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmittedAnswers {
    /// Any subset of the quiz's questions may be answered; keys are not
    /// checked against the quiz's question ids.
    #[serde(default)]
    pub answers: HashMap<String, String>,

    pub submitter_name: Option<String>,
}
