#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use questa_store::models::response::QuizResponse;
use questa_store::models::{Question, QuestionKind, Quiz};
use questa_store::QuizStore;
use std::collections::HashMap;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// In-memory store with tracing initialized for tests.
pub fn test_store() -> QuizStore {
    init_tracing();
    QuizStore::in_memory()
}

/// Two-question public quiz with deterministic fields.
pub fn sample_quiz(id: &str, created_by: &str) -> Quiz {
    Quiz {
        id: id.to_string(),
        title: format!("Quiz {}", id),
        description: None,
        questions: vec![
            Question {
                id: format!("{}-q1", id),
                kind: QuestionKind::SingleChoice,
                prompt: "Capital of France?".to_string(),
                options: Some(vec!["Paris".to_string(), "Lyon".to_string()]),
            },
            Question {
                id: format!("{}-q2", id),
                kind: QuestionKind::Text,
                prompt: "Capital of Japan?".to_string(),
                options: None,
            },
        ],
        created_by: created_by.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap(),
        is_public: true,
    }
}

/// Response answering only the first question of [`sample_quiz`].
pub fn sample_response(id: &str, quiz_id: &str) -> QuizResponse {
    QuizResponse {
        id: id.to_string(),
        quiz_id: quiz_id.to_string(),
        answers: HashMap::from([(format!("{}-q1", quiz_id), "Paris".to_string())]),
        submitted_at: Utc.with_ymd_and_hms(2024, 5, 3, 14, 30, 0).unwrap(),
        submitter_name: Some("Ada".to_string()),
    }
}
