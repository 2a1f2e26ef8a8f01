use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Result, StoreError};
use crate::models::reporting::QuizOverview;
use crate::models::{NewQuiz, Question, QuestionDraft, QuestionKind, Quiz};
use crate::store::QuizStore;
use crate::utils::share;

pub struct QuizService<'a> {
    store: &'a mut QuizStore,
}

impl<'a> QuizService<'a> {
    pub fn new(store: &'a mut QuizStore) -> Self {
        QuizService { store }
    }

    /// Creates and persists a quiz from builder input.
    ///
    /// Incomplete question drafts are dropped silently; the request is
    /// rejected when the trimmed title is empty or fewer than two complete
    /// questions remain. Option text of surviving questions is stored
    /// verbatim, blanks included; only the completeness count trims.
    pub fn create_quiz(&mut self, user_id: &str, new_quiz: NewQuiz) -> Result<Quiz> {
        new_quiz.validate()?;

        if new_quiz.title.trim().is_empty() {
            return Err(StoreError::Validation(
                "quiz title must not be empty".to_string(),
            ));
        }

        let questions: Vec<Question> = new_quiz
            .questions
            .iter()
            .filter(|draft| draft.is_complete())
            .map(materialize)
            .collect();

        if questions.len() < 2 {
            return Err(StoreError::Validation(
                "a quiz needs at least 2 complete questions".to_string(),
            ));
        }

        let quiz = Quiz {
            id: Uuid::new_v4().to_string(),
            title: new_quiz.title,
            description: new_quiz
                .description
                .filter(|description| !description.trim().is_empty()),
            questions,
            created_by: user_id.to_string(),
            created_at: Utc::now(),
            is_public: true,
        };

        self.store.save_quiz(quiz.clone())?;
        tracing::info!(
            "Quiz {} created by {} with {} questions",
            quiz.id,
            user_id,
            quiz.questions.len()
        );

        Ok(quiz)
    }

    /// Dashboard listing: every quiz owned by `user_id` in insertion order,
    /// each with its current response count.
    pub fn overview(&self, user_id: &str) -> Result<Vec<QuizOverview>> {
        self.store
            .user_quizzes(user_id)?
            .iter()
            .map(|quiz| {
                let mut card = QuizOverview::from(quiz);
                card.response_count = self.store.responses_for_quiz(&quiz.id)?.len();
                Ok(card)
            })
            .collect()
    }

    /// Shareable link for a quiz, `{base}/quiz/{quiz_id}`.
    pub fn share_url(&self, base: &str, quiz_id: &str) -> String {
        share::quiz_url(base, quiz_id)
    }
}

fn materialize(draft: &QuestionDraft) -> Question {
    Question {
        id: Uuid::new_v4().to_string(),
        kind: draft.kind,
        prompt: draft.prompt.clone(),
        options: match draft.kind {
            QuestionKind::SingleChoice => Some(draft.options.clone()),
            QuestionKind::Text => None,
        },
    }
}
