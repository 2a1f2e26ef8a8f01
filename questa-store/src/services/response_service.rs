use chrono::Utc;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::reporting::ResponseListing;
use crate::models::response::{QuizResponse, SubmittedAnswers};
use crate::store::QuizStore;

pub struct ResponseService<'a> {
    store: &'a mut QuizStore,
}

impl<'a> ResponseService<'a> {
    pub fn new(store: &'a mut QuizStore) -> Self {
        ResponseService { store }
    }

    /// Records a respondent's answers against a published quiz.
    ///
    /// A quiz that does not resolve, or that is not public, reads as not
    /// found. Answers are stored as given: any subset of questions may be
    /// answered and keys are not checked against the quiz's question ids.
    pub fn submit(&mut self, quiz_id: &str, submission: SubmittedAnswers) -> Result<QuizResponse> {
        let quiz = self
            .store
            .quiz_by_id(quiz_id)?
            .filter(|quiz| quiz.is_public)
            .ok_or_else(|| StoreError::QuizNotFound(quiz_id.to_string()))?;

        let response = QuizResponse {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz.id,
            answers: submission.answers,
            submitted_at: Utc::now(),
            submitter_name: submission
                .submitter_name
                .filter(|name| !name.trim().is_empty()),
        };

        self.store.save_response(response.clone())?;
        tracing::info!(
            "Response {} recorded for quiz {}",
            response.id,
            response.quiz_id
        );

        Ok(response)
    }

    /// Responses collected for one quiz, restricted to the quiz owner.
    pub fn responses_for_owner(&self, quiz_id: &str, user_id: &str) -> Result<ResponseListing> {
        let quiz = self
            .store
            .quiz_by_id(quiz_id)?
            .ok_or_else(|| StoreError::QuizNotFound(quiz_id.to_string()))?;

        if quiz.created_by != user_id {
            return Err(StoreError::NotQuizOwner(quiz_id.to_string()));
        }

        let responses = self.store.responses_for_quiz(quiz_id)?;
        Ok(ResponseListing { quiz, responses })
    }
}
