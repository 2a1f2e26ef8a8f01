use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::models::response::QuizResponse;
use crate::models::Quiz;
use crate::storage::{FileBackend, MemoryBackend, StorageBackend};

/// Backend key for the quiz collection.
pub const QUIZZES_KEY: &str = "questa_quizzes";
/// Backend key for the response collection.
pub const RESPONSES_KEY: &str = "questa_responses";

/// Repository over two append-only record collections, quizzes and
/// responses, each stored as one JSON array under a fixed backend key.
///
/// The store performs no uniqueness checks and no referential checks: saving
/// two records with the same id stores two records, and a response may point
/// at a quiz id that never resolves. Those conventions belong to the
/// services layered on top.
pub struct QuizStore {
    backend: Box<dyn StorageBackend>,
}

impl QuizStore {
    /// Volatile store for tests and embedding.
    pub fn in_memory() -> Self {
        Self::with_backend(Box::new(MemoryBackend::new()))
    }

    /// File-backed store under the configured data directory.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let backend = FileBackend::new(&config.data_dir)?;
        tracing::debug!("Quiz store opened at {}", config.data_dir.display());
        Ok(Self::with_backend(Box::new(backend)))
    }

    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        QuizStore { backend }
    }

    /// Append-only insert. No validation, no uniqueness check; persists the
    /// entire updated collection.
    pub fn save_quiz(&mut self, quiz: Quiz) -> Result<()> {
        let mut quizzes = self.quizzes()?;
        quizzes.push(quiz);
        self.write(QUIZZES_KEY, &quizzes)
    }

    /// Full quiz collection, insertion order preserved. An absent key reads
    /// as an empty collection; a malformed stored value is an error.
    pub fn quizzes(&self) -> Result<Vec<Quiz>> {
        self.read(QUIZZES_KEY)
    }

    /// Linear scan, first match.
    pub fn quiz_by_id(&self, id: &str) -> Result<Option<Quiz>> {
        Ok(self.quizzes()?.into_iter().find(|quiz| quiz.id == id))
    }

    /// All quizzes owned by `user_id`, insertion order preserved.
    pub fn user_quizzes(&self, user_id: &str) -> Result<Vec<Quiz>> {
        Ok(self
            .quizzes()?
            .into_iter()
            .filter(|quiz| quiz.created_by == user_id)
            .collect())
    }

    /// Append-only insert, same caveats as [`QuizStore::save_quiz`].
    pub fn save_response(&mut self, response: QuizResponse) -> Result<()> {
        let mut responses = self.responses()?;
        responses.push(response);
        self.write(RESPONSES_KEY, &responses)
    }

    /// Full response collection, insertion order preserved.
    pub fn responses(&self) -> Result<Vec<QuizResponse>> {
        self.read(RESPONSES_KEY)
    }

    /// All responses collected for one quiz, insertion order preserved.
    pub fn responses_for_quiz(&self, quiz_id: &str) -> Result<Vec<QuizResponse>> {
        Ok(self
            .responses()?
            .into_iter()
            .filter(|response| response.quiz_id == quiz_id)
            .collect())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.backend.get(key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| {
                tracing::warn!("Stored collection `{}` is not valid JSON: {}", key, source);
                StoreError::Corrupt {
                    key: key.to_string(),
                    source,
                }
            }),
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.set(key, &raw)?;
        tracing::debug!("Persisted {} records under `{}`", records.len(), key);
        Ok(())
    }
}
