use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A collection exists under `key` but its stored value is not valid
    /// JSON for the expected record type. Surfaced to the caller instead of
    /// being silently replaced with an empty collection.
    #[error("stored collection `{key}` is corrupt")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode collection: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("quiz `{0}` not found")]
    QuizNotFound(String),

    #[error("quiz `{0}` belongs to another user")]
    NotQuizOwner(String),
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        StoreError::Validation(errors.to_string())
    }
}
