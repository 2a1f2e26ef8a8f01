//! Local quiz store: durable storage and retrieval of quizzes and their
//! collected responses, keyed by generated identifiers, plus the service
//! layer for quiz creation, response submission and owner-scoped review.
//!
//! The repository is backed by a pluggable string key-value store
//! ([`storage::StorageBackend`]): an in-memory map for tests and embedding,
//! or a per-key JSON file layout on disk for persistence.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;
pub mod utils;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use store::QuizStore;
