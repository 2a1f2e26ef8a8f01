mod common;

use anyhow::Result;
use common::{init_tracing, sample_quiz, sample_response};
use questa_store::{QuizStore, StoreConfig, StoreError};
use std::fs;

#[test]
fn collections_survive_a_reopen() -> Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let config = StoreConfig::new(dir.path());

    {
        let mut store = QuizStore::open(&config)?;
        store.save_quiz(sample_quiz("1", "u1"))?;
        store.save_response(sample_response("r1", "1"))?;
    }

    let reopened = QuizStore::open(&config)?;
    assert_eq!(reopened.quiz_by_id("1")?, Some(sample_quiz("1", "u1")));
    assert_eq!(reopened.responses_for_quiz("1")?.len(), 1);
    Ok(())
}

#[test]
fn collections_land_in_the_documented_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = StoreConfig::new(dir.path());

    let mut store = QuizStore::open(&config)?;
    store.save_quiz(sample_quiz("1", "u1"))?;
    store.save_response(sample_response("r1", "1"))?;

    let quizzes_raw = fs::read_to_string(dir.path().join("questa_quizzes.json"))?;
    let responses_raw = fs::read_to_string(dir.path().join("questa_responses.json"))?;

    // Each file is one JSON array with camelCase record keys
    let quizzes: serde_json::Value = serde_json::from_str(&quizzes_raw)?;
    assert_eq!(quizzes.as_array().map(Vec::len), Some(1));
    assert_eq!(quizzes[0]["createdBy"], "u1");
    assert_eq!(quizzes[0]["questions"][0]["type"], "single-choice");

    let responses: serde_json::Value = serde_json::from_str(&responses_raw)?;
    assert_eq!(responses[0]["quizId"], "1");
    Ok(())
}

#[test]
fn open_creates_a_missing_data_dir() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let nested = dir.path().join("questa").join("data");

    let store = QuizStore::open(&StoreConfig::new(&nested))?;
    assert!(nested.is_dir());
    assert!(store.quizzes()?.is_empty());
    Ok(())
}

#[test]
fn corrupt_file_surfaces_a_corrupt_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("questa_quizzes.json"), "{ definitely not")?;

    let store = QuizStore::open(&StoreConfig::new(dir.path()))?;
    assert!(matches!(
        store.quizzes(),
        Err(StoreError::Corrupt { ref key, .. }) if key == "questa_quizzes"
    ));
    Ok(())
}
