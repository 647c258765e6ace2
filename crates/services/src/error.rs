//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::QuizError;
use trivia_core::model::QuizSummaryError;

/// Errors emitted by a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("question source returned no usable questions")]
    Empty,
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed question payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("failed to fetch questions: {0}")]
    Fetch(#[from] SourceError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}
