#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod quiz_service;
pub mod source;

pub use reqwest::StatusCode;
pub use trivia_core::Clock;

pub use error::{QuizServiceError, SourceError};
pub use loader::{Applied, LoadState, LoadTicket, QuizLoader};
pub use quiz_service::{QuizAttempt, QuizService};
pub use source::{
    DEFAULT_QUESTIONS_URL, DEFAULT_TIMEOUT_SECS, FileQuestionSource, HttpQuestionSource,
    HttpSourceConfig, QuestionSource, StaticQuestionSource, decode_questions,
};
