mod decode;
mod file;
mod http;
mod memory;

use async_trait::async_trait;
use trivia_core::model::QuestionRecord;

use crate::error::SourceError;

pub use decode::decode_questions;
pub use file::FileQuestionSource;
pub use http::{
    DEFAULT_QUESTIONS_URL, DEFAULT_TIMEOUT_SECS, HttpQuestionSource, HttpSourceConfig,
};
pub use memory::StaticQuestionSource;

/// Supplies the question list for one quiz attempt.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the full, ordered question list.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the questions cannot be loaded or none are usable.
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, SourceError>;
}
