use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;
use trivia_core::model::QuestionRecord;

use super::{QuestionSource, decode_questions};
use crate::error::SourceError;

/// Reads questions from a local JSON file in the same shape the endpoint serves.
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let questions = decode_questions(&bytes)?;
        info!(path = %self.path.display(), count = questions.len(), "loaded questions from file");
        Ok(questions)
    }
}
