use async_trait::async_trait;
use trivia_core::model::QuestionRecord;

use super::QuestionSource;
use crate::error::SourceError;

/// In-memory question list.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionSource {
    questions: Vec<QuestionRecord>,
}

impl StaticQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        if self.questions.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(self.questions.clone())
    }
}
