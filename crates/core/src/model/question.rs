use serde::Serialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyQuestion,

    #[error("a question needs at least two choices, got {len}")]
    TooFewChoices { len: usize },

    #[error("answer {answer:?} does not match any choice")]
    AnswerNotInChoices { answer: String },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiple-choice trivia question.
///
/// Immutable once built. The answer is stored as text and must equal at least
/// one of the choices; duplicate choice texts are accepted and score alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    question: String,
    choices: Vec<String>,
    answer: String,
    category: Option<String>,
}

impl QuestionRecord {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyQuestion` for blank question text,
    /// `QuestionError::TooFewChoices` for fewer than two choices, and
    /// `QuestionError::AnswerNotInChoices` when no choice equals the answer.
    pub fn new(
        question: impl Into<String>,
        choices: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            return Err(QuestionError::EmptyQuestion);
        }
        if choices.len() < 2 {
            return Err(QuestionError::TooFewChoices { len: choices.len() });
        }
        if !choices.iter().any(|choice| *choice == answer) {
            return Err(QuestionError::AnswerNotInChoices { answer });
        }

        Ok(Self {
            question,
            choices,
            answer,
            category: None,
        })
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            None
        } else {
            Some(category)
        };
        self
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    /// Whether the choice at `index` carries the answer text.
    ///
    /// Compares by value, so two choices with the answer's text are both correct.
    #[must_use]
    pub fn is_correct_choice(&self, index: usize) -> bool {
        self.choice(index).is_some_and(|text| text == self.answer)
    }
}
