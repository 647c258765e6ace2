use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::quiz::QuizSession;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("answered ({answered}) exceeds total questions ({total})")]
    AnsweredExceedsTotal { answered: usize, total: usize },

    #[error("correct answers ({correct}) exceed answered questions ({answered})")]
    CorrectExceedsAnswered { correct: usize, answered: usize },
}

/// Aggregate outcome of one quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    total: usize,
    answered: usize,
    correct: usize,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `QuizSummaryError` when the counts or the time range are inconsistent.
    pub fn new(
        total: usize,
        answered: usize,
        correct: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if answered > total {
            return Err(QuizSummaryError::AnsweredExceedsTotal { answered, total });
        }
        if correct > answered {
            return Err(QuizSummaryError::CorrectExceedsAnswered { correct, answered });
        }

        Ok(Self {
            total,
            answered,
            correct,
            started_at,
            completed_at,
        })
    }

    /// Summarise a session from its answer log.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    pub fn from_session(
        session: &QuizSession,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        let answers = session.answers();
        let correct = answers.iter().filter(|a| a.is_correct).count();
        Self::new(
            session.total_questions(),
            answers.len(),
            correct,
            started_at,
            completed_at,
        )
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.answered
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn elapsed(&self) -> chrono::Duration {
        self.completed_at - self.started_at
    }
}
