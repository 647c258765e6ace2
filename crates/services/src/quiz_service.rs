use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use tracing::{debug, info};
use trivia_core::model::QuizSummary;
use trivia_core::{Clock, QuizSession};

use crate::error::QuizServiceError;
use crate::source::QuestionSource;

/// A started quiz: the session plus when it began.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    session: QuizSession,
    started_at: DateTime<Utc>,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(session: QuizSession, started_at: DateTime<Utc>) -> Self {
        Self {
            session,
            started_at,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Summarise the attempt as of `clock.now()`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Summary` if the clock reads earlier than `started_at`.
    pub fn summary(&self, clock: &Clock) -> Result<QuizSummary, QuizServiceError> {
        Ok(QuizSummary::from_session(
            &self.session,
            self.started_at,
            clock.now(),
        )?)
    }
}

/// Fetches questions and starts quiz attempts.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    source: Arc<dyn QuestionSource>,
    shuffle: bool,
    limit: Option<usize>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn QuestionSource>) -> Self {
        Self {
            clock,
            source,
            shuffle: false,
            limit: None,
        }
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Cap the number of questions per attempt. Applied after shuffling.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Fetch the question list and start a new attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Fetch` when the source fails and
    /// `QuizServiceError::Quiz` when no questions remain after the limit.
    pub async fn start(&self) -> Result<QuizAttempt, QuizServiceError> {
        let mut questions = self.source.fetch().await?;
        let fetched = questions.len();

        if self.shuffle {
            questions.shuffle(&mut rand::rng());
        }
        if let Some(limit) = self.limit {
            questions.truncate(limit);
        }
        debug!(fetched, kept = questions.len(), shuffle = self.shuffle, "prepared questions");

        let session = QuizSession::new(questions)?;
        info!(questions = session.total_questions(), "quiz started");
        Ok(QuizAttempt::new(session, self.clock.now()))
    }
}
