use services::{QuizAttempt, QuizServiceError};
use trivia_core::model::QuizSummary;
use trivia_core::{Advance, Clock, QuizError, Selection};
use tracing::debug;

use crate::vm::screen_vm::{QuizScreenVm, map_quiz_screen};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Submit,
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed,
}

type Subscriber = Box<dyn FnMut(&QuizScreenVm) + Send>;

/// View model for one quiz attempt.
///
/// Subscribers receive a fresh `QuizScreenVm` whenever an intent changes what
/// the screen shows. Contract violations become a notice on the screen and
/// always produce a frame, even when the same notice is already showing.
pub struct QuizVm {
    attempt: QuizAttempt,
    notice: Option<&'static str>,
    subscribers: Vec<Subscriber>,
}

impl QuizVm {
    #[must_use]
    pub fn new(attempt: QuizAttempt) -> Self {
        Self {
            attempt,
            notice: None,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&QuizScreenVm) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        map_quiz_screen(self.attempt.session(), self.notice)
    }

    #[must_use]
    pub fn attempt(&self) -> &QuizAttempt {
        &self.attempt
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.attempt.session().is_complete()
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::Summary` if the clock is behind the attempt start.
    pub fn summary(&self, clock: &Clock) -> Result<QuizSummary, QuizServiceError> {
        self.attempt.summary(clock)
    }

    pub fn dispatch(&mut self, intent: QuizIntent) -> QuizOutcome {
        let before = self.screen();
        let outcome = self.apply(intent);
        let after = self.screen();

        if after != before || after.notice.is_some() {
            for subscriber in &mut self.subscribers {
                subscriber(&after);
            }
        }
        outcome
    }

    pub fn select(&mut self, index: usize) -> QuizOutcome {
        self.dispatch(QuizIntent::Select(index))
    }

    pub fn submit(&mut self) -> QuizOutcome {
        self.dispatch(QuizIntent::Submit)
    }

    pub fn next(&mut self) -> QuizOutcome {
        self.dispatch(QuizIntent::Next)
    }

    fn apply(&mut self, intent: QuizIntent) -> QuizOutcome {
        let session = self.attempt.session_mut();
        debug!(?intent, index = session.current_index(), "quiz intent");

        let result = match intent {
            QuizIntent::Select(index) => session.select_choice(index).map(|selection| {
                match selection {
                    Selection::Selected(_) => None,
                    Selection::Locked => Some("Answer already submitted."),
                }
            }),
            QuizIntent::Submit => session.submit().map(|_| None),
            QuizIntent::Next => match session.advance() {
                Ok(Advance::Next { .. }) => Ok(None),
                Ok(Advance::Complete) => {
                    self.notice = None;
                    return QuizOutcome::Completed;
                }
                Err(err) => Err(err),
            },
        };

        self.notice = match result {
            Ok(notice) => notice,
            Err(err) => Some(notice_for(err)),
        };
        QuizOutcome::Continue
    }
}

fn notice_for(err: QuizError) -> &'static str {
    match err {
        QuizError::InvalidChoice { .. } => "Pick one of the listed choices.",
        QuizError::NoSelection => "Select an answer before submitting.",
        QuizError::NotSubmitted => "Submit your answer first.",
        _ => "Something went wrong. Please try again.",
    }
}
