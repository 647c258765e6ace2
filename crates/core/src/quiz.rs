use thiserror::Error;

use crate::model::QuestionRecord;

//
// ─── ERRORS & OUTCOMES ─────────────────────────────────────────────────────────
//

/// Contract violations reported by `QuizSession`.
///
/// None of these change `score` or the current position.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    Empty,

    #[error("choice {index} is out of range for {len} choices")]
    InvalidChoice { index: usize, len: usize },

    #[error("no choice selected")]
    NoSelection,

    #[error("current question has not been submitted")]
    NotSubmitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Selected(usize),
    /// The question was already submitted; the selection did not change.
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Submitted { is_correct: bool },
    /// Repeated submit; carries the stored verdict, score untouched.
    AlreadySubmitted { is_correct: bool },
}

impl Submission {
    #[must_use]
    pub fn is_correct(self) -> bool {
        match self {
            Self::Submitted { is_correct } | Self::AlreadySubmitted { is_correct } => is_correct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    /// Terminal signal: the last question was already showing. State is unchanged.
    Complete,
}

/// Where the current question stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    Unanswered,
    Selected,
    Submitted,
}

/// Read-only progress snapshot for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub index: usize,
    pub total: usize,
    pub score: usize,
}

/// One submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub choice_index: usize,
    pub is_correct: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Progression and scoring for one quiz attempt.
///
/// Each question moves `Unanswered -> Selected -> Submitted`, and `advance`
/// moves to the next question's `Unanswered`. Advancing from the last
/// submitted question reports `Advance::Complete` and leaves the session as is.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    current: usize,
    selected: Option<usize>,
    submitted: bool,
    is_correct: Option<bool>,
    score: usize,
    answers: Vec<AnswerRecord>,
    complete: bool,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            selected: None,
            submitted: false,
            is_correct: None,
            score: 0,
            answers: Vec::new(),
            complete: false,
        })
    }

    /// Select a choice on the current question.
    ///
    /// Once submitted the selection is locked and this returns `Selection::Locked`
    /// for any index.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidChoice` if `index` is out of range.
    pub fn select_choice(&mut self, index: usize) -> Result<Selection, QuizError> {
        if self.submitted {
            return Ok(Selection::Locked);
        }

        let len = self.current_question().choices().len();
        if index >= len {
            return Err(QuizError::InvalidChoice { index, len });
        }

        self.selected = Some(index);
        Ok(Selection::Selected(index))
    }

    /// Submit the selected choice and score it.
    ///
    /// Calling it again before `advance` returns the stored verdict without
    /// touching the score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoSelection` if nothing is selected.
    pub fn submit(&mut self) -> Result<Submission, QuizError> {
        if self.submitted {
            let is_correct = self.is_correct.unwrap_or(false);
            return Ok(Submission::AlreadySubmitted { is_correct });
        }

        let Some(choice_index) = self.selected else {
            return Err(QuizError::NoSelection);
        };

        let is_correct = self.current_question().is_correct_choice(choice_index);
        self.submitted = true;
        self.is_correct = Some(is_correct);
        if is_correct {
            self.score += 1;
        }
        self.answers.push(AnswerRecord {
            question_index: self.current,
            choice_index,
            is_correct,
        });

        Ok(Submission::Submitted { is_correct })
    }

    /// Move to the next question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotSubmitted` if the current question is not submitted.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        if !self.submitted {
            return Err(QuizError::NotSubmitted);
        }

        let next = self.current + 1;
        if next >= self.questions.len() {
            self.complete = true;
            return Ok(Advance::Complete);
        }

        self.current = next;
        self.selected = None;
        self.submitted = false;
        self.is_correct = None;
        Ok(Advance::Next { index: next })
    }

    #[must_use]
    pub fn current_question(&self) -> &QuestionRecord {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            index: self.current,
            total: self.questions.len(),
            score: self.score,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuestionPhase {
        match (self.submitted, self.selected) {
            (true, _) => QuestionPhase::Submitted,
            (false, Some(_)) => QuestionPhase::Selected,
            (false, None) => QuestionPhase::Unanswered,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn selected_choice(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Set once `advance` has reported `Advance::Complete`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }
}
