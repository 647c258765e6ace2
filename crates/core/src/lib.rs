#![forbid(unsafe_code)]

pub mod model;
pub mod quiz;
pub mod score;
pub mod time;

pub use quiz::{
    Advance, AnswerRecord, QuestionPhase, QuizError, QuizProgress, QuizSession, Selection,
    Submission,
};
pub use time::Clock;
