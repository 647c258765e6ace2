mod question;
mod summary;

pub use question::{QuestionError, QuestionRecord};
pub use summary::{QuizSummary, QuizSummaryError};
