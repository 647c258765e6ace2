mod quiz_vm;
mod screen_vm;
mod summary_vm;
mod time_fmt;

pub use quiz_vm::{QuizIntent, QuizOutcome, QuizVm};
pub use screen_vm::{ChoiceRowVm, ChoiceVerdict, QuizScreenVm, map_quiz_screen};
pub use summary_vm::{QuizSummaryVm, map_quiz_summary};
