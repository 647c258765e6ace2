pub mod views;
pub mod vm;

pub use views::{
    ViewError, ViewState, render_screen, render_state, render_summary, view_state_from_load,
};
pub use vm::{QuizIntent, QuizOutcome, QuizScreenVm, QuizSummaryVm, QuizVm, map_quiz_summary};
