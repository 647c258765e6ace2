//! Plain-text frames for the terminal display surface.

use std::fmt::Write as _;

use trivia_core::QuestionPhase;

use crate::views::state::ViewState;
use crate::vm::{ChoiceVerdict, QuizScreenVm, QuizSummaryVm};

const BAR_WIDTH: usize = 20;

fn progress_bar(fraction: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((fraction.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[must_use]
pub fn render_screen(vm: &QuizScreenVm) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Score {:>4} {}", vm.points_label, progress_bar(vm.fill_fraction));
    let _ = writeln!(out, "{}", vm.question_label);
    let _ = writeln!(out, "{}", "- ".repeat(BAR_WIDTH));
    if let Some(category) = &vm.category {
        let _ = writeln!(out, "[{category}]");
    }
    let _ = writeln!(out, "{}", vm.question);
    let _ = writeln!(out);

    for row in &vm.choices {
        let marker = if row.selected { '>' } else { ' ' };
        let verdict = match row.verdict {
            Some(ChoiceVerdict::Correct) => "  correct",
            Some(ChoiceVerdict::Incorrect) => "  wrong",
            None => "",
        };
        let _ = writeln!(out, " {marker}({}) {}{verdict}", row.key, row.text);
    }
    let _ = writeln!(out);

    let hint = match vm.phase {
        QuestionPhase::Unanswered => "type a number to choose",
        QuestionPhase::Selected => "[s] submit, or choose again",
        QuestionPhase::Submitted if vm.is_last => "[n] finish",
        QuestionPhase::Submitted => "[n] next question",
    };
    let _ = writeln!(out, "{hint}   [q] quit");

    if let Some(notice) = &vm.notice {
        let _ = writeln!(out, "! {notice}");
    }
    out
}

#[must_use]
pub fn render_summary(vm: &QuizSummaryVm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Quiz finished");
    let _ = writeln!(out, "  {}  ({})", vm.score_label, vm.points_label);
    let _ = writeln!(out, "  {} in {}", vm.answered_label, vm.elapsed_label);
    let _ = writeln!(out, "  completed {}", vm.completed_at_str);
    out
}

/// Frame for states that have no quiz screen yet.
#[must_use]
pub fn render_state<T>(state: &ViewState<T>) -> Option<String> {
    match state {
        ViewState::Idle | ViewState::Ready(_) => None,
        ViewState::Loading => Some("Loading questions...".to_string()),
        ViewState::Error(err) => Some(format!("Error: {}", err.message())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::state::ViewError;
    use crate::vm::ChoiceRowVm;

    fn screen() -> QuizScreenVm {
        QuizScreenVm {
            question_label: "Question 1/2".into(),
            question: "Capital of France?".into(),
            category: Some("world".into()),
            choices: vec![
                ChoiceRowVm {
                    index: 0,
                    key: "1".into(),
                    text: "Paris".into(),
                    selected: false,
                    verdict: None,
                },
                ChoiceRowVm {
                    index: 1,
                    key: "2".into(),
                    text: "Lyon".into(),
                    selected: true,
                    verdict: Some(ChoiceVerdict::Incorrect),
                },
            ],
            points_label: "0".into(),
            fill_fraction: 0.0,
            phase: QuestionPhase::Submitted,
            can_submit: false,
            can_advance: true,
            is_last: false,
            is_complete: false,
            notice: None,
        }
    }

    #[test]
    fn screen_marks_selected_row_and_verdict() {
        let frame = render_screen(&screen());

        assert!(frame.contains("Question 1/2"));
        assert!(frame.contains("[world]"));
        assert!(frame.contains("  (1) Paris\n"));
        assert!(frame.contains(" >(2) Lyon  wrong"));
        assert!(frame.contains("[n] next question"));
    }

    #[test]
    fn notice_is_appended() {
        let mut vm = screen();
        vm.notice = Some("Submit your answer first.".into());
        assert!(render_screen(&vm).ends_with("! Submit your answer first.\n"));
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.5), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
        assert_eq!(progress_bar(2.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
    }

    #[test]
    fn loading_and_error_states_have_frames() {
        assert_eq!(
            render_state::<()>(&ViewState::Loading).as_deref(),
            Some("Loading questions...")
        );
        let frame = render_state::<()>(&ViewState::Error(ViewError::FetchFailed)).unwrap();
        assert!(frame.starts_with("Error: Could not load questions"));
        assert_eq!(render_state(&ViewState::Ready(())), None);
    }
}
