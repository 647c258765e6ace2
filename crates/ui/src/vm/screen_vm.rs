use trivia_core::score::{fill_fraction, points, question_label};
use trivia_core::{QuestionPhase, QuizSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceVerdict {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceRowVm {
    pub index: usize,
    pub key: String,
    pub text: String,
    pub selected: bool,
    /// Only set on the selected row, once submitted.
    pub verdict: Option<ChoiceVerdict>,
}

/// Everything the display surface needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizScreenVm {
    pub question_label: String,
    pub question: String,
    pub category: Option<String>,
    pub choices: Vec<ChoiceRowVm>,
    pub points_label: String,
    pub fill_fraction: f32,
    pub phase: QuestionPhase,
    pub can_submit: bool,
    pub can_advance: bool,
    pub is_last: bool,
    pub is_complete: bool,
    pub notice: Option<String>,
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession, notice: Option<&str>) -> QuizScreenVm {
    let question = session.current_question();
    let progress = session.progress();
    let phase = session.phase();
    let selected = session.selected_choice();

    let choices = question
        .choices()
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let is_selected = selected == Some(index);
            let verdict = match (is_selected, session.is_correct()) {
                (true, Some(true)) => Some(ChoiceVerdict::Correct),
                (true, Some(false)) => Some(ChoiceVerdict::Incorrect),
                _ => None,
            };
            ChoiceRowVm {
                index,
                key: (index + 1).to_string(),
                text: text.clone(),
                selected: is_selected,
                verdict,
            }
        })
        .collect();

    QuizScreenVm {
        question_label: question_label(progress.index, progress.total),
        question: question.question().to_string(),
        category: question.category().map(str::to_string),
        choices,
        points_label: points(progress.score).to_string(),
        fill_fraction: fill_fraction(progress.score, progress.total),
        phase,
        can_submit: phase == QuestionPhase::Selected,
        can_advance: phase == QuestionPhase::Submitted && !session.is_complete(),
        is_last: session.is_last_question(),
        is_complete: session.is_complete(),
        notice: notice.map(str::to_string),
    }
}
