use trivia_core::model::QuizSummary;
use trivia_core::score::points;

use crate::vm::time_fmt::{format_datetime, format_elapsed};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSummaryVm {
    pub score_label: String,
    pub points_label: String,
    pub answered_label: String,
    pub elapsed_label: String,
    pub completed_at_str: String,
}

impl From<&QuizSummary> for QuizSummaryVm {
    fn from(summary: &QuizSummary) -> Self {
        Self {
            score_label: format!("{}/{} correct", summary.correct(), summary.total()),
            points_label: format!("{} points", points(summary.correct())),
            answered_label: format!("{} answered", summary.answered()),
            elapsed_label: format_elapsed(summary.elapsed()),
            completed_at_str: format_datetime(summary.completed_at()),
        }
    }
}

#[must_use]
pub fn map_quiz_summary(summary: &QuizSummary) -> QuizSummaryVm {
    QuizSummaryVm::from(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::time::fixed_now;

    #[test]
    fn labels_reflect_counts() {
        let start = fixed_now();
        let summary =
            QuizSummary::new(5, 4, 3, start, start + chrono::Duration::seconds(75)).unwrap();

        let vm = map_quiz_summary(&summary);

        assert_eq!(vm.score_label, "3/5 correct");
        assert_eq!(vm.points_label, "30 points");
        assert_eq!(vm.answered_label, "4 answered");
        assert_eq!(vm.elapsed_label, "1m 15s");
        assert_eq!(vm.completed_at_str, "2023-11-14 22:14 UTC");
    }
}
