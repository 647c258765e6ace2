//! Presentation math for the running score. Pure functions; nothing here feeds
//! back into `QuizSession`.

/// Points shown per correct answer.
pub const POINTS_PER_CORRECT: usize = 10;

#[must_use]
pub fn points(score: usize) -> usize {
    score.saturating_mul(POINTS_PER_CORRECT)
}

/// Share of the question set answered correctly, in `[0.0, 1.0]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fill_fraction(score: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (score as f32 / total as f32).clamp(0.0, 1.0)
}

/// One-based question counter, e.g. `Question 3/10`.
#[must_use]
pub fn question_label(index: usize, total: usize) -> String {
    format!("Question {}/{total}", index + 1)
}
