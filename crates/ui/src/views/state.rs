use services::{LoadState, QuizServiceError, SourceError};
use trivia_core::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    FetchFailed,
    EmptyQuiz,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::FetchFailed => "Could not load questions. Check your connection and try again.",
            ViewError::EmptyQuiz => "There are no questions to show.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&QuizServiceError> for ViewError {
    fn from(err: &QuizServiceError) -> Self {
        match err {
            QuizServiceError::Fetch(SourceError::Empty) | QuizServiceError::Quiz(QuizError::Empty) => {
                ViewError::EmptyQuiz
            }
            QuizServiceError::Fetch(_) => ViewError::FetchFailed,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_load<T: Clone>(state: &LoadState<T, QuizServiceError>) -> ViewState<T> {
    match state {
        LoadState::Idle => ViewState::Idle,
        LoadState::Loading => ViewState::Loading,
        LoadState::Ready(value) => ViewState::Ready(value.clone()),
        LoadState::Failed(err) => ViewState::Error(ViewError::from(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_load_states() {
        assert_eq!(
            view_state_from_load::<u8>(&LoadState::Loading),
            ViewState::Loading
        );
        assert_eq!(
            view_state_from_load(&LoadState::Ready(3_u8)),
            ViewState::Ready(3)
        );
        assert_eq!(
            view_state_from_load::<u8>(&LoadState::Failed(QuizServiceError::Fetch(
                SourceError::HttpStatus(services::StatusCode::NOT_FOUND)
            ))),
            ViewState::Error(ViewError::FetchFailed)
        );
        assert_eq!(
            view_state_from_load::<u8>(&LoadState::Failed(QuizServiceError::Quiz(QuizError::Empty))),
            ViewState::Error(ViewError::EmptyQuiz)
        );
    }
}
