//! Tracks the single asynchronous load that precedes a quiz.
//!
//! Each `begin` hands out a `LoadTicket`. A result is applied only if its
//! ticket is still current, so a fetch that outlives a `cancel` (or is
//! superseded by a newer `begin`) can never land in a discarded screen.

use tracing::{debug, warn};

#[derive(Debug)]
pub enum LoadState<T, E> {
    Idle,
    Loading,
    Ready(T),
    Failed(E),
}

/// Identifies one outstanding load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    Discarded,
}

#[derive(Debug)]
pub struct QuizLoader<T, E> {
    generation: u64,
    pending: bool,
    state: LoadState<T, E>,
}

impl<T, E> Default for QuizLoader<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> QuizLoader<T, E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: 0,
            pending: false,
            state: LoadState::Idle,
        }
    }

    /// Start a load. Any earlier ticket becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.pending = true;
        self.state = LoadState::Loading;
        debug!(generation = self.generation, "load started");
        LoadTicket(self.generation)
    }

    /// Apply a finished load if `ticket` is still the current one.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<T, E>) -> Applied {
        if !self.pending || ticket.0 != self.generation {
            warn!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale load result"
            );
            return Applied::Discarded;
        }

        self.pending = false;
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err),
        };
        Applied::Applied
    }

    /// Abandon the outstanding load, if any. Its result will be discarded.
    pub fn cancel(&mut self) {
        if self.pending {
            debug!(generation = self.generation, "load cancelled");
        }
        self.pending = false;
        self.state = LoadState::Idle;
    }

    #[must_use]
    pub fn state(&self) -> &LoadState<T, E> {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Move a ready value out, leaving the loader idle.
    pub fn take_ready(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.state, LoadState::Idle) {
            LoadState::Ready(value) => Some(value),
            other => {
                self.state = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_ticket_applies() {
        let mut loader: QuizLoader<u32, String> = QuizLoader::new();
        let ticket = loader.begin();
        assert!(loader.is_loading());

        assert_eq!(loader.complete(ticket, Ok(7)), Applied::Applied);
        assert_eq!(loader.take_ready(), Some(7));
        assert!(matches!(loader.state(), LoadState::Idle));
    }

    #[test]
    fn failure_is_recorded() {
        let mut loader: QuizLoader<u32, String> = QuizLoader::new();
        let ticket = loader.begin();
        loader.complete(ticket, Err("offline".into()));

        assert!(matches!(loader.state(), LoadState::Failed(e) if e == "offline"));
        assert_eq!(loader.take_ready(), None);
        assert!(matches!(loader.state(), LoadState::Failed(_)));
    }

    #[test]
    fn result_after_cancel_is_discarded() {
        let mut loader: QuizLoader<u32, String> = QuizLoader::new();
        let ticket = loader.begin();
        loader.cancel();

        assert_eq!(loader.complete(ticket, Ok(1)), Applied::Discarded);
        assert!(matches!(loader.state(), LoadState::Idle));
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let mut loader: QuizLoader<u32, String> = QuizLoader::new();
        let first = loader.begin();
        let second = loader.begin();

        assert_eq!(loader.complete(first, Ok(1)), Applied::Discarded);
        assert!(loader.is_loading());
        assert_eq!(loader.complete(second, Ok(2)), Applied::Applied);
        assert_eq!(loader.complete(second, Ok(3)), Applied::Discarded);
        assert_eq!(loader.take_ready(), Some(2));
    }
}
