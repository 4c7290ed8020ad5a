//! The authoritative owner of a game session.

use super::heuristic::{IndexSource, ThreadRngSource};
use super::invariants::{InvariantSet, SessionInvariants};
use super::transitions::{self, MoveOutcome};
use super::{GameSession, Mode};
use tracing::{error, instrument};

/// Holds the single [`GameSession`] and swaps in the result of each
/// pure transition.
///
/// The presentation layer reads the snapshot through [`GameStore::session`]
/// and changes it only through the four operations.
#[derive(Debug, Clone)]
pub struct GameStore<R = ThreadRngSource> {
    session: GameSession,
    source: R,
}

impl GameStore<ThreadRngSource> {
    /// Creates a store with a fresh session and thread-local randomness.
    #[instrument]
    pub fn new() -> Self {
        Self::with_source(ThreadRngSource)
    }
}

impl Default for GameStore<ThreadRngSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: IndexSource> GameStore<R> {
    /// Creates a store drawing the machine's random choices from `source`.
    pub fn with_source(source: R) -> Self {
        Self {
            session: GameSession::new(),
            source,
        }
    }

    /// Returns the current session snapshot.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays `index` for the mark to move; in versus-machine mode the
    /// machine answers before this returns.
    ///
    /// Occupied cells, out-of-range indices and finished games are
    /// ignored and reported as [`MoveOutcome::Rejected`].
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let (next, outcome) = transitions::apply_move(&self.session, index, &mut self.source);
        if outcome.is_applied() {
            self.commit(next);
        }
        outcome
    }

    /// Clears the board for a new game. Scores and mode are kept.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) {
        let next = transitions::start_new_game(&self.session);
        self.commit(next);
    }

    /// Zeroes the scoreboard.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        let next = transitions::reset_scores(&self.session);
        self.commit(next);
    }

    /// Switches mode and starts a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        let next = transitions::set_mode(&self.session, mode);
        self.commit(next);
    }

    fn commit(&mut self, next: GameSession) {
        if cfg!(debug_assertions)
            && let Err(violations) = SessionInvariants::check_all(&next)
        {
            error!(?violations, "Session invariants violated");
            panic!("session invariants violated: {:?}", violations);
        }
        self.session = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Mark, Position};
    use crate::games::tictactoe::transitions::Rejection;

    struct Last;

    impl IndexSource for Last {
        fn pick(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    #[test]
    fn test_store_starts_fresh() {
        let store = GameStore::new();
        assert_eq!(store.session(), &GameSession::new());
    }

    #[test]
    fn test_rejected_move_reports_reason() {
        let mut store = GameStore::with_source(Last);
        store.apply_move(4);
        assert_eq!(store.apply_move(4), MoveOutcome::Rejected(Rejection::Occupied));
        assert_eq!(store.apply_move(12), MoveOutcome::Rejected(Rejection::OutOfBounds));
    }

    #[test]
    fn test_machine_reply_uses_source() {
        let mut store = GameStore::with_source(Last);
        store.set_mode(Mode::VsMachine);
        store.apply_move(4);
        // Center taken, so the last free corner is chosen.
        assert_eq!(store.session().history(), &[Position::Center, Position::BottomRight]);
        assert_eq!(*store.session().current_mark(), Mark::X);
        assert_eq!(*store.session().status(), GameStatus::InProgress);
    }
}
