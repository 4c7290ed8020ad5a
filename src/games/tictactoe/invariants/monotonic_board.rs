//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameSession, Mark, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replays the history with alternating marks starting from X. Every
/// replayed square must be empty before it is filled and the result must
/// match the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut reconstructed = Board::new();
        let mut mark = Mark::X;

        for &pos in session.history() {
            if !reconstructed.is_empty(pos) {
                return false;
            }
            reconstructed.set(pos, Square::Occupied(mark));
            mark = mark.opponent();
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
