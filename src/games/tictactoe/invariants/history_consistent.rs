//! History consistency invariant: history length matches occupied squares.

use super::super::{GameSession, Square};
use super::Invariant;

/// Invariant: History length equals number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let occupied = session
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        session.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameStatus, Mark, Mode, Position, Scores};

    #[test]
    fn test_empty_session_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_square_without_history_violates() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::O));
        let session = GameSession::from_parts(
            board,
            Mark::X,
            GameStatus::InProgress,
            Mode::TwoPlayer,
            Scores::default(),
            Vec::new(),
        );
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
