//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from the
//! session so the store, the heuristic and the invariants share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, completing_cell};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from the board alone.
#[instrument(skip(board))]
pub fn detect(board: &Board) -> GameStatus {
    if let Some(mark) = check_winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
