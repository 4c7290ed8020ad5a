//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The 8 winning triples, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first triple holding three identical marks.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(mark)
        }
        _ => None,
    })
}

/// Finds the empty cell that would complete a triple for `mark`.
///
/// A triple qualifies when exactly one of its cells is empty and the
/// other two already hold `mark`. The first qualifying triple wins.
#[instrument(skip(board))]
pub fn completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    let owned = Square::Occupied(mark);
    LINES.iter().find_map(|line| {
        let mut empty = None;
        let mut held = 0;
        for &pos in line {
            match board.get(pos) {
                Square::Empty => empty = Some(pos),
                sq if sq == owned => held += 1,
                Square::Occupied(_) => {}
            }
        }
        if held == 2 { empty } else { None }
    })
}
