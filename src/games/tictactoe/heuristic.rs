//! Greedy one-ply opponent for tic-tac-toe.
//!
//! The machine picks its move by a fixed priority: complete its own
//! triple, block the opponent's, take the center, then a random corner,
//! then a random side. It does not look ahead, so forks beat it.

use super::rules::{completing_cell, is_full};
use super::{Board, Mark, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Source of uniform random indices for the heuristic's tie-breaks.
pub trait IndexSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible source seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Creates a source that replays the same choices for the same seed.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for SeededSource {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

impl<S: IndexSource + ?Sized> IndexSource for Box<S> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Which priority rule produced the machine's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Completes a triple for the machine.
    Win,
    /// Occupies the cell the opponent needs.
    Block,
    /// Takes the center.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes a random free side.
    Side,
    /// Takes any free cell.
    Fallback,
}

/// Chooses a cell for `mark` on `board`.
///
/// # Panics
///
/// Panics if the board has no empty cell. Callers must only ask for a
/// move while the game is in progress.
#[instrument(skip(board, source), fields(cells = %board.display()))]
pub fn choose_move(board: &Board, mark: Mark, source: &mut impl IndexSource) -> Position {
    let (pos, rule) = choose_with_rule(board, mark, source);
    debug!(?rule, position = %pos, "Machine chose move");
    pos
}

/// Like [`choose_move`], also reporting the rule that fired.
///
/// # Panics
///
/// Panics if the board has no empty cell.
pub fn choose_with_rule(
    board: &Board,
    mark: Mark,
    source: &mut impl IndexSource,
) -> (Position, Rule) {
    assert!(
        !is_full(board),
        "choose_move called on a full board; the game must be in progress"
    );

    if let Some(pos) = completing_cell(board, mark) {
        return (pos, Rule::Win);
    }
    if let Some(pos) = completing_cell(board, mark.opponent()) {
        return (pos, Rule::Block);
    }
    if board.is_empty(Position::Center) {
        return (Position::Center, Rule::Center);
    }
    if let Some(pos) = pick_free(board, &Position::CORNERS, source) {
        return (pos, Rule::Corner);
    }
    if let Some(pos) = pick_free(board, &Position::SIDES, source) {
        return (pos, Rule::Side);
    }

    let free = Position::valid_moves(board);
    (free[pick_index(source, free.len())], Rule::Fallback)
}

/// Draws an index in `0..len`, holding the source to its contract.
fn pick_index(source: &mut impl IndexSource, len: usize) -> usize {
    let index = source.pick(len);
    debug_assert!(
        index < len,
        "IndexSource::pick returned {index} for len {len}; must be in 0..len"
    );
    index % len
}

/// Picks uniformly among the empty cells of `group`.
fn pick_free(board: &Board, group: &[Position], source: &mut impl IndexSource) -> Option<Position> {
    let free: Vec<Position> = group.iter().copied().filter(|p| board.is_empty(*p)).collect();
    if free.is_empty() {
        None
    } else {
        Some(free[pick_index(source, free.len())])
    }
}
