//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (played by the machine in versus-machine mode).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from raw squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Who sits across the board from player X.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// The human plays X, the machine plays O.
    VsMachine,
}

impl Mode {
    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoPlayer => "Two players",
            Self::VsMachine => "Versus machine",
        }
    }

    /// Toggles between the two modes.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::TwoPlayer => Self::VsMachine,
            Self::VsMachine => Self::TwoPlayer,
        }
    }
}

/// Cumulative results across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, Serialize, Deserialize)]
pub struct Scores {
    /// Games won by X.
    wins_x: u32,
    /// Games won by O.
    wins_o: u32,
    /// Drawn games.
    draws: u32,
}

impl Scores {
    /// Counts a finished game. In-progress status leaves the counters alone.
    pub(super) fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.wins_x += 1,
            GameStatus::Won(Mark::O) => self.wins_o += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Complete session state: the current game plus mode and scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Mark placed by the next move.
    current_mark: Mark,
    /// Cached result of the win/draw detector.
    status: GameStatus,
    /// Active mode.
    mode: Mode,
    /// Scoreboard.
    scores: Scores,
    /// Positions played in the current game, in order.
    history: Vec<Position>,
}

impl GameSession {
    /// Creates a fresh two-player session with a zeroed scoreboard.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            mode: Mode::TwoPlayer,
            scores: Scores::default(),
            history: Vec::new(),
        }
    }

    /// Reassembles a session from its parts without validation.
    ///
    /// Used by the invariant tests to build corrupted states.
    #[cfg(test)]
    pub(crate) fn from_parts(
        board: Board,
        current_mark: Mark,
        status: GameStatus,
        mode: Mode,
        scores: Scores,
        history: Vec<Position>,
    ) -> Self {
        Self {
            board,
            current_mark,
            status,
            mode,
            scores,
            history,
        }
    }

    /// True when the machine should answer the move just made.
    pub fn machine_to_move(&self) -> bool {
        self.mode == Mode::VsMachine
            && self.status == GameStatus::InProgress
            && self.current_mark == Mark::O
    }

    /// One-line summary of whose turn it is or how the game ended.
    pub fn headline(&self) -> String {
        match self.status {
            GameStatus::Won(mark) => format!("Player {} wins!", mark),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress if self.machine_to_move() => "Machine's turn".to_string(),
            GameStatus::InProgress => format!("Player {}'s turn", self.current_mark),
        }
    }

    pub(super) fn place(&mut self, pos: Position) {
        self.board.set(pos, Square::Occupied(self.current_mark));
        self.history.push(pos);
    }

    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(super) fn flip_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    pub(super) fn scores_mut(&mut self) -> &mut Scores {
        &mut self.scores
    }

    pub(super) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Clears the board, turn, status and history. Mode and scores survive.
    pub(super) fn clear_game(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
