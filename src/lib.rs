//! Strictly Duel - tic-tac-toe core with score tracking
//!
//! A two-mode game (two humans, or a human against a heuristic machine)
//! built around a single authoritative session.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection over a 3x3 board
//! - **Transitions**: pure functions from one session to the next
//! - **Store**: the thin holder that owns the session
//! - **Heuristic**: the machine's greedy one-ply move picker
//! - **TUI**: terminal front-end over the store
//!
//! # Example
//!
//! ```
//! use strictly_duel::{GameStatus, GameStore, Mark, Mode, SeededSource};
//!
//! let mut store = GameStore::with_source(SeededSource::new(7));
//! store.set_mode(Mode::VsMachine);
//! store.apply_move(0);
//!
//! // The machine answered in the center.
//! assert_eq!(store.session().history().len(), 2);
//! assert_eq!(*store.session().current_mark(), Mark::X);
//! assert_eq!(*store.session().status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod simulate;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DuelConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameSession, GameStatus, GameStore, IndexSource, Mark, Mode, MoveOutcome, Position,
    Rejection, Rule, Scores, SeededSource, Square, ThreadRngSource, choose_move,
};

// Crate-level exports - Rule, transition and invariant modules
pub use games::tictactoe::{heuristic, invariants, rules, transitions};

// Crate-level exports - Outer surfaces
pub use simulate::{SimulationReport, run as run_simulation};
pub use tui::{App, run_tui};
