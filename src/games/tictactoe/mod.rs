//! Tic-tac-toe: session model, rules, store and machine opponent.

mod position;
mod store;
mod types;

pub mod heuristic;
pub mod invariants;
pub mod rules;
pub mod transitions;

pub use heuristic::{IndexSource, Rule, SeededSource, ThreadRngSource, choose_move};
pub use position::Position;
pub use store::GameStore;
pub use transitions::{MoveOutcome, Rejection};
pub use types::{Board, GameSession, GameStatus, Mark, Mode, Scores, Square};
