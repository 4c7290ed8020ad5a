//! Pure session transitions.
//!
//! Every function takes a session by reference and returns the next
//! session by value. Nothing here holds state; [`GameStore`] is the only
//! owner that swaps the result in.
//!
//! [`GameStore`]: super::GameStore

use super::heuristic::{IndexSource, choose_move};
use super::rules::detect;
use super::{GameSession, GameStatus, Mode, Position};
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The game is already won or drawn.
    #[display("game is already over")]
    GameOver,
    /// The square already holds a mark.
    #[display("square is already occupied")]
    Occupied,
    /// The index is outside 0-8.
    #[display("position out of bounds (must be 0-8)")]
    OutOfBounds,
}

/// What a call to `apply_move` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The session is unchanged.
    Rejected(Rejection),
    /// The move was placed, possibly followed by the machine's reply.
    Applied {
        /// Cell the machine answered with, in versus-machine mode.
        machine_reply: Option<Position>,
    },
}

impl MoveOutcome {
    /// True when the session changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Checks whether `index` may be played on `session`.
pub fn validate(session: &GameSession, index: usize) -> Result<Position, Rejection> {
    if session.status().is_terminal() {
        return Err(Rejection::GameOver);
    }
    let pos = Position::from_index(index).ok_or(Rejection::OutOfBounds)?;
    if !session.board().is_empty(pos) {
        return Err(Rejection::Occupied);
    }
    Ok(pos)
}

/// Places the current mark, recomputes the status and scores a finished game.
///
/// The turn flips even when the move ends the game.
fn place(mut session: GameSession, pos: Position) -> GameSession {
    let mark = *session.current_mark();
    session.place(pos);
    let status = detect(session.board());
    session.set_status(status);
    session.scores_mut().record(status);
    session.flip_turn();

    match status {
        GameStatus::InProgress => debug!(%mark, position = %pos, "Move placed"),
        GameStatus::Won(winner) => info!(%winner, position = %pos, "Game won"),
        GameStatus::Draw => info!(position = %pos, "Game drawn"),
    }
    session
}

/// Plays `index` for the current mark and, in versus-machine mode, the
/// machine's single reply.
///
/// Illegal moves leave the session untouched and report why.
#[instrument(skip(session, source), fields(mode = ?session.mode(), mark = %session.current_mark()))]
pub fn apply_move(
    session: &GameSession,
    index: usize,
    source: &mut impl IndexSource,
) -> (GameSession, MoveOutcome) {
    let pos = match validate(session, index) {
        Ok(pos) => pos,
        Err(reason) => {
            debug!(%reason, "Move ignored");
            return (session.clone(), MoveOutcome::Rejected(reason));
        }
    };

    let mut next = place(session.clone(), pos);
    let mut machine_reply = None;

    if next.machine_to_move() {
        let reply = choose_move(next.board(), *next.current_mark(), source);
        next = place(next, reply);
        machine_reply = Some(reply);
    }

    (next, MoveOutcome::Applied { machine_reply })
}

/// Clears the board for a new game, keeping mode and scores.
#[instrument(skip(session))]
pub fn start_new_game(session: &GameSession) -> GameSession {
    let mut next = session.clone();
    next.clear_game();
    info!(mode = ?next.mode(), "New game started");
    next
}

/// Zeroes the scoreboard, leaving the game as it is.
#[instrument(skip(session))]
pub fn reset_scores(session: &GameSession) -> GameSession {
    let mut next = session.clone();
    *next.scores_mut() = Default::default();
    info!("Scores reset");
    next
}

/// Switches mode and starts a fresh game. Scores carry over.
#[instrument(skip(session))]
pub fn set_mode(session: &GameSession, mode: Mode) -> GameSession {
    let mut next = session.clone();
    next.set_mode(mode);
    next.clear_game();
    info!(?mode, "Mode changed");
    next
}
