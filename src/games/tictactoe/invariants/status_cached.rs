//! Cached status invariant: the stored status matches the board.

use super::super::GameSession;
use super::super::rules::detect;
use super::Invariant;

/// Invariant: The cached status equals what the detector derives.
pub struct StatusCachedInvariant;

impl Invariant<GameSession> for StatusCachedInvariant {
    fn holds(session: &GameSession) -> bool {
        detect(session.board()) == *session.status()
    }

    fn description() -> &'static str {
        "Cached status matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_holds() {
        assert!(StatusCachedInvariant::holds(&GameSession::new()));
    }
}
