//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameSession, Mark};
use super::Invariant;

/// Invariant: X and O alternate and the turn marker agrees.
///
/// X never trails O and never leads by more than one. The mark to move
/// is X exactly when an even number of moves have been made, which also
/// holds after a terminal move because the turn always flips.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let xs = session.board().count(Mark::X);
        let os = session.board().count(Mark::O);

        if xs != os && xs != os + 1 {
            return false;
        }

        let expected = if (xs + os) % 2 == 0 { Mark::X } else { Mark::O };
        *session.current_mark() == expected
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}
