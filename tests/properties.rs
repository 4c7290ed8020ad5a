//! Property-based tests for tic-tac-toe sessions.
//!
//! Sessions are generated by random legal play so every case is a state
//! the store can actually reach.

use proptest::prelude::*;
use strictly_duel::invariants::{InvariantSet, SessionInvariants};
use strictly_duel::rules::{self, LINES};
use strictly_duel::{
    Board, GameSession, GameStatus, Mark, Mode, MoveOutcome, Position, Scores, SeededSource, Square,
    transitions,
};

// =============================================================================
// Strategies
// =============================================================================

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::TwoPlayer), Just(Mode::VsMachine)]
}

/// Plays random legal moves from a fresh session.
fn arb_session() -> impl Strategy<Value = GameSession> {
    (
        arb_mode(),
        any::<u64>(),
        proptest::collection::vec(0usize..64, 0..10),
    )
        .prop_map(|(mode, seed, picks)| {
            let mut source = SeededSource::new(seed);
            let mut session = transitions::set_mode(&GameSession::new(), mode);
            for pick in picks {
                let moves = Position::valid_moves(session.board());
                if session.status().is_terminal() || moves.is_empty() {
                    break;
                }
                let index = moves[pick % moves.len()].to_index();
                session = transitions::apply_move(&session, index, &mut source).0;
            }
            session
        })
}

fn has_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(mark)))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_reachable_sessions_satisfy_invariants(session in arb_session()) {
        prop_assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn prop_never_two_winners(session in arb_session()) {
        let board = session.board();
        prop_assert!(!(has_line(board, Mark::X) && has_line(board, Mark::O)));
    }

    #[test]
    fn prop_status_matches_board(session in arb_session()) {
        let board = session.board();
        let expected = if has_line(board, Mark::X) {
            GameStatus::Won(Mark::X)
        } else if has_line(board, Mark::O) {
            GameStatus::Won(Mark::O)
        } else if board.squares().iter().all(|sq| *sq != Square::Empty) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        prop_assert_eq!(rules::detect(board), expected);
        prop_assert_eq!(*session.status(), expected);
    }

    #[test]
    fn prop_mark_counts_stay_balanced(session in arb_session()) {
        let xs = session.board().count(Mark::X);
        let os = session.board().count(Mark::O);
        prop_assert!(xs == os || xs == os + 1);
        prop_assert_eq!(xs + os, session.history().len());
    }

    #[test]
    fn prop_rejected_moves_change_nothing(
        session in arb_session(),
        index in 0usize..16,
        seed in any::<u64>(),
    ) {
        let (next, outcome) =
            transitions::apply_move(&session, index, &mut SeededSource::new(seed));
        match outcome {
            MoveOutcome::Rejected(_) => prop_assert_eq!(next, session),
            MoveOutcome::Applied { machine_reply } => {
                let added = next.history().len() - session.history().len();
                prop_assert_eq!(added, if machine_reply.is_some() { 2 } else { 1 });
                prop_assert_eq!(next.history()[session.history().len()].to_index(), index);
            }
        }
    }

    #[test]
    fn prop_machine_reply_only_in_machine_mode(
        session in arb_session(),
        index in 0usize..9,
        seed in any::<u64>(),
    ) {
        let (_, outcome) =
            transitions::apply_move(&session, index, &mut SeededSource::new(seed));
        if let MoveOutcome::Applied { machine_reply: Some(_) } = outcome {
            prop_assert_eq!(*session.mode(), Mode::VsMachine);
        }
    }

    #[test]
    fn prop_reset_scores_keeps_the_board(session in arb_session()) {
        let reset = transitions::reset_scores(&session);
        prop_assert_eq!(*reset.scores(), Scores::default());
        prop_assert_eq!(reset.board(), session.board());
        prop_assert_eq!(reset.history(), session.history());
        prop_assert_eq!(*reset.status(), *session.status());
    }

    #[test]
    fn prop_new_game_keeps_scores_and_mode(session in arb_session()) {
        let fresh = transitions::start_new_game(&session);
        prop_assert_eq!(fresh.board(), &Board::new());
        prop_assert_eq!(*fresh.current_mark(), Mark::X);
        prop_assert_eq!(*fresh.scores(), *session.scores());
        prop_assert_eq!(*fresh.mode(), *session.mode());
        prop_assert!(fresh.history().is_empty());
    }
}
