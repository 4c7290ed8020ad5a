//! Tests for the machine's move heuristic.

use strictly_duel::heuristic::choose_with_rule;
use strictly_duel::{Board, IndexSource, Mark, Position, Rule, Square, choose_move};

/// Returns a preset offset, wrapped into range.
struct Offset(usize);

impl IndexSource for Offset {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

fn board_from(cells: &str) -> Board {
    let mut board = Board::new();
    for (pos, c) in Position::ALL.iter().zip(cells.chars()) {
        match c {
            'X' => board.set(*pos, Square::Occupied(Mark::X)),
            'O' => board.set(*pos, Square::Occupied(Mark::O)),
            _ => {}
        }
    }
    board
}

#[test]
fn test_blocks_row() {
    let board = board_from("XX.......");
    assert_eq!(choose_move(&board, Mark::O, &mut Offset(0)), Position::TopRight);
}

#[test]
fn test_wins_row() {
    let board = board_from("OO.......");
    assert_eq!(choose_move(&board, Mark::O, &mut Offset(0)), Position::TopRight);
}

#[test]
fn test_win_preferred_when_block_also_available() {
    // X X . / O O . / X . .  -> O can win at 5 or block at 2.
    let board = board_from("XX.OO.X..");
    assert_eq!(
        choose_with_rule(&board, Mark::O, &mut Offset(0)),
        (Position::MiddleRight, Rule::Win)
    );
}

#[test]
fn test_heuristic_plays_for_x_too() {
    // O O . / . X . / . . .  -> X blocks at 2.
    let board = board_from("OO..X....");
    assert_eq!(
        choose_with_rule(&board, Mark::X, &mut Offset(3)),
        (Position::TopRight, Rule::Block)
    );
}

#[test]
fn test_center_before_corners() {
    assert_eq!(
        choose_with_rule(&Board::new(), Mark::O, &mut Offset(2)),
        (Position::Center, Rule::Center)
    );
}

#[test]
fn test_corner_choices_cover_free_corners() {
    // . . . / . X . / . . O : free corners are 0, 2, 6.
    let board = board_from("....X...O");
    let mut chosen: Vec<Position> = (0..8)
        .map(|offset| {
            let (pos, rule) = choose_with_rule(&board, Mark::O, &mut Offset(offset));
            assert_eq!(rule, Rule::Corner);
            pos
        })
        .collect();
    chosen.sort_by_key(|p| p.to_index());
    chosen.dedup();
    assert_eq!(
        chosen,
        vec![Position::TopLeft, Position::TopRight, Position::BottomLeft]
    );
}

#[test]
fn test_side_choices_cover_free_sides() {
    // X . O / O X X / X . O : only sides 1 and 7 remain.
    let board = board_from("X.OOXXX.O");
    for offset in 0..6 {
        let (pos, rule) = choose_with_rule(&board, Mark::O, &mut Offset(offset));
        assert_eq!(rule, Rule::Side);
        assert!(matches!(pos, Position::TopCenter | Position::BottomCenter));
    }
}

#[test]
fn test_choice_is_always_empty() {
    let boards = ["X........", "X...O...X", "XO..X....", "XOX.O..X."];
    for cells in boards {
        let board = board_from(cells);
        for offset in 0..4 {
            let pos = choose_move(&board, Mark::O, &mut Offset(offset));
            assert!(board.is_empty(pos), "{} chose occupied {}", cells, pos);
        }
    }
}

#[test]
#[should_panic(expected = "full board")]
fn test_full_board_is_a_fault() {
    choose_move(&board_from("XOXOXXOXO"), Mark::O, &mut Offset(0));
}
