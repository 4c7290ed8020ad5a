//! Keyboard mapping for the terminal front-end.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the highlight.
    Cursor(KeyCode),
    /// Play the highlighted cell.
    PlayCursor,
    /// Play a specific cell.
    Play(Position),
    /// Start a new game.
    NewGame,
    /// Zero the scoreboard.
    ResetScores,
    /// Switch between two-player and versus-machine.
    ToggleMode,
    /// Leave the app.
    Quit,
    /// Nothing bound to this key.
    Ignore,
}

/// Maps a key code to an action.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Action::Cursor(key),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Char('n') => Action::NewGame,
        KeyCode::Char('r') => Action::ResetScores,
        KeyCode::Char('m') => Action::ToggleMode,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) => Position::from_digit(c).map_or(Action::Ignore, Action::Play),
        _ => Action::Ignore,
    }
}

/// Moves cursor based on arrow keys. Edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Down), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for(KeyCode::Char('7')), Action::Play(Position::BottomLeft));
        assert_eq!(action_for(KeyCode::Char('0')), Action::Ignore);
        assert_eq!(action_for(KeyCode::Enter), Action::PlayCursor);
        assert_eq!(action_for(KeyCode::Char('m')), Action::ToggleMode);
        assert_eq!(action_for(KeyCode::Esc), Action::Quit);
    }
}
