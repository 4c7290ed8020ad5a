//! Application state and logic.

use super::input::{Action, action_for, move_cursor};
use crate::games::tictactoe::{GameSession, GameStore, IndexSource, Mode, MoveOutcome, Position};
use crossterm::event::KeyCode;
use tracing::debug;

/// Front-end state wrapped around the store.
pub struct App<R> {
    store: GameStore<R>,
    cursor: Position,
    notice: Option<String>,
    running: bool,
}

impl<R: IndexSource> App<R> {
    /// Creates the app with a store already set to `mode`.
    pub fn new(mut store: GameStore<R>, mode: Mode) -> Self {
        if *store.session().mode() != mode {
            store.set_mode(mode);
        }
        Self {
            store,
            cursor: Position::Center,
            notice: None,
            running: true,
        }
    }

    /// Session snapshot to render.
    pub fn session(&self) -> &GameSession {
        self.store.session()
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Status line: the session headline plus the latest notice.
    pub fn status_line(&self) -> String {
        match &self.notice {
            Some(notice) => format!("{} ({})", self.session().headline(), notice),
            None => self.session().headline(),
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = action_for(key);
        debug!(?key, ?action, "Key pressed");

        match action {
            Action::Cursor(dir) => self.cursor = move_cursor(self.cursor, dir),
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::NewGame => {
                self.store.start_new_game();
                self.notice = None;
            }
            Action::ResetScores => {
                self.store.reset_scores();
                self.notice = Some("scores reset".to_string());
            }
            Action::ToggleMode => {
                let mode = self.session().mode().toggle();
                self.store.set_mode(mode);
                self.notice = Some(mode.label().to_string());
            }
            Action::Quit => self.running = false,
            Action::Ignore => {}
        }
    }

    fn play(&mut self, pos: Position) {
        match self.store.apply_move(pos.to_index()) {
            MoveOutcome::Applied {
                machine_reply: Some(reply),
            } => self.notice = Some(format!("machine played {}", reply.label())),
            MoveOutcome::Applied { machine_reply: None } => self.notice = None,
            MoveOutcome::Rejected(reason) => {
                debug!(%reason, position = %pos, "Move ignored");
                self.notice = Some(reason.to_string());
            }
        }
    }
}
