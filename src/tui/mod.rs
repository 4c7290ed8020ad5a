//! Terminal front-end.
//!
//! A thin view over [`GameStore`]: it renders the session snapshot and
//! turns key presses into store operations.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::games::tictactoe::{GameStore, IndexSource, Mode};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored on every exit path, including setup failures
/// after raw mode is on.
#[instrument(skip(store))]
pub fn run_tui<R: IndexSource>(store: GameStore<R>, mode: Mode) -> Result<()> {
    info!("Starting Strictly Duel TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut app = App::new(store, mode);
    let res = enter_and_run(&mut app);
    let restored = restore_terminal();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?app.session().scores(), "TUI closed");
    res.and(restored)
}

fn enter_and_run<R: IndexSource>(app: &mut App<R>) -> Result<()> {
    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;
    run_loop(&mut terminal, app)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Leaves the alternate screen and raw mode. Safe to call when either
/// was never entered.
fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}

fn run_loop<R: IndexSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<R>,
) -> Result<()> {
    while app.is_running() {
        let status = app.status_line();
        terminal.draw(|f| ui::draw(f, app.session(), app.cursor(), &status))?;

        if event::poll(Duration::from_millis(200))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
