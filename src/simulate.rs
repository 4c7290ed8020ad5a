//! Headless batch play against the machine.

use crate::games::tictactoe::{
    GameStatus, GameStore, IndexSource, Mode, Position, Scores, SeededSource, ThreadRngSource,
};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Final tally of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, new)]
pub struct SimulationReport {
    /// Games played.
    games: u32,
    /// Scoreboard after the last game.
    scores: Scores,
}

fn source_for(seed: Option<u64>) -> Box<dyn IndexSource> {
    match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadRngSource),
    }
}

/// Plays `games` games in versus-machine mode.
///
/// Player X picks uniformly among the empty cells. With a seed, both the
/// stand-in and the machine are reproducible.
#[instrument]
pub fn run(games: u32, seed: Option<u64>) -> SimulationReport {
    let mut store = GameStore::with_source(source_for(seed));
    let mut human = source_for(seed.map(|s| s.wrapping_add(1)));
    store.set_mode(Mode::VsMachine);

    for game in 0..games {
        store.start_new_game();
        while *store.session().status() == GameStatus::InProgress {
            let free = Position::valid_moves(store.session().board());
            let pick = free[human.pick(free.len())];
            store.apply_move(pick.to_index());
        }
        debug!(game, status = ?store.session().status(), "Simulated game finished");
    }

    let report = SimulationReport::new(games, *store.session().scores());
    info!(?report, "Simulation complete");
    report
}
