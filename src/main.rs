//! Main entry point for the game.
//!
//! Loads the map, takes over the terminal, starts the enemy agents and the
//! countdown, and runs the input loop until the round is won, lost on time,
//! or abandoned.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::config::GameConfig;
use crate::config::game::DEFAULT_MAP_PATH;
use crate::game::game_loop::{run_game_loop, spawn_input_thread};
use crate::game::grid::load_map;
use crate::game::session::GameSession;
use crate::game::state::World;
use crate::terminal::{KeyboardInput, TerminalRenderer};

pub mod config;
mod game;
mod terminal;

/// Clear every enemy on the map before the clock runs out.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Map file to play.
    #[arg(default_value = DEFAULT_MAP_PATH)]
    map: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; redirect them while playing (RUST_LOG=debug ... 2> game.log).
    env_logger::init();

    let cli = Cli::parse();
    let map = load_map(&cli.map).context("cannot start without a map")?;

    let renderer = TerminalRenderer::new().context("failed to initialise the terminal")?;
    let session = GameSession::new(World::from_map(map), Box::new(renderer), GameConfig::default());

    let actions = spawn_input_thread(Box::new(KeyboardInput));
    let outcome = run_game_loop(session.clone(), actions).await;

    session.close(outcome);
    info!("[Main] Exiting after {:?}", outcome);
    Ok(())
}
