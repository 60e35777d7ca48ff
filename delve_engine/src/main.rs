#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Delve **
//! A short dungeon crawl in the terminal.

use std::sync::Arc;

use delve_engine::data_paths::{CONFIG_FILE, data_path};
use delve_engine::repl::{InputEvent, InputManager, LineSource};
use delve_engine::style::GameStyle;
use delve_engine::{EventGenerator, Game, View, load_config, run_repl};

use anyhow::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Delve configuration...");
    let config = load_config(&data_path(CONFIG_FILE));

    println!("{:^60}\n", "DELVE: A SHORT DUNGEON CRAWL".title_style());

    let mut input = InputManager::new();
    let name = match input
        .read_line(&"What's your name, adventurer? ".prompt_style().to_string())
        .context("while reading player name")?
    {
        InputEvent::Line(name) => name,
        InputEvent::Eof | InputEvent::Interrupted => String::new(),
    };

    let mut game = Game::new(&config, &name, View::new(), StdRng::from_os_rng());
    let generator = EventGenerator::spawn(Arc::clone(&game.world), &config.events)?;
    info!("Starting the game!");
    game.welcome()?;

    let outcome = run_repl(&mut game, &mut input);
    generator.shutdown();
    info!("game over: {:?}", outcome.as_ref().ok());
    outcome.map(|_| ())
}
