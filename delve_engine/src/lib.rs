#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const DELVE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod combat;
pub mod command;
pub mod config;
pub mod data_paths;
pub mod enemy;
pub mod event;
pub mod game;
pub mod generator;
pub mod health;
pub mod idgen;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod spinners;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use config::{GameConfig, load_config};
pub use enemy::Enemy;
pub use event::{GameEvent, Observer};
pub use game::Game;
pub use generator::EventGenerator;
pub use item::Item;
pub use player::Player;
pub use repl::{GameOutcome, run_repl};
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::World;
