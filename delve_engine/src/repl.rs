//! The game loop and its command handlers.
//!
//! Each pass through the loop shows the menu, reads a choice, dispatches to a handler from one
//! of the submodules and reports the player's health. The loop ends when the player quits or
//! dies.

pub mod explore;
pub mod input;
pub mod inventory;
pub mod system;

pub use explore::*;
pub use input::{InputEvent, InputManager, LineSource, ScriptedInput};
pub use inventory::*;
pub use system::*;

use anyhow::{Context, Result};
use log::info;

use crate::command::MenuChoice;
use crate::game::{Game, lock_player};
use crate::health::LivingEntity;
use crate::style::GameStyle;
use crate::view::ViewItem;

/// Control flow signal used by handlers to exit the loop.
pub enum ReplControl {
    Continue,
    Quit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Quit,
    Died,
}

/// Run the game loop until the player quits or dies.
///
/// End of input at the menu counts as quitting; an interrupted prompt just shows the menu again.
///
/// # Errors
/// - if reading input fails
/// - if the shared player state has been poisoned
pub fn run_repl<L: LineSource>(game: &mut Game, input: &mut L) -> Result<GameOutcome> {
    let prompt = "> ".prompt_style().to_string();
    let mut turn = 0_usize;
    while game.player_alive()? {
        game.view.push(ViewItem::Menu);
        game.view.flush();

        let event = input.read_line(&prompt).context("while reading menu choice")?;
        let line = match event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "4".to_string(),
            InputEvent::Interrupted => {
                game.view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                game.view.flush();
                continue;
            },
        };

        turn += 1;
        info!("================> BEGIN TURN {turn} <================");
        let control = match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Explore) => explore_handler(game)?,
            Ok(MenuChoice::Inventory) => inv_handler(game)?,
            Ok(MenuChoice::UseItem) => use_item_handler(game, input)?,
            Ok(MenuChoice::Quit) => quit_handler(game)?,
            Err(e) => {
                info!("unrecognized menu input: {e}");
                game.view.push(ViewItem::InvalidChoice);
                ReplControl::Continue
            },
        };
        if let ReplControl::Quit = control {
            game.view.flush();
            return Ok(GameOutcome::Quit);
        }

        let status = {
            let player = lock_player(&game.player)?;
            ViewItem::Health {
                current: player.current_hp(),
                max: player.max_hp(),
            }
        };
        game.view.push(status);
        game.view.flush();
    }
    death_handler(game)?;
    game.view.flush();
    Ok(GameOutcome::Died)
}
