//! `repl::inventory` module
//!
//! Handlers for looking at and using the player's inventory.

use anyhow::{Context, Result};
use log::info;

use crate::command::ItemSelection;
use crate::game::{Game, lock_player};
use crate::repl::{InputEvent, LineSource, ReplControl};
use crate::style::GameStyle;
use crate::view::ViewItem;

/// List the player's inventory.
pub fn inv_handler(game: &mut Game) -> Result<ReplControl> {
    lock_player(&game.player)?.show_inventory(&mut game.view);
    Ok(ReplControl::Continue)
}

/// List the inventory, ask which item to use, then use it.
///
/// The player lock is released while waiting for the answer so the event generator can still
/// reach the player.
pub fn use_item_handler<L: LineSource>(game: &mut Game, input: &mut L) -> Result<ReplControl> {
    lock_player(&game.player)?.show_inventory(&mut game.view);
    game.view.flush();

    let prompt = "Enter the item number to use (or 0 to cancel): ".prompt_style().to_string();
    let line = match input.read_line(&prompt).context("while reading item number")? {
        InputEvent::Line(line) => line,
        InputEvent::Eof | InputEvent::Interrupted => {
            game.view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
            return Ok(ReplControl::Continue);
        },
    };

    match line.parse::<ItemSelection>() {
        Ok(ItemSelection::Cancel) => info!("item use canceled"),
        Ok(ItemSelection::Index(index)) => {
            let mut player = lock_player(&game.player)?;
            if let Err(e) = player.use_item(index, &mut game.view) {
                info!("item use refused: {e}");
                game.view.push(ViewItem::InvalidItemIndex);
            }
        },
        Err(e) => {
            info!("unrecognized item selection: {e}");
            game.view.push(ViewItem::InvalidItemIndex);
        },
    }
    Ok(ReplControl::Continue)
}
