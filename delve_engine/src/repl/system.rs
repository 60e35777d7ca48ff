//! `repl::system` module
//!
//! Handlers for leaving the game, one way or the other.

use anyhow::Result;
use log::info;

use crate::game::{Game, lock_player};
use crate::health::LivingEntity;
use crate::repl::ReplControl;
use crate::view::ViewItem;

/// Quit the game.
pub fn quit_handler(game: &mut Game) -> Result<ReplControl> {
    log_final_state(game, "quit")?;
    game.view.push(ViewItem::Farewell);
    Ok(ReplControl::Quit)
}

/// Announce the player's death.
pub fn death_handler(game: &mut Game) -> Result<()> {
    log_final_state(game, "died")?;
    game.view.push(ViewItem::GameOver);
    Ok(())
}

fn log_final_state(game: &Game, how: &str) -> Result<()> {
    let player = lock_player(&game.player)?;
    info!(
        "{} {how} with {}/{} hp",
        player.name,
        player.current_hp(),
        player.max_hp()
    );
    info!("ending inventory:");
    player
        .inventory
        .iter()
        .for_each(|item| info!("- {} ({})", item.name(), item.id));
    Ok(())
}
