//! `repl::explore` module
//!
//! Handler for wandering into the next room.

use anyhow::Result;
use log::{info, warn};

use crate::game::{Game, lock_player};
use crate::repl::ReplControl;
use crate::room::RoomOutcome;
use crate::view::ViewItem;

/// Enter a room picked uniformly at random from the world.
pub fn explore_handler(game: &mut Game) -> Result<ReplControl> {
    let Some(room) = game.world.random_room(&mut game.rng) else {
        warn!("explore requested but the world has no rooms");
        game.view.push(ViewItem::Error("There is nowhere left to explore.".to_string()));
        return Ok(ReplControl::Continue);
    };
    let mut player = lock_player(&game.player)?;
    match room.enter(&mut player, &mut game.view) {
        RoomOutcome::Looted => info!("room '{}' looted", room.symbol),
        RoomOutcome::Fought(outcome) => info!("fight in room '{}' ended: {outcome:?}", room.symbol),
    }
    Ok(ReplControl::Continue)
}
