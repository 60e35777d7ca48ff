//! Complete state of a running game session.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Result, anyhow};
use log::info;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::event::ObserverId;
use crate::health::LivingEntity;
use crate::loader::build_world;
use crate::player::Player;
use crate::view::{View, ViewItem};
use crate::world::World;

/// The player, the shared world registry and the per-session plumbing the game loop needs.
///
/// The player lives behind a mutex because it is also registered with the world as an
/// observer and may be notified from the event generator thread.
pub struct Game {
    pub world: Arc<World>,
    pub player: Arc<Mutex<Player>>,
    pub observer_id: ObserverId,
    pub rng: StdRng,
    pub view: View,
}
impl Game {
    /// Set up a new session: build the rooms, create the player and register them as an observer.
    pub fn new(config: &GameConfig, player_name: &str, view: View, rng: StdRng) -> Game {
        let world = Arc::new(build_world(config));
        let player = Arc::new(Mutex::new(Player::new(player_name, &config.player).reporting_to(&view)));
        let observer_id = world.add_observer(&player);
        info!("new game created with {} rooms", world.room_count());
        Game {
            world,
            player,
            observer_id,
            rng,
            view,
        }
    }

    /// Greet the player by name.
    ///
    /// # Errors
    /// - if the player state lock is poisoned
    pub fn welcome(&mut self) -> Result<()> {
        let name = lock_player(&self.player)?.name.clone();
        self.view.push(ViewItem::Welcome(name));
        self.view.flush();
        Ok(())
    }

    /// # Errors
    /// - if the player state lock is poisoned
    pub fn player_alive(&self) -> Result<bool> {
        Ok(lock_player(&self.player)?.is_alive())
    }
}

/// Lock the shared player.
///
/// # Errors
/// - if a thread panicked while holding the lock
pub fn lock_player(player: &Mutex<Player>) -> Result<MutexGuard<'_, Player>> {
    player.lock().map_err(|e| anyhow!("player state unavailable: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn new_game_registers_player_as_observer() {
        let game = Game::new(&GameConfig::default(), "Ada", View::capturing(), StdRng::seed_from_u64(1));
        assert_eq!(game.world.observer_count(), 1);
        assert_eq!(game.world.room_count(), 2);
        assert!(game.player_alive().unwrap());
        assert!(game.world.remove_observer(game.observer_id));
    }

    #[test]
    fn welcome_uses_player_name() {
        let mut game = Game::new(&GameConfig::default(), "Ada", View::capturing(), StdRng::seed_from_u64(1));
        game.welcome().unwrap();
        assert_eq!(game.view.transcript(), ["Welcome, Ada! Your adventure begins..."]);
    }
}
