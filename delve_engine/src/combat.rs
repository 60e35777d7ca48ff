//! Turn-based combat between the player and a single enemy.
//!
//! Each round the player strikes first; the enemy answers only if it survived. Rounds repeat
//! until one side is dead.

use log::info;

use crate::enemy::Enemy;
use crate::health::LivingEntity;
use crate::player::Player;
use crate::view::{View, ViewItem};

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    PlayerWon { rounds: u32 },
    PlayerDied { rounds: u32 },
    /// Neither side can hurt the other.
    Stalemate,
}

/// Fight until the player or the enemy is dead.
pub fn fight(player: &mut Player, enemy: &mut Enemy, view: &mut View) -> CombatOutcome {
    if player.attack_power() == 0 && enemy.attack_power() == 0 {
        info!("{} and {} cannot harm each other", player.name(), enemy.name());
        view.push(ViewItem::Stalemate(enemy.name().to_string()));
        return CombatOutcome::Stalemate;
    }
    // at least one side deals damage, so every round moves one health total toward zero
    let mut rounds = 0;
    while player.is_alive() && enemy.is_alive() {
        rounds += 1;
        view.push(player.attack(enemy));
        if enemy.is_alive() {
            view.push(enemy.attack(player));
        }
    }

    if player.is_alive() {
        info!(
            "{} defeated {} in {rounds} round(s) with {} hp left",
            player.name(),
            enemy.name(),
            player.current_hp()
        );
        view.push(ViewItem::EnemyDefeated(enemy.name().to_string()));
        CombatOutcome::PlayerWon { rounds }
    } else {
        info!("{} was killed by {} after {rounds} round(s)", player.name(), enemy.name());
        CombatOutcome::PlayerDied { rounds }
    }
}
