//! Enemy Module
//!
//! Enemies are plain combatants. A fresh one is spawned from an [`EnemyTemplate`] for every
//! monster encounter and dropped when the encounter ends.


use crate::config::EnemyConfig;
use crate::health::{HealthState, LivingEntity};

/// A hostile creature met in a monster room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub health: HealthState,
    pub damage: u32,
}
impl Enemy {
    pub fn new(name: impl Into<String>, max_hp: u32, damage: u32) -> Enemy {
        Self {
            name: name.into(),
            health: HealthState::new_at_max(max_hp),
            damage,
        }
    }
}
impl LivingEntity for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &HealthState {
        &self.health
    }

    fn health_mut(&mut self) -> &mut HealthState {
        &mut self.health
    }

    fn attack_power(&self) -> u32 {
        self.damage
    }
}

/// Fixed stats used to spawn enemies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: String,
    pub max_hp: u32,
    pub damage: u32,
}
impl EnemyTemplate {
    /// Spawn a new enemy at full health.
    pub fn spawn(&self) -> Enemy {
        Enemy::new(self.name.clone(), self.max_hp, self.damage)
    }
}
impl Default for EnemyTemplate {
    fn default() -> Self {
        Self::from(&EnemyConfig::default())
    }
}
impl From<&EnemyConfig> for EnemyTemplate {
    fn from(config: &EnemyConfig) -> Self {
        Self {
            name: config.name.clone(),
            max_hp: config.max_hp,
            damage: config.damage,
        }
    }
}
