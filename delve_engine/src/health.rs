//! Health Module
//!
//! Handles health and combat abilities shared by every living entity (the player and enemies).
use std::cmp;

use log::debug;

use crate::view::ViewItem;

/// Represents the state of a living entity's health.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthState {
    max_hp: u32,
    current_hp: u32,
}
impl HealthState {
    /// Create a clean `HealthState` with specified maximum health
    pub fn new_at_max(max_hp: u32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Get the maximum HP for this entity
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Get the current HP for this entity
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health. Saturates at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Heal the entity. Saturates at max health.
    pub fn heal(&mut self, amount: u32) {
        self.current_hp = cmp::min(self.max_hp, self.current_hp.saturating_add(amount));
    }
}

/// Possible life states for living entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}

/// Abilities common to game entities that are alive
pub trait LivingEntity {
    fn name(&self) -> &str;
    fn health(&self) -> &HealthState;
    fn health_mut(&mut self) -> &mut HealthState;
    /// Fixed amount of damage this entity deals per attack.
    fn attack_power(&self) -> u32;

    fn max_hp(&self) -> u32 {
        self.health().max_hp()
    }

    fn current_hp(&self) -> u32 {
        self.health().current_hp()
    }

    fn take_damage(&mut self, amount: u32) {
        self.health_mut().damage(amount);
    }

    fn heal(&mut self, amount: u32) {
        self.health_mut().heal(amount);
    }

    fn life_state(&self) -> LifeState {
        self.health().life_state()
    }

    fn is_alive(&self) -> bool {
        self.life_state() == LifeState::Alive
    }

    /// Strike `target` for this entity's attack power and describe the blow.
    fn attack<T: LivingEntity>(&self, target: &mut T) -> ViewItem
    where
        Self: Sized,
    {
        let amount = self.attack_power();
        target.take_damage(amount);
        debug!(
            "{} hit {} for {amount} ({} hp left)",
            self.name(),
            target.name(),
            target.current_hp()
        );
        ViewItem::Attack {
            attacker: self.name().to_string(),
            target: target.name().to_string(),
            amount,
        }
    }
}
