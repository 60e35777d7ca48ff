//! Player -- module for the player character
use crate::config::PlayerConfig;
use crate::event::{GameEvent, Observer};
use crate::health::{HealthState, LivingEntity};
use crate::idgen::new_id;
use crate::item::Item;
use crate::view::{InventoryLine, View, ViewItem};

use log::info;
use thiserror::Error;
use uuid::Uuid;

/// Name used when the player doesn't give one.
pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

/// Problems with an inventory request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("no item at index {index} (inventory holds {len})")]
    InvalidIndex { index: usize, len: usize },
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub health: HealthState,
    pub damage: u32,
    pub inventory: Vec<Item>,
    /// Where observed world events are reported.
    event_view: View,
}
impl Default for Player {
    fn default() -> Player {
        Player::new(DEFAULT_PLAYER_NAME, &PlayerConfig::default())
    }
}
impl Player {
    /// Create a player at full health. A blank name falls back to [`DEFAULT_PLAYER_NAME`].
    pub fn new(name: &str, config: &PlayerConfig) -> Player {
        let name = match name.trim() {
            "" => DEFAULT_PLAYER_NAME,
            trimmed => trimmed,
        };
        Self {
            id: new_id(),
            name: name.to_string(),
            health: HealthState::new_at_max(config.max_hp),
            damage: config.damage,
            inventory: Vec::new(),
            event_view: View::new(),
        }
    }

    /// Report observed world events alongside `view`'s output instead of straight to the terminal.
    pub fn reporting_to(mut self, view: &View) -> Player {
        self.event_view = view.sibling();
        self
    }

    /// Put an item at the end of the inventory.
    pub fn add_item(&mut self, item: Item, view: &mut View) {
        info!("{} ({}) picked up {} ({})", self.name, self.id, item.name(), item.id);
        view.push(ViewItem::ItemAcquired(item.name().to_string()));
        self.inventory.push(item);
    }

    /// Report the inventory contents, in order.
    pub fn show_inventory(&self, view: &mut View) {
        let lines = self
            .inventory
            .iter()
            .map(|item| InventoryLine {
                name: item.name().to_string(),
                description: item.description().to_string(),
            })
            .collect();
        view.push(ViewItem::Inventory(lines));
    }

    /// Use (and remove) the item at zero-based `index`.
    ///
    /// # Errors
    /// - `InventoryError::InvalidIndex` if `index` is out of range. The inventory is untouched.
    pub fn use_item(&mut self, index: usize, view: &mut View) -> Result<(), InventoryError> {
        if index >= self.inventory.len() {
            return Err(InventoryError::InvalidIndex {
                index,
                len: self.inventory.len(),
            });
        }
        let item = self.inventory.remove(index);
        let used = item.use_on(self);
        view.push(used);
        Ok(())
    }

    /// Build the message shown when this player witnesses an event.
    pub fn observation(&self, event: &GameEvent) -> ViewItem {
        ViewItem::WorldEvent {
            observer: self.name.clone(),
            description: event.description().to_string(),
        }
    }
}
impl LivingEntity for Player {
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
impl Observer for Player {
    fn on_notify(&self, event: &GameEvent) {
        info!("{} ({}) observed event: {event}", self.name, self.id);
        let mut view = self.event_view.sibling();
        view.push(self.observation(event));
        view.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{HealthPotionFactory, ItemFactory};

    fn player_with_potions(count: usize) -> (Player, View) {
        let mut view = View::capturing();
        let mut player = Player::new("Ada", &PlayerConfig::default());
        let factory = HealthPotionFactory::default();
        for _ in 0..count {
            player.add_item(factory.create_item(), &mut view);
        }
        (player, view)
    }

    #[test]
    fn new_player_uses_config_and_default_name() {
        let player = Player::new("   ", &PlayerConfig::default());
        assert_eq!(player.name, DEFAULT_PLAYER_NAME);
        assert_eq!(player.current_hp(), 100);
        assert_eq!(player.attack_power(), 10);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn out_of_range_index_leaves_inventory_alone() {
        let (mut player, mut view) = player_with_potions(2);
        let err = player.use_item(5, &mut view).unwrap_err();
        assert_eq!(err, InventoryError::InvalidIndex { index: 5, len: 2 });
        assert_eq!(player.inventory.len(), 2);

        assert!(player.use_item(2, &mut view).is_err());
        assert_eq!(player.inventory.len(), 2);
    }

    #[test]
    fn using_item_heals_and_removes_it() {
        let (mut player, mut view) = player_with_potions(2);
        player.take_damage(35);
        player.use_item(0, &mut view).unwrap();
        assert_eq!(player.current_hp(), 85);
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn inventory_listing_is_ordered() {
        let (mut player, mut view) = player_with_potions(2);
        player.show_inventory(&mut view);
        view.flush();
        let transcript = view.transcript().join("\n");
        assert!(transcript.contains("1. Health Potion: Restores 20 HP"));
        assert!(transcript.contains("2. Health Potion: Restores 20 HP"));
    }

    #[test]
    fn players_get_distinct_ids() {
        let first = Player::new("Ada", &PlayerConfig::default());
        let second = Player::new("Ada", &PlayerConfig::default());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn notified_player_reports_into_shared_view() {
        let view = View::capturing();
        let player = Player::new("Ada", &PlayerConfig::default()).reporting_to(&view);
        player.on_notify(&GameEvent::Random {
            description: "Dust falls from the ceiling.".into(),
        });
        assert_eq!(view.transcript(), ["Player Ada observed: Dust falls from the ceiling."]);
    }

    #[test]
    fn observation_names_player_and_event() {
        let player = Player::new("Ada", &PlayerConfig::default());
        let msg = player.observation(&GameEvent::Random {
            description: "A cold wind blows.".into(),
        });
        assert_eq!(msg.plain_text(), "Player Ada observed: A cold wind blows.");
    }
}
