//! Room definitions.
//!
//! Every room has one effect: what happens when the player walks in. The set of room kinds is
//! closed -- treasure rooms hand out loot, monster rooms start a fight.

use log::info;
use uuid::Uuid;

use crate::combat::{CombatOutcome, fight};
use crate::enemy::EnemyTemplate;
use crate::idgen::{NAMESPACE_ROOM, uuid_from_token};
use crate::item::{HealthPotionFactory, ItemFactory};
use crate::player::Player;
use crate::view::{View, ViewItem};

/// What a room does to the player on entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomKind {
    /// Grants one freshly made item.
    Treasure { loot: HealthPotionFactory },
    /// Spawns an enemy and fights it to the death.
    Monster { enemy: EnemyTemplate },
}
impl RoomKind {
    /// Stock description used when a room isn't given its own.
    pub fn default_description(&self) -> &'static str {
        match self {
            RoomKind::Treasure { .. } => "A room filled with treasure!",
            RoomKind::Monster { .. } => "A dark room with a lurking monster.",
        }
    }
}

/// Result of a single visit to a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomOutcome {
    Looted,
    Fought(CombatOutcome),
}

/// A visitable location with a single entry effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Uuid,
    pub symbol: String,
    pub description: String,
    pub kind: RoomKind,
}
impl Room {
    /// Create a room with the stock description for its kind.
    /// The id is derived from `symbol`, so the same symbol always yields the same id.
    pub fn new(symbol: &str, kind: RoomKind) -> Room {
        Room {
            id: uuid_from_token(&NAMESPACE_ROOM, symbol),
            symbol: symbol.to_string(),
            description: kind.default_description().to_string(),
            kind,
        }
    }

    /// Replace the stock description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Room {
        self.description = description.into();
        self
    }

    /// Walk the player into this room and apply its effect.
    pub fn enter(&self, player: &mut Player, view: &mut View) -> RoomOutcome {
        info!("{} entered room '{}' ({})", player.name, self.symbol, self.id);
        view.push(ViewItem::RoomEntered(self.description.clone()));
        match &self.kind {
            RoomKind::Treasure { loot } => {
                player.add_item(loot.create_item(), view);
                RoomOutcome::Looted
            },
            RoomKind::Monster { enemy } => {
                let mut foe = enemy.spawn();
                RoomOutcome::Fought(fight(player, &mut foe, view))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use crate::health::LivingEntity;

    fn treasure_room() -> Room {
        Room::new("treasure_room", RoomKind::Treasure {
            loot: HealthPotionFactory::default(),
        })
    }

    fn monster_room() -> Room {
        Room::new("monster_room", RoomKind::Monster {
            enemy: EnemyTemplate::default(),
        })
    }

    #[test]
    fn treasure_room_adds_exactly_one_item() {
        let mut view = View::capturing();
        let mut player = Player::new("Ada", &PlayerConfig::default());
        let room = treasure_room();
        for expected in 1..=3 {
            assert_eq!(room.enter(&mut player, &mut view), RoomOutcome::Looted);
            assert_eq!(player.inventory.len(), expected);
        }
        assert_eq!(player.inventory[0].name(), "Health Potion");
        assert_eq!(player.current_hp(), 100);
    }

    #[test]
    fn monster_room_spawns_a_fresh_goblin_each_visit() {
        let mut view = View::capturing();
        let mut player = Player::new("Ada", &PlayerConfig::default());
        let room = monster_room();

        let first = room.enter(&mut player, &mut view);
        assert_eq!(first, RoomOutcome::Fought(CombatOutcome::PlayerWon { rounds: 3 }));
        assert_eq!(player.current_hp(), 90);

        let second = room.enter(&mut player, &mut view);
        assert_eq!(second, RoomOutcome::Fought(CombatOutcome::PlayerWon { rounds: 3 }));
        assert_eq!(player.current_hp(), 80);
    }

    #[test]
    fn room_ids_are_stable_per_symbol() {
        assert_eq!(treasure_room().id, treasure_room().id);
        assert_ne!(treasure_room().id, monster_room().id);
    }

    #[test]
    fn entry_reports_description() {
        let mut view = View::capturing();
        let mut player = Player::default();
        let room = treasure_room().with_description("a glittering vault.");
        room.enter(&mut player, &mut view);
        view.flush();
        assert_eq!(view.transcript()[0], "You enter a glittering vault.");
    }
}
