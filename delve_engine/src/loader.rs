//! Building the world for a new session from the game configuration.

use log::info;

use crate::config::GameConfig;
use crate::enemy::EnemyTemplate;
use crate::item::HealthPotionFactory;
use crate::room::{Room, RoomKind};
use crate::world::World;

/// Create the world with its rooms: one treasure room followed by one monster room.
pub fn build_world(config: &GameConfig) -> World {
    let world = World::new();
    world.add_room(Room::new("treasure_room", RoomKind::Treasure {
        loot: HealthPotionFactory::from(&config.potion),
    }));
    world.add_room(Room::new("monster_room", RoomKind::Monster {
        enemy: EnemyTemplate::from(&config.enemy),
    }));
    info!("{} rooms added to world", world.room_count());
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_follow_config() {
        let mut config = GameConfig::default();
        config.enemy.name = "Kobold".into();
        config.potion.restores = 50;
        let world = build_world(&config);
        let rooms = world.rooms();
        assert_eq!(rooms.len(), 2);
        assert!(matches!(&rooms[0].kind, RoomKind::Treasure { loot } if loot.restores == 50));
        assert!(matches!(&rooms[1].kind, RoomKind::Monster { enemy } if enemy.name == "Kobold"));
    }
}
