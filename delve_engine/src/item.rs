//! Item types and the factories that produce them.
//!
//! Items are consumables carried in the player's inventory. Using an item consumes it,
//! so an `Item` value can only ever be applied once.

use log::info;
use uuid::Uuid;

use crate::config::PotionConfig;
use crate::health::LivingEntity;
use crate::idgen::new_id;
use crate::view::ViewItem;

/// The kinds of item that exist in the game and what each does when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Restores a fixed number of hit points, bounded by the user's maximum.
    HealthPotion { restores: u32 },
}

/// Something the player can pick up and use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
}
impl Item {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Apply this item's effect to `target`, consuming the item.
    pub fn use_on<T: LivingEntity>(self, target: &mut T) -> ViewItem {
        match self.kind {
            ItemKind::HealthPotion { restores } => {
                let before = target.current_hp();
                target.heal(restores);
                info!(
                    "{} used {} ({}): {before} -> {} hp",
                    target.name(),
                    self.name,
                    self.id,
                    target.current_hp()
                );
                ViewItem::ItemUsed {
                    user: target.name().to_string(),
                    item: self.name,
                    restores,
                }
            },
        }
    }
}

/// Produces fresh item instances.
pub trait ItemFactory {
    fn create_item(&self) -> Item;
}

/// Makes health potions with a fixed name, description and potency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthPotionFactory {
    pub name: String,
    pub description: String,
    pub restores: u32,
}
impl Default for HealthPotionFactory {
    fn default() -> Self {
        Self::from(&PotionConfig::default())
    }
}
impl From<&PotionConfig> for HealthPotionFactory {
    fn from(config: &PotionConfig) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            restores: config.restores,
        }
    }
}
impl ItemFactory for HealthPotionFactory {
    fn create_item(&self) -> Item {
        Item {
            id: new_id(),
            name: self.name.clone(),
            description: self.description.clone(),
            kind: ItemKind::HealthPotion {
                restores: self.restores,
            },
        }
    }
}
