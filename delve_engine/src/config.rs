//! Game configuration and loader.
//!
//! Tunable numbers (starting stats, enemy stats, potion strength, event timing) and the
//! narrative lines used for random events live in `delve.toml`. Every field has a default,
//! so a partial file is fine and a missing file just means the stock game.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default narrative line for a random event.
pub const DEFAULT_EVENT_DESCRIPTION: &str = "A random event occurred in the game world!";

/// Reasons a configuration could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Complete game configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub potion: PotionConfig,
    pub events: EventConfig,
}

/// Starting stats for the player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_hp: u32,
    pub damage: u32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_hp: 100,
            damage: 10,
        }
    }
}

/// Stats of the enemy lurking in monster rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub name: String,
    pub max_hp: u32,
    pub damage: u32,
}
impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            name: "Goblin".to_string(),
            max_hp: 30,
            damage: 5,
        }
    }
}

/// The potion handed out by treasure rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PotionConfig {
    pub name: String,
    pub description: String,
    pub restores: u32,
}
impl Default for PotionConfig {
    fn default() -> Self {
        Self {
            name: "Health Potion".to_string(),
            description: "Restores 20 HP".to_string(),
            restores: 20,
        }
    }
}

/// Timing and text for the background event generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Seconds between rolls.
    pub interval_secs: u64,
    /// An event fires when a roll in `1..=one_in` comes up 1.
    pub one_in: u32,
    /// Narrative lines; one is picked at random per event.
    pub descriptions: Vec<String>,
}
impl Default for EventConfig {
    fn default() -> Self {
        Self {
            interval_secs: 5,
            one_in: 10,
            descriptions: vec![DEFAULT_EVENT_DESCRIPTION.to_string()],
        }
    }
}
impl EventConfig {
    /// Time between rolls, never shorter than one second.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

impl GameConfig {
    /// Parse and validate a configuration from TOML text.
    ///
    /// # Errors
    /// - `ConfigError::Parse` on malformed TOML or wrongly typed fields
    /// - `ConfigError::Invalid` if a value is out of range
    pub fn from_toml_str(text: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    /// - `ConfigError::Invalid` naming the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player.max_hp == 0 {
            return Err(ConfigError::Invalid("player.max_hp must be greater than 0".into()));
        }
        if self.enemy.max_hp == 0 {
            return Err(ConfigError::Invalid("enemy.max_hp must be greater than 0".into()));
        }
        if self.events.one_in == 0 {
            return Err(ConfigError::Invalid("events.one_in must be at least 1".into()));
        }
        if self.events.interval_secs == 0 {
            return Err(ConfigError::Invalid("events.interval_secs must be at least 1".into()));
        }
        Ok(())
    }
}

/// Load configuration from `path`, falling back to defaults if the file is missing or unusable.
pub fn load_config(path: &Path) -> GameConfig {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("unable to read config '{}' ({e}); using defaults", path.display());
            return GameConfig::default();
        },
    };
    match GameConfig::from_toml_str(&text) {
        Ok(config) => {
            info!("configuration loaded from '{}'", path.display());
            config
        },
        Err(e) => {
            warn!("ignoring config '{}': {e}; using defaults", path.display());
            GameConfig::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            [enemy]
            name = "Kobold"

            [events]
            one_in = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.enemy.name, "Kobold");
        assert_eq!(config.enemy.max_hp, 30);
        assert_eq!(config.events.one_in, 3);
        assert_eq!(config.events.interval_secs, 5);
        assert_eq!(config.player, PlayerConfig::default());
    }

    #[test]
    fn empty_text_is_the_default_game() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = GameConfig::from_toml_str("[player]\nmax_hp = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_toml_str("[events]\none_in = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_interval_is_clamped_to_a_second() {
        let events = EventConfig {
            interval_secs: 0,
            ..EventConfig::default()
        };
        assert_eq!(events.interval(), Duration::from_secs(1));
        assert_eq!(EventConfig::default().interval(), Duration::from_secs(5));
    }

    #[test]
    fn rejects_wrong_types() {
        let err = GameConfig::from_toml_str("[player]\ndamage = \"lots\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn serialized_shape_uses_section_names() {
        let value = serde_json::to_value(GameConfig::default()).unwrap();
        assert_eq!(value["enemy"]["name"], "Goblin");
        assert_eq!(value["potion"]["restores"], 20);
        assert_eq!(value["events"]["one_in"], 10);

        let toml_text = toml::to_string(&GameConfig::default()).unwrap();
        assert_eq!(GameConfig::from_toml_str(&toml_text).unwrap(), GameConfig::default());
    }

    #[test]
    fn load_config_reads_file_and_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[potion]\nrestores = 35").unwrap();
        let config = load_config(file.path());
        assert_eq!(config.potion.restores, 35);

        let missing = file.path().with_extension("missing");
        assert_eq!(load_config(&missing), GameConfig::default());

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "[player\nmax_hp = ").unwrap();
        assert_eq!(load_config(bad.path()), GameConfig::default());
    }
}
