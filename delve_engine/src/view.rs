//! View module.
//! Rather than printing to the console from each handler, game logic pushes [`ViewItem`]s into a
//! [`View`], which styles and prints them when the turn's output is flushed.
//!
//! A capturing view records the unstyled text instead of printing it, which is how the
//! game loop is observed in tests. Views made with [`View::sibling`] share that record, so
//! output produced off the main loop (world events) lands in the same transcript.

use std::sync::{Arc, Mutex};

use colored::Colorize;
use log::warn;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::GameStyle;

/// One line of an inventory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLine {
    pub name: String,
    pub description: String,
}

/// Everything the game can tell the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    Welcome(String),
    Menu,
    RoomEntered(String),
    ItemAcquired(String),
    Attack { attacker: String, target: String, amount: u32 },
    EnemyDefeated(String),
    Stalemate(String),
    ItemUsed { user: String, item: String, restores: u32 },
    Inventory(Vec<InventoryLine>),
    InvalidItemIndex,
    InvalidChoice,
    Health { current: u32, max: u32 },
    WorldEvent { observer: String, description: String },
    EngineMessage(String),
    Error(String),
    Farewell,
    GameOver,
}
impl ViewItem {
    /// The message without any terminal styling.
    pub fn plain_text(&self) -> String {
        match self {
            ViewItem::Welcome(name) => format!("Welcome, {name}! Your adventure begins..."),
            ViewItem::Menu => [
                "What would you like to do?",
                "1. Explore the next room",
                "2. Check inventory",
                "3. Use item",
                "4. Quit",
            ]
            .join("\n"),
            ViewItem::RoomEntered(description) => format!("You enter {description}"),
            ViewItem::ItemAcquired(name) => format!("You picked up {name}!"),
            ViewItem::Attack {
                attacker,
                target,
                amount,
            } => format!("{attacker} attacks {target} for {amount} damage!"),
            ViewItem::EnemyDefeated(name) => format!("You defeated the {name}!"),
            ViewItem::Stalemate(name) => {
                format!("You and the {name} circle each other, but neither can land a blow. You back away.")
            },
            ViewItem::ItemUsed { user, item, restores } => {
                format!("{user} uses a {item} and restores {restores} HP!")
            },
            ViewItem::Inventory(lines) => {
                let mut text = String::from("Inventory:");
                if lines.is_empty() {
                    text.push_str("\n(empty)");
                }
                for (n, line) in lines.iter().enumerate() {
                    text.push_str(&format!("\n{}. {}: {}", n + 1, line.name, line.description));
                }
                text
            },
            ViewItem::InvalidItemIndex => "Invalid item index.".to_string(),
            ViewItem::InvalidChoice => "Invalid choice. Try again.".to_string(),
            ViewItem::Health { current, .. } => format!("Your health: {current}"),
            ViewItem::WorldEvent { observer, description } => {
                format!("Player {observer} observed: {description}")
            },
            ViewItem::EngineMessage(msg) | ViewItem::Error(msg) => msg.clone(),
            ViewItem::Farewell => "Thanks for playing!".to_string(),
            ViewItem::GameOver => "Game Over! You died.".to_string(),
        }
    }

    /// The message styled for the terminal.
    pub fn render(&self) -> String {
        match self {
            ViewItem::Menu => {
                let text = self.plain_text();
                let mut lines = text.lines();
                let heading = lines.next().unwrap_or_default().bold();
                let options = lines.collect::<Vec<_>>().join("\n");
                format!("{heading}\n{options}")
            },
            ViewItem::Welcome(name) => {
                format!("Welcome, {}! Your adventure begins...", name.bold().bright_blue())
            },
            ViewItem::RoomEntered(description) => format!("You enter {}", description.description_style()),
            ViewItem::ItemAcquired(name) => format!("You picked up {}!", name.item_style()),
            ViewItem::Attack { .. } => self.plain_text().combat_style().to_string(),
            ViewItem::Stalemate(name) => format!(
                "{} {}{}",
                "You and the".combat_style(),
                name.enemy_style(),
                " circle each other, but neither can land a blow. You back away.".combat_style()
            ),
            ViewItem::EnemyDefeated(name) => {
                format!("{} {}{}", "You defeated the".victory_style(), name.enemy_style(), "!".victory_style())
            },
            ViewItem::ItemUsed { .. } => self.plain_text().heal_style().to_string(),
            ViewItem::Inventory(lines) => {
                let mut text = "Inventory:".underline().to_string();
                if lines.is_empty() {
                    text.push_str(&format!("\n{}", "(empty)".italic().dimmed()));
                }
                for (n, line) in lines.iter().enumerate() {
                    text.push_str(&format!("\n{}. {}: {}", n + 1, line.name.item_style(), line.description));
                }
                text
            },
            ViewItem::InvalidItemIndex | ViewItem::InvalidChoice | ViewItem::Error(_) => {
                self.plain_text().error_style().to_string()
            },
            ViewItem::Health { current, max } => {
                // a quarter or less of max health shows in warning colors
                if u64::from(*current) * 4 <= u64::from(*max) {
                    self.plain_text().low_health_style().to_string()
                } else {
                    self.plain_text().health_style().to_string()
                }
            },
            ViewItem::WorldEvent { .. } => self.plain_text().event_style().to_string(),
            ViewItem::EngineMessage(_) => self.plain_text().italic().to_string(),
            ViewItem::Farewell => self.plain_text().title_style().to_string(),
            ViewItem::GameOver => self.plain_text().death_style().to_string(),
        }
    }
}

/// Aggregates messages for the current turn and prints them on `flush`.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
    transcript: Option<Arc<Mutex<Vec<String>>>>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
impl View {
    /// Create a new empty view that prints to the terminal.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            transcript: None,
        }
    }

    /// Create a view that records plain text lines instead of printing.
    pub fn capturing() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            transcript: Some(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// An empty view writing to the same place as this one: the terminal, or this view's
    /// transcript if it is capturing.
    pub fn sibling(&self) -> Self {
        Self {
            width: self.width,
            items: Vec::new(),
            transcript: self.transcript.clone(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Display (or record) everything pushed since the last flush.
    pub fn flush(&mut self) {
        if let Some(transcript) = self.transcript.as_ref() {
            match transcript.lock() {
                Ok(mut lines) => {
                    for item in self.items.drain(..) {
                        lines.extend(item.plain_text().lines().map(str::to_string));
                    }
                },
                Err(e) => {
                    warn!("transcript unavailable ({e}); dropping {} item(s)", self.items.len());
                    self.items.clear();
                },
            }
            return;
        }
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for item in self.items.drain(..) {
            println!("{}", fill(&item.render(), self.width));
        }
    }

    /// Lines recorded so far by a capturing view (empty for a printing view).
    pub fn transcript(&self) -> Vec<String> {
        self.transcript
            .as_ref()
            .and_then(|lines| lines.lock().ok().map(|lines| lines.clone()))
            .unwrap_or_default()
    }
}
