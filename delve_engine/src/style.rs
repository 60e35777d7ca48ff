//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn enemy_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn combat_style(&self) -> ColoredString;
    fn heal_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn event_style(&self) -> ColoredString;
    fn health_style(&self) -> ColoredString;
    fn low_health_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn death_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(250, 200, 100)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn enemy_style(&self) -> ColoredString {
        self.bold().truecolor(200, 60, 170)
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn combat_style(&self) -> ColoredString {
        self.truecolor(230, 80, 80)
    }
    fn heal_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
    fn event_style(&self) -> ColoredString {
        self.italic().truecolor(150, 230, 30).dimmed()
    }
    fn health_style(&self) -> ColoredString {
        self.truecolor(20, 220, 100)
    }
    fn low_health_style(&self) -> ColoredString {
        self.bold().truecolor(230, 30, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn death_style(&self) -> ColoredString {
        self.bold().on_red()
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn enemy_style(&self) -> ColoredString {
        self.as_str().enemy_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn combat_style(&self) -> ColoredString {
        self.as_str().combat_style()
    }
    fn heal_style(&self) -> ColoredString {
        self.as_str().heal_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn event_style(&self) -> ColoredString {
        self.as_str().event_style()
    }
    fn health_style(&self) -> ColoredString {
        self.as_str().health_style()
    }
    fn low_health_style(&self) -> ColoredString {
        self.as_str().low_health_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn death_style(&self) -> ColoredString {
        self.as_str().death_style()
    }
}
