//! Command module
//!
//! Turns raw input lines into menu choices and item selections.
use std::str::FromStr;

use thiserror::Error;

/// Input that doesn't name anything on offer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{0} is not one of the menu options")]
    NoSuchOption(i64),
}

/// The four main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Explore,
    Inventory,
    UseItem,
    Quit,
}
impl FromStr for MenuChoice {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match parse_number(input)? {
            1 => Ok(MenuChoice::Explore),
            2 => Ok(MenuChoice::Inventory),
            3 => Ok(MenuChoice::UseItem),
            4 => Ok(MenuChoice::Quit),
            other => Err(CommandError::NoSuchOption(other)),
        }
    }
}

/// Answer to the "which item?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSelection {
    Cancel,
    /// Zero-based inventory index.
    Index(usize),
}
impl FromStr for ItemSelection {
    type Err = CommandError;

    /// Input is 1-based as shown in the inventory listing; 0 cancels.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match parse_number(input)? {
            0 => Ok(ItemSelection::Cancel),
            n if n > 0 => usize::try_from(n - 1)
                .map(ItemSelection::Index)
                .map_err(|_| CommandError::NoSuchOption(n)),
            n => Err(CommandError::NoSuchOption(n)),
        }
    }
}

fn parse_number(input: &str) -> Result<i64, CommandError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CommandError::NotANumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Explore));
        assert_eq!(" 2 \n".parse::<MenuChoice>(), Ok(MenuChoice::Inventory));
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::UseItem));
        assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::Quit));
    }

    #[test]
    fn bad_menu_input_is_an_error_not_a_panic() {
        assert_eq!("5".parse::<MenuChoice>(), Err(CommandError::NoSuchOption(5)));
        assert_eq!("0".parse::<MenuChoice>(), Err(CommandError::NoSuchOption(0)));
        assert_eq!(
            "explore".parse::<MenuChoice>(),
            Err(CommandError::NotANumber("explore".into()))
        );
        assert!("".parse::<MenuChoice>().is_err());
        assert!("99999999999999999999999".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn item_selection_is_one_based_with_zero_cancel() {
        assert_eq!("0".parse::<ItemSelection>(), Ok(ItemSelection::Cancel));
        assert_eq!("1".parse::<ItemSelection>(), Ok(ItemSelection::Index(0)));
        assert_eq!("6".parse::<ItemSelection>(), Ok(ItemSelection::Index(5)));
        assert_eq!("-2".parse::<ItemSelection>(), Err(CommandError::NoSuchOption(-2)));
        assert!("potion".parse::<ItemSelection>().is_err());
    }
}
