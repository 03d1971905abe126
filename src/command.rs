//! Player input grammar.

use core::str::FromStr;

use alloc::string::ToString;

use crate::error::CommandError;

/// A move typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the card with this 1-based number. May be out of range.
    Play(usize),
    /// Pass the turn.
    Pass,
    /// Draw a card from the deck.
    Pickup,
}

impl Command {
    /// Parses one line of player input.
    ///
    /// Surrounding whitespace is ignored. A number too large to represent is
    /// kept as `usize::MAX`, which no hand can reach.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Unrecognized`] for anything that is not a card
    /// number, `pass`, or `pickup`.
    ///
    /// ```
    /// use solitaire_uno::Command;
    ///
    /// assert_eq!(Command::parse(" 3\n"), Ok(Command::Play(3)));
    /// assert_eq!(Command::parse("pick up"), Ok(Command::Pickup));
    /// assert!(Command::parse("draw").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();

        match input {
            "pass" | "Pass" => Ok(Self::Pass),
            "pickup" | "Pickup" | "pick up" => Ok(Self::Pickup),
            _ if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Self::Play(input.parse().unwrap_or(usize::MAX)))
            }
            _ => Err(CommandError::Unrecognized(input.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
