//! Turn and game result types.

use alloc::vec::Vec;

use crate::card::Card;

/// Cards taken by a pickup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pickup {
    /// The card drawn from the deck.
    pub card: Card,
    /// Whether the drawn card was the penalty card.
    pub penalty: bool,
    /// Extra cards taken because of the penalty.
    ///
    /// Empty when no penalty applied or the deck could not cover it.
    pub bonus: Vec<Card>,
}

impl Pickup {
    /// Returns the total number of cards added to the hand.
    #[must_use]
    pub fn total(&self) -> usize {
        1 + self.bonus.len()
    }
}

/// What happened during a completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A card was played and is now the current card.
    Played(Card),
    /// Cards were drawn from the deck.
    PickedUp(Pickup),
    /// The turn was passed with no change.
    Passed,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player emptied their hand.
    PlayerWins,
    /// The computer emptied its hand.
    ComputerWins,
}
