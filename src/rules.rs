//! Fixed game rules.

use core::ops::RangeInclusive;

use crate::card::{Card, Rank};

/// Cards dealt to each side at the start of a game.
pub const HAND_SIZE: usize = 10;

/// Extra cards taken after drawing the penalty card.
pub const PENALTY_DRAW: usize = 5;

/// Deck indices the penalty card may be placed at after shuffling.
///
/// Keeps it out of the first few draws and out of the bottom half, where it
/// would never come up.
pub const PENALTY_WINDOW: RangeInclusive<usize> = 5..=27;

/// Returns whether `candidate` may be played on top of `current`.
///
/// A card is playable when its rank is exactly one below the current card,
/// or when a King is played on an Ace. Suits are never consulted.
///
/// ```
/// use solitaire_uno::{Card, Rank, Suit, valid_card};
///
/// let ace = Card::new(Rank::Ace, Suit::Diamonds);
/// let king = Card::new(Rank::King, Suit::Clubs);
/// assert!(valid_card(&king, &ace));
/// assert!(!valid_card(&ace, &king));
/// ```
#[must_use]
pub const fn valid_card(candidate: &Card, current: &Card) -> bool {
    let candidate = candidate.rank.weight();
    let current = current.rank.weight();

    candidate + 1 == current
        || (candidate == Rank::King.weight() && current == Rank::Ace.weight())
}
