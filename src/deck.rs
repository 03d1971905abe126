//! The draw deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, PENALTY_CARD, Rank, Suit};
use crate::error::DealError;
use crate::rules::PENALTY_WINDOW;

/// An ordered pile of cards. The last element is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full 52-card deck, shuffles it, and moves the penalty card to
    /// a random index in [`PENALTY_WINDOW`].
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use solitaire_uno::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(&mut ChaCha8Rng::seed_from_u64(7));
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(rng);

        if let Some(index) = cards.iter().position(Card::is_penalty) {
            let penalty = cards.remove(index);
            let position = rng.random_range(PENALTY_WINDOW);
            cards.insert(position, penalty);
        }

        tracing::debug!(
            penalty_position = cards.iter().position(Card::is_penalty),
            "built deck"
        );

        Self { cards }
    }

    /// Creates a deck with the given cards. The last card is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the index of `card` counted from the bottom of the deck.
    #[must_use]
    pub fn position_of(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Returns the index of the penalty card, if it is still in the deck.
    #[must_use]
    pub fn penalty_position(&self) -> Option<usize> {
        self.position_of(&PENALTY_CARD)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::EmptyDeck)
    }

    /// Removes and returns the top `count` cards, in the order dealt.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] without dealing anything if fewer
    /// than `count` cards remain.
    pub fn deal_many(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if remaining < count {
            return Err(DealError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        let mut dealt = self.cards.split_off(remaining - count);
        dealt.reverse();
        Ok(dealt)
    }
}
