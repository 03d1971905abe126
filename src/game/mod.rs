//! Game engine and state management.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{GameOutcome, Pickup};
use crate::rules::{HAND_SIZE, PENALTY_DRAW};

mod actions;
mod computer;
pub mod state;

pub use state::{GameState, Side};

/// A game between the player and the computer.
///
/// The game owns the deck, both hands, and the current card. The player
/// moves first; each full round is the player's turn followed by the
/// computer's, and the game ends after the first round that leaves either
/// hand empty.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: GameState,
    /// The player's hand.
    pub player_hand: Hand,
    /// The computer's hand.
    pub computer_hand: Hand,
    /// The card on the table that the next play must follow.
    pub current_card: Card,
}

impl Game {
    /// Creates a new game with the given seed and deals the opening hands.
    ///
    /// # Example
    ///
    /// ```
    /// use solitaire_uno::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::PlayerTurn);
    /// assert_eq!(game.player_hand.len(), 10);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Creates a new game drawing randomness from `rng`.
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a freshly built deck always covers the opening deal"
    )]
    pub fn with_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        Self::from_deck(options, Deck::new(rng))
            .expect("a full deck holds more cards than the opening deal")
    }

    /// Deals the opening hands and the first current card from `deck`.
    ///
    /// Ten cards go to the player, then ten to the computer, then one card
    /// becomes the current card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than 21 cards.
    pub fn from_deck(options: GameOptions, mut deck: Deck) -> Result<Self, DealError> {
        let needed = HAND_SIZE * 2 + 1;
        if deck.len() < needed {
            return Err(DealError::NotEnoughCards {
                requested: needed,
                remaining: deck.len(),
            });
        }

        let player_hand = Hand::from_cards(deck.deal_many(HAND_SIZE)?);
        let computer_hand = Hand::from_cards(deck.deal_many(HAND_SIZE)?);
        let current_card = deck.deal()?;

        tracing::info!(%current_card, cards_remaining = deck.len(), "dealt opening hands");

        Ok(Self::from_parts(
            options,
            deck,
            player_hand,
            computer_hand,
            current_card,
        ))
    }

    /// Assembles a game from an explicit position, with the player to move.
    ///
    /// If either hand is already empty the game starts over.
    #[must_use]
    pub fn from_parts(
        options: GameOptions,
        deck: Deck,
        player_hand: Hand,
        computer_hand: Hand,
        current_card: Card,
    ) -> Self {
        let mut game = Self {
            deck,
            options,
            state: GameState::PlayerTurn,
            player_hand,
            computer_hand,
            current_card,
        };
        game.end_round();
        game
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the card currently on the table.
    #[must_use]
    pub const fn current_card(&self) -> Card {
        self.current_card
    }

    /// Returns the hand held by `side`.
    #[must_use]
    pub const fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::Computer => &self.computer_hand,
        }
    }

    const fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Computer => &mut self.computer_hand,
        }
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards in play: deck, both hands, and the
    /// current card. Always [`DECK_SIZE`](crate::DECK_SIZE) for a game
    /// started from a full deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.player_hand.len() + self.computer_hand.len() + 1
    }

    /// Returns the winner once the game is over.
    ///
    /// If both hands are empty the computer is credited with the win, since
    /// its hand is checked first.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.state != GameState::GameOver {
            return None;
        }

        if self.computer_hand.is_empty() {
            Some(GameOutcome::ComputerWins)
        } else if self.player_hand.is_empty() {
            Some(GameOutcome::PlayerWins)
        } else {
            None
        }
    }

    /// Draws one card into `side`'s hand, plus the penalty cards when the
    /// drawn card is the Queen of Spades and the deck can still cover them.
    fn pick_up(&mut self, side: Side) -> Result<Pickup, DealError> {
        let card = self.deck.deal()?;
        let penalty = card.is_penalty();

        let bonus = if penalty && self.deck.len() >= PENALTY_DRAW {
            self.deck.deal_many(PENALTY_DRAW)?
        } else {
            Vec::new()
        };

        let hand = self.hand_mut(side);
        hand.add_card(card);
        hand.extend(bonus.iter().copied());

        tracing::debug!(
            ?side,
            %card,
            penalty,
            bonus = bonus.len(),
            cards_remaining = self.deck.len(),
            "picked up"
        );

        Ok(Pickup {
            card,
            penalty,
            bonus,
        })
    }

    /// Closes a round: the game is over if either hand is empty, otherwise
    /// the player moves next.
    fn end_round(&mut self) {
        if self.player_hand.is_empty() || self.computer_hand.is_empty() {
            self.state = GameState::GameOver;
            tracing::info!(
                player_cards = self.player_hand.len(),
                computer_cards = self.computer_hand.len(),
                "game over"
            );
        } else {
            self.state = GameState::PlayerTurn;
        }
    }
}
