//! A two-player Uno-style card game played with a standard 52-card deck.
//!
//! Cards must be played in strictly descending rank, with a King allowed on
//! an Ace. Drawing the Queen of Spades costs five extra cards. The crate
//! provides a [`Game`] type that owns the deck, both hands, and the current
//! card, and a [`Session`] that plays it over text input and output.
//!
//! # Example
//!
//! ```
//! use solitaire_uno::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! if game.pickup().is_ok() {
//!     assert_eq!(game.state(), GameState::ComputerTurn);
//!     game.computer_turn().unwrap();
//! }
//! assert_eq!(game.total_cards(), 52);
//! ```

extern crate alloc;

pub mod card;
pub mod command;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, PENALTY_CARD, Rank, Suit};
pub use command::Command;
pub use deck::Deck;
pub use error::{ActionError, CommandError, DealError, SessionError};
pub use game::{Game, GameState, Side};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{GameOutcome, Pickup, TurnOutcome};
pub use rules::{HAND_SIZE, PENALTY_DRAW, PENALTY_WINDOW, valid_card};
pub use session::Session;
