//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck has no cards left.
    #[error("there are no cards left in the deck")]
    EmptyDeck,
    /// Fewer cards remain than were requested.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during a turn.
///
/// A failed action leaves the game untouched, so the same side may try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The chosen card number is not in the hand.
    #[error("that card number is not in your hand")]
    CardNotInHand,
    /// The chosen card cannot be played on the current card.
    #[error("that play is not valid")]
    InvalidPlay,
    /// Passing is only allowed once the deck is empty.
    #[error("there are cards still in the deck")]
    DeckNotEmpty,
    /// Picking up is only allowed while the deck has cards.
    #[error("there are no more cards left in the deck")]
    DeckEmpty,
}

/// Errors that can occur while parsing player input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The input matched none of the accepted commands.
    #[error("unrecognized command: {0:?}")]
    Unrecognized(String),
}

/// Errors that end an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Input ended before the game was over.
    #[error("input closed before the game was over")]
    InputClosed,
    /// The engine rejected a move the session expected to succeed.
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl From<DealError> for ActionError {
    fn from(_: DealError) -> Self {
        Self::DeckEmpty
    }
}
