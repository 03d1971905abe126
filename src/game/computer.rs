use crate::error::ActionError;
use crate::result::TurnOutcome;

use super::{Game, GameState, Side};

impl Game {
    /// Computer plays its turn.
    ///
    /// The computer scans its hand in order and plays the first card that can
    /// follow the current card. With nothing playable it picks up a card,
    /// or passes if the deck is empty. Afterwards the round is closed: the
    /// game ends if either hand is empty, otherwise the player moves next.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the computer's turn.
    pub fn computer_turn(&mut self) -> Result<TurnOutcome, ActionError> {
        if self.state != GameState::ComputerTurn {
            return Err(ActionError::InvalidState);
        }

        let playable = self
            .computer_hand
            .first_playable(&self.current_card)
            .and_then(|index| self.computer_hand.take(index));

        let outcome = if let Some(card) = playable {
            self.current_card = card;
            tracing::debug!(%card, cards_left = self.computer_hand.len(), "computer played");
            TurnOutcome::Played(card)
        } else if self.deck.is_empty() {
            tracing::debug!("computer passed");
            TurnOutcome::Passed
        } else {
            TurnOutcome::PickedUp(self.pick_up(Side::Computer)?)
        };

        self.end_round();

        Ok(outcome)
    }
}
