use crate::command::Command;
use crate::error::ActionError;
use crate::result::TurnOutcome;
use crate::rules::valid_card;

use super::{Game, GameState, Side};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    fn finish_player_turn(&mut self, outcome: TurnOutcome) -> TurnOutcome {
        self.state = GameState::ComputerTurn;
        outcome
    }

    /// Player action: play the card at `index` (0-based) on the current card.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the index is outside
    /// the hand, or the card cannot follow the current card. The hand is left
    /// unchanged on error.
    pub fn play(&mut self, index: usize) -> Result<TurnOutcome, ActionError> {
        self.ensure_player_turn()?;

        let candidate = self
            .player_hand
            .get(index)
            .ok_or(ActionError::CardNotInHand)?;

        if !valid_card(candidate, &self.current_card) {
            return Err(ActionError::InvalidPlay);
        }

        let card = self
            .player_hand
            .take(index)
            .ok_or(ActionError::CardNotInHand)?;
        self.current_card = card;

        tracing::debug!(%card, cards_left = self.player_hand.len(), "player played");

        Ok(self.finish_player_turn(TurnOutcome::Played(card)))
    }

    /// Player action: play the card with the given 1-based number, as shown
    /// in the hand listing.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play`]; `0` is reported as
    /// [`ActionError::CardNotInHand`].
    pub fn play_number(&mut self, number: usize) -> Result<TurnOutcome, ActionError> {
        let index = number.checked_sub(1).ok_or(ActionError::CardNotInHand)?;
        self.play(index)
    }

    /// Player action: draw a card from the deck.
    ///
    /// Drawing the Queen of Spades also draws five more cards when at least
    /// five remain after it.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn pickup(&mut self) -> Result<TurnOutcome, ActionError> {
        self.ensure_player_turn()?;

        if self.deck.is_empty() {
            return Err(ActionError::DeckEmpty);
        }

        let pickup = self.pick_up(Side::Player)?;
        Ok(self.finish_player_turn(TurnOutcome::PickedUp(pickup)))
    }

    /// Player action: pass the turn. Only allowed once the deck is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck still has
    /// cards.
    pub fn pass(&mut self) -> Result<TurnOutcome, ActionError> {
        self.ensure_player_turn()?;

        if !self.deck.is_empty() {
            return Err(ActionError::DeckNotEmpty);
        }

        tracing::debug!("player passed");

        Ok(self.finish_player_turn(TurnOutcome::Passed))
    }

    /// Applies a parsed player command.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action.
    pub fn apply(&mut self, command: Command) -> Result<TurnOutcome, ActionError> {
        match command {
            Command::Play(number) => self.play_number(number),
            Command::Pass => self.pass(),
            Command::Pickup => self.pickup(),
        }
    }
}
