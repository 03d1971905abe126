//! Text front end that plays a [`Game`] over any line-based input and output.

use std::io::{BufRead, Write};

use alloc::string::String;

use crate::command::Command;
use crate::error::{ActionError, SessionError};
use crate::game::{Game, GameState};
use crate::result::{GameOutcome, Pickup, TurnOutcome};

const BANNER: &str = "\n--- Solitaire Uno ---\n\
A simplified, turn-based version of Uno with descending rules.\n\
Players will be dealt 10 cards.\n\
They must then place a card in descending order based on the card currently visible.\n\
Watch out for that pesky Queen of Spades!\n\
\n\
Whoever plays all their cards wins\n";

const PROMPT: &str = "\nMake your move: (1 - highest number of cards, pickup, or pass if deck is empty)";

/// An interactive game reading moves from `input` and narrating to `output`.
///
/// ```
/// use std::io::Cursor;
///
/// use solitaire_uno::{Game, GameOptions, Session, SessionError};
///
/// let game = Game::new(GameOptions::default(), 3);
/// let mut session = Session::new(game, Cursor::new(""), Vec::new());
/// assert!(matches!(session.run(), Err(SessionError::InputClosed)));
/// ```
#[derive(Debug)]
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around a freshly dealt game.
    pub const fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the output sink.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the session, returning the game and output.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }

    /// Plays the game to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, or input ends before
    /// either hand is empty.
    pub fn run(&mut self) -> Result<GameOutcome, SessionError> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(
            self.output,
            "\n       The first card is: {}",
            self.game.current_card()
        )?;

        while self.game.state() != GameState::GameOver {
            self.player_turn()?;
            self.computer_turn()?;
        }

        let outcome = self.game.outcome().ok_or(ActionError::InvalidState)?;
        match outcome {
            GameOutcome::ComputerWins => writeln!(
                self.output,
                "\n\nYou Lose! You've been bested by the machine :("
            )?,
            GameOutcome::PlayerWins => writeln!(
                self.output,
                "\n\nYou Win! You beat the computer! Congrats! :)"
            )?,
        }
        self.output.flush()?;

        Ok(outcome)
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line)
    }

    fn show_table(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\nHere is your hand:")?;
        for (index, card) in self.game.player_hand.cards().iter().enumerate() {
            writeln!(self.output, "   {}) {card}", index + 1)?;
        }
        writeln!(
            self.output,
            "\n       Card currently visible: {}",
            self.game.current_card()
        )?;
        if self.game.options.show_deck_size {
            writeln!(
                self.output,
                "       Cards left in the deck: {}",
                self.game.cards_remaining()
            )?;
        }
        Ok(())
    }

    fn player_turn(&mut self) -> Result<(), SessionError> {
        loop {
            self.show_table()?;

            loop {
                writeln!(self.output, "{PROMPT}")?;
                let line = self.read_line()?;

                let command = match Command::parse(&line) {
                    Ok(command) => command,
                    Err(err) => {
                        tracing::debug!(%err, "rejected input");
                        writeln!(
                            self.output,
                            "\n       Sorry, that choice is invalid, please try again"
                        )?;
                        continue;
                    }
                };

                match self.game.apply(command) {
                    Ok(outcome) => return self.report_player(&outcome),
                    Err(ActionError::InvalidPlay) => {
                        writeln!(
                            self.output,
                            "       Sorry, that play is not valid, please choose another card"
                        )?;
                        break;
                    }
                    Err(ActionError::CardNotInHand) => writeln!(
                        self.output,
                        "       Sorry, that card number is not in your hand. Please try again."
                    )?,
                    Err(ActionError::DeckNotEmpty) => writeln!(
                        self.output,
                        "\n       There are cards still in the deck. Pickup or Play!"
                    )?,
                    Err(ActionError::DeckEmpty) => writeln!(
                        self.output,
                        "\n       There are no more cards left in the deck! You must choose to play or pass."
                    )?,
                    Err(err @ ActionError::InvalidState) => return Err(err.into()),
                }
            }
        }
    }

    fn report_player(&mut self, outcome: &TurnOutcome) -> Result<(), SessionError> {
        match outcome {
            TurnOutcome::Played(card) => writeln!(self.output, "\n       You played: {card}")?,
            TurnOutcome::Passed => writeln!(self.output, "\n       You passed")?,
            TurnOutcome::PickedUp(pickup) => {
                writeln!(
                    self.output,
                    "\n       You didn't play and picked up a card."
                )?;
                self.report_penalty(pickup, "You picked up the Queen of Spades, you")?;
            }
        }
        Ok(())
    }

    fn computer_turn(&mut self) -> Result<(), SessionError> {
        match self.game.computer_turn()? {
            TurnOutcome::Played(card) => {
                writeln!(self.output, "\n       Computer Played: {card}")?;
                if self.game.computer_hand.is_empty() {
                    writeln!(self.output, "\n\n       Computer played its last card!")?;
                }
            }
            TurnOutcome::PickedUp(pickup) => {
                writeln!(
                    self.output,
                    "\n       Computer couldn't play and picked up a card."
                )?;
                self.report_penalty(
                    &pickup,
                    "The computer picked up the Queen of Spades, and",
                )?;
            }
            TurnOutcome::Passed => writeln!(
                self.output,
                "\n       Computer couldn't play and has no cards to pick up, so it passed."
            )?,
        }

        if self.game.options.show_computer_hand_size {
            writeln!(
                self.output,
                "       Computer's hand size: {}",
                self.game.computer_hand.len()
            )?;
        }
        Ok(())
    }

    fn report_penalty(&mut self, pickup: &Pickup, who: &str) -> Result<(), SessionError> {
        if !pickup.penalty {
            return Ok(());
        }

        if pickup.bonus.is_empty() {
            writeln!(
                self.output,
                "\n   {who} got lucky: the deck was too thin for the 5 card penalty"
            )?;
        } else {
            writeln!(
                self.output,
                "\n   {who} received {} additional cards",
                pickup.bonus.len()
            )?;
        }
        Ok(())
    }
}
