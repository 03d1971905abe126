//! Game configuration options.

/// Display options for a game.
///
/// The rules themselves are fixed; these only control what the session shows
/// between turns.
///
/// ```
/// use solitaire_uno::GameOptions;
///
/// let options = GameOptions::default()
///     .with_show_computer_hand_size(true)
///     .with_show_deck_size(true);
/// assert!(options.show_computer_hand_size);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Whether to report how many cards the computer holds after its turn.
    pub show_computer_hand_size: bool,
    /// Whether to report how many cards remain in the deck.
    pub show_deck_size: bool,
}

impl GameOptions {
    /// Sets whether the computer's hand size is shown.
    ///
    /// # Example
    ///
    /// ```
    /// use solitaire_uno::GameOptions;
    ///
    /// let options = GameOptions::default().with_show_computer_hand_size(true);
    /// assert!(options.show_computer_hand_size);
    /// ```
    #[must_use]
    pub const fn with_show_computer_hand_size(mut self, show: bool) -> Self {
        self.show_computer_hand_size = show;
        self
    }

    /// Sets whether the deck size is shown.
    #[must_use]
    pub const fn with_show_deck_size(mut self, show: bool) -> Self {
        self.show_deck_size = show;
        self
    }
}
