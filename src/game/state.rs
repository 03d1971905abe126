//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to play, pick up, or pass.
    PlayerTurn,
    /// The computer moves next.
    ComputerTurn,
    /// One side has emptied its hand.
    GameOver,
}

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}
