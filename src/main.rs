//! Terminal entry point.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use solitaire_uno::{Game, GameOptions, Session};
use tracing::Level;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    let mut session = Session::new(game, io::stdin().lock(), io::stdout().lock());
    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::warn!(%err, seed, "game ended early");
            ExitCode::FAILURE
        }
    }
}
