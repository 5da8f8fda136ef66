//! # Connect Four
//!
//! A command-line Connect Four game for 2 to 26 players on a board of any
//! size, with a configurable winning line length.
//!
//! Players take turns choosing a column. The token falls to the lowest empty
//! cell in that column. The first player to connect `tokens_to_win` of their
//! tokens horizontally, vertically or diagonally wins. If the board fills
//! first, the game is a draw. Tokens are handed out in order: `a` for the
//! first player, `b` for the second, and so on.
//!
//! ## Architecture
//!
//! - **Board**: grid storage, token dropping, line extraction, rendering
//! - **Game**: validation, turn order, win and draw detection, undo
//! - **Config**: defaults, TOML settings file, layered resolution
//! - **Session**: the interactive turn loop over a pluggable input source
//!
//! ## Example
//!
//! ```
//! use connect_four::{Game, GameConfig, GameStatus, Player};
//!
//! let players = Player::roster(["Alice", "Bob"]).unwrap();
//! let mut game = Game::new(GameConfig::default(), players).unwrap();
//!
//! assert_eq!(game.play(3).unwrap(), GameStatus::Ongoing);
//! assert_eq!(game.current_player().name, "Bob");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod session;

// Re-export main types
pub use board::{Board, Cell};
pub use config::{FileConfig, GameConfig, Overrides, Settings};
pub use error::{GameError, Result};
pub use game::{Game, GameStatus, Move};
pub use player::{Player, MAX_PLAYERS};
pub use session::{
    Command, EditorSource, MoveSource, Outcome, ReaderSource, Session, SessionOptions,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
