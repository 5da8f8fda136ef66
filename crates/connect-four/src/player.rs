//! Players and token assignment

use crate::error::{GameError, Result};

/// Highest number of players, one per lowercase ASCII letter.
pub const MAX_PLAYERS: usize = 26;

/// A named participant and the token that marks their cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    /// Display name
    pub name: String,

    /// Character drawn on the board for this player
    pub token: char,
}

impl Player {
    /// Create a player. Names that are empty after trimming are rejected.
    pub fn new(name: impl Into<String>, token: char) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        Ok(Self { name, token })
    }

    /// Build players from names, handing out tokens `a`, `b`, `c`, ... in order.
    ///
    /// # Example
    ///
    /// ```
    /// use connect_four::Player;
    ///
    /// let players = Player::roster(["Alice", "Bob"]).unwrap();
    /// assert_eq!(players[0].token, 'a');
    /// assert_eq!(players[1].token, 'b');
    /// ```
    pub fn roster<I, S>(names: I) -> Result<Vec<Player>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                got: names.len(),
                max: MAX_PLAYERS,
            });
        }

        names
            .into_iter()
            .zip('a'..='z')
            .map(|(name, token)| Player::new(name, token))
            .collect()
    }
}
