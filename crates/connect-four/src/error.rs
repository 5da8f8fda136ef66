//! Error types for game setup and play

use thiserror::Error;

/// Main error type for Connect Four operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board has a zero dimension
    #[error("Rows and columns must be greater than 0 (got {rows}x{cols})")]
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Board has more cells than the supported maximum
    #[error("Board of {rows}x{cols} exceeds the maximum of {max} cells")]
    BoardTooLarge {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Maximum number of cells
        max: usize,
    },

    /// Winning line length below the minimum
    #[error("Tokens to win must be at least 2, got {0}")]
    TokensToWinTooSmall(usize),

    /// Winning line cannot fit on the board
    #[error("Tokens to win ({tokens_to_win}) cannot be greater than rows ({rows}) or columns ({cols})")]
    TokensToWinTooLarge {
        /// Requested line length
        tokens_to_win: usize,
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// Fewer than two players
    #[error("Must have at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    /// More players than there are tokens
    #[error("At most {max} players are supported, got {got}")]
    TooManyPlayers {
        /// Number of players requested
        got: usize,
        /// Maximum supported
        max: usize,
    },

    /// Not every player could complete a line
    #[error("Too many players for the board size: {players} players x {tokens_to_win} tokens exceeds {cells} cells")]
    BoardTooSmall {
        /// Number of players
        players: usize,
        /// Winning line length
        tokens_to_win: usize,
        /// Total cells on the board
        cells: usize,
    },

    /// Player without a usable name
    #[error("Player must have a name")]
    EmptyPlayerName,

    /// Two players share a token
    #[error("Duplicate token '{token}' found for player: {name}")]
    DuplicateToken {
        /// Player that reused the token
        name: String,
        /// The shared token
        token: char,
    },

    /// Column index past the right edge
    #[error("Column {col} is out of range (board has {cols} columns)")]
    ColumnOutOfRange {
        /// Requested column
        col: usize,
        /// Column count
        cols: usize,
    },

    /// Column has no empty cell left
    #[error("Column {0} is full")]
    ColumnFull(usize),

    /// Move attempted after a win or draw
    #[error("The game is already over")]
    GameOver,
}

impl GameError {
    /// Whether this error rejects a single move rather than the game setup.
    ///
    /// The terminal loop re-prompts on these instead of aborting.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            GameError::ColumnOutOfRange { .. } | GameError::ColumnFull(_) | GameError::GameOver
        )
    }
}

/// Result type alias for Connect Four operations
pub type Result<T> = std::result::Result<T, GameError>;
