//! Game state, turns and win detection
//!
//! A [`Game`] owns the [`Board`], the players in turn order, and the move
//! history. It never panics on bad input: setup problems and illegal moves
//! come back as [`GameError`]s.

use std::collections::HashSet;

use crate::board::{Board, Cell};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::player::Player;

/// Where a game stands after the latest move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// The game is still in progress.
    Ongoing,
    /// The board filled up without a winning line.
    Draw,
    /// A player completed a winning line.
    Win(Player),
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// A token that was dropped onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Index of the player who moved
    pub player_index: usize,
    /// Column the token was dropped into
    pub column: usize,
    /// Row where it landed
    pub row: usize,
}

/// A game of Connect Four.
///
/// # Example
///
/// ```
/// use connect_four::{Game, GameConfig, GameStatus, Player};
///
/// let players = Player::roster(["Alice", "Bob"]).unwrap();
/// let mut game = Game::new(GameConfig::new(4, 4, 3), players).unwrap();
///
/// for col in [0, 1, 0, 1] {
///     assert_eq!(game.play(col).unwrap(), GameStatus::Ongoing);
/// }
/// match game.play(0).unwrap() {
///     GameStatus::Win(winner) => assert_eq!(winner.name, "Alice"),
///     other => panic!("expected a win, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: GameConfig,
    players: Vec<Player>,
    turn: usize,
    moves: Vec<Move>,
}

impl Game {
    /// Create a game after validating the config and the players.
    pub fn new(config: GameConfig, players: Vec<Player>) -> Result<Self> {
        config.validate(players.len())?;
        Self::validate_players(&players)?;

        Ok(Self {
            board: Board::new(config.rows, config.cols),
            config,
            players,
            turn: 0,
            moves: Vec::new(),
        })
    }

    /// Reject rosters where two players share a token.
    fn validate_players(players: &[Player]) -> Result<()> {
        let mut seen = HashSet::new();
        for player in players {
            if !seen.insert(player.token) {
                return Err(GameError::DuplicateToken {
                    name: player.name.clone(),
                    token: player.token,
                });
            }
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board geometry and win condition.
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Connected tokens required to win.
    pub fn tokens_to_win(&self) -> usize {
        self.config.tokens_to_win
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player whose turn it is.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    // ═══════════════════════════════════════════════════════════════════
    // Play
    // ═══════════════════════════════════════════════════════════════════

    /// Drop the current player's token into `col` and pass the turn.
    ///
    /// An illegal move returns an error and leaves the turn unchanged.
    pub fn play(&mut self, col: usize) -> Result<GameStatus> {
        if self.status().is_over() {
            return Err(GameError::GameOver);
        }

        let player_index = self.turn;
        let token = self.players[player_index].token;
        let row = self.board.place_token(col, token)?;

        self.moves.push(Move {
            player_index,
            column: col,
            row,
        });
        tracing::debug!(player = %self.players[player_index].name, col, row, "token placed");

        self.next_turn();
        Ok(self.status())
    }

    /// Take back the most recent move and give that player the turn again.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.moves.pop()?;
        self.board.clear(last.row, last.column);
        self.turn = last.player_index;
        tracing::debug!(col = last.column, row = last.row, "move undone");
        Some(last)
    }

    fn next_turn(&mut self) {
        self.turn = (self.turn + 1) % self.players.len();
    }

    /// Current status. A completed line wins even on the move that fills
    /// the board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.find_winner() {
            return GameStatus::Win(winner);
        }
        if self.board.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::Ongoing
    }

    // ═══════════════════════════════════════════════════════════════════
    // Win Detection
    // ═══════════════════════════════════════════════════════════════════

    /// Scan rows, columns, then both diagonal directions for a winning run.
    fn find_winner(&self) -> Option<Player> {
        let lines = self
            .board
            .row_lines()
            .into_iter()
            .chain(self.board.column_lines())
            .chain(self.board.diagonals_top_left_to_bottom_right())
            .chain(self.board.diagonals_top_right_to_bottom_left());

        for line in lines {
            if let Some(token) = check_line(&line, self.config.tokens_to_win) {
                return self.players.iter().find(|p| p.token == token).cloned();
            }
        }
        None
    }
}

/// First token to appear `tokens_to_win` times in a row along `line`.
pub fn check_line(line: &[Cell], tokens_to_win: usize) -> Option<char> {
    let mut count = 0;
    let mut last: Cell = None;

    for cell in line {
        match cell {
            Some(token) if last == Some(*token) => count += 1,
            Some(token) => {
                count = 1;
                last = Some(*token);
            }
            None => {
                count = 0;
                last = None;
            }
        }
        if count >= tokens_to_win && tokens_to_win > 0 {
            return last;
        }
    }

    None
}
