//! Game settings: validation and layered loading
//!
//! Settings come from four layers, highest priority first: command-line
//! flags, environment variables (both handled by clap in the binary), the
//! TOML settings file, then built-in defaults.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GameError, Result};
use crate::player::MAX_PLAYERS;

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "CONNECT_FOUR_CONFIG";

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 6;

/// Default number of columns.
pub const DEFAULT_COLS: usize = 7;

/// Default winning line length.
pub const DEFAULT_TOKENS_TO_WIN: usize = 4;

/// Largest board accepted, in cells.
pub const MAX_CELLS: usize = 1_000_000;

/// Board geometry and winning condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of rows on the board
    pub rows: usize,

    /// Number of columns on the board
    pub cols: usize,

    /// Connected tokens required to win
    pub tokens_to_win: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tokens_to_win: DEFAULT_TOKENS_TO_WIN,
        }
    }
}

impl GameConfig {
    /// Create a config with explicit values.
    pub fn new(rows: usize, cols: usize, tokens_to_win: usize) -> Self {
        Self {
            rows,
            cols,
            tokens_to_win,
        }
    }

    /// Check that this config is playable by `players` players.
    ///
    /// Every player must be able to complete a line, so the board needs at
    /// least `players * tokens_to_win` cells.
    pub fn validate(&self, players: usize) -> Result<()> {
        if self.rows < 1 || self.cols < 1 {
            return Err(GameError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let cells = self
            .rows
            .checked_mul(self.cols)
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or(GameError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_CELLS,
            })?;
        if self.tokens_to_win < 2 {
            return Err(GameError::TokensToWinTooSmall(self.tokens_to_win));
        }
        if self.tokens_to_win > self.rows || self.tokens_to_win > self.cols {
            return Err(GameError::TokensToWinTooLarge {
                tokens_to_win: self.tokens_to_win,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if players < 2 {
            return Err(GameError::NotEnoughPlayers(players));
        }
        if players > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                got: players,
                max: MAX_PLAYERS,
            });
        }
        if players.saturating_mul(self.tokens_to_win) > cells {
            return Err(GameError::BoardTooSmall {
                players,
                tokens_to_win: self.tokens_to_win,
                cells,
            });
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Settings File
// ═══════════════════════════════════════════════════════════════════════

/// Contents of `config.toml`. Every key is optional.
///
/// ```toml
/// rows = 8
/// cols = 9
/// tokens_to_win = 5
/// players = ["Alice", "Bob", "Carol"]
/// clear_screen = false
/// color = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Number of rows
    pub rows: Option<usize>,
    /// Number of columns
    pub cols: Option<usize>,
    /// Winning line length
    pub tokens_to_win: Option<usize>,
    /// Player names in turn order
    pub players: Option<Vec<String>>,
    /// Clear the terminal before each turn
    pub clear_screen: Option<bool>,
    /// Colorize player tokens
    pub color: Option<bool>,
}

impl FileConfig {
    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Invalid TOML settings")
    }
}

/// Default settings path (`<config dir>/connect-four/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("connect-four").join("config.toml"))
}

/// Load the settings file.
///
/// An explicit `path` must exist. The default location is optional:
/// `Ok(None)` is returned when nothing is there.
pub fn load_file_config(path: Option<&Path>) -> anyhow::Result<Option<FileConfig>> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                bail!("Config file {} does not exist", p.display());
            }
            p.to_path_buf()
        }
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => {
                tracing::debug!("no settings file found, using defaults");
                return Ok(None);
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = FileConfig::from_toml(&content)
        .with_context(|| format!("Invalid settings in {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded settings file");
    Ok(Some(config))
}

// ═══════════════════════════════════════════════════════════════════════
// Resolution
// ═══════════════════════════════════════════════════════════════════════

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Number of rows
    pub rows: Option<usize>,
    /// Number of columns
    pub cols: Option<usize>,
    /// Winning line length
    pub tokens_to_win: Option<usize>,
    /// Player names; empty means "not given"
    pub players: Vec<String>,
    /// `--no-clear` was passed
    pub no_clear: bool,
    /// `--no-color` was passed
    pub no_color: bool,
}

/// Fully resolved and validated settings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Board geometry and win condition
    pub game: GameConfig,
    /// Player names in turn order
    pub players: Vec<String>,
    /// Clear the terminal before each turn
    pub clear_screen: bool,
    /// Colorize player tokens
    pub color: bool,
}

/// Merge overrides over the settings file over defaults, then validate.
pub fn resolve(overrides: Overrides, file: Option<FileConfig>) -> Result<Settings> {
    let file = file.unwrap_or_default();
    let defaults = GameConfig::default();

    let game = GameConfig {
        rows: overrides.rows.or(file.rows).unwrap_or(defaults.rows),
        cols: overrides.cols.or(file.cols).unwrap_or(defaults.cols),
        tokens_to_win: overrides
            .tokens_to_win
            .or(file.tokens_to_win)
            .unwrap_or(defaults.tokens_to_win),
    };

    let players = if overrides.players.is_empty() {
        file.players.unwrap_or_default()
    } else {
        overrides.players
    };

    game.validate(players.len())?;

    let clear_screen = !overrides.no_clear && file.clear_screen.unwrap_or(true);
    let color = !overrides.no_color && file.color.unwrap_or(true);

    tracing::debug!(
        rows = game.rows,
        cols = game.cols,
        tokens_to_win = game.tokens_to_win,
        players = players.len(),
        "resolved game settings"
    );

    Ok(Settings {
        game,
        players,
        clear_screen,
        color,
    })
}
