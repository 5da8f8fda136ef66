//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::Overrides;

/// Play Connect Four in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "connect_four", version, about, long_about = None)]
pub struct Args {
    /// The names of the players participating in the game.
    #[arg(
        short,
        long,
        num_args = 2..=26,
        value_delimiter = ' ',
        env = "CONNECT_FOUR_PLAYERS"
    )]
    pub players: Vec<String>,

    /// The number of rows on the game board. [default: 6]
    #[arg(short, long, env = "CONNECT_FOUR_ROWS")]
    pub rows: Option<usize>,

    /// The number of columns on the game board. [default: 7]
    #[arg(short, long, env = "CONNECT_FOUR_COLS")]
    pub cols: Option<usize>,

    /// The number of connected tokens required to win the game. [default: 4]
    #[arg(short, long, env = "CONNECT_FOUR_TOKENS_TO_WIN")]
    pub tokens_to_win: Option<usize>,

    /// Settings file to load instead of the default location.
    #[arg(long, env = "CONNECT_FOUR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not clear the terminal between turns.
    #[arg(long)]
    pub no_clear: bool,

    /// Do not colorize player tokens.
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Values that take priority over the settings file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            rows: self.rows,
            cols: self.cols,
            tokens_to_win: self.tokens_to_win,
            players: self
                .players
                .iter()
                .filter(|name| !name.is_empty())
                .cloned()
                .collect(),
            no_clear: self.no_clear,
            no_color: self.no_color,
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
