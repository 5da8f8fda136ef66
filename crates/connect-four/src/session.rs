//! Interactive terminal session
//!
//! The session drives a [`Game`] from lines of text. Where the lines come
//! from is abstracted behind [`MoveSource`]:
//!
//! ```text
//! terminal / pipe → [MoveSource] → Command → Game::play → render → out
//! ```
//!
//! - [`EditorSource`] wraps `rustyline` for interactive play with history
//! - [`ReaderSource`] reads any `BufRead`, used for piped input and tests

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use colored::{Color, Colorize};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::game::{Game, GameStatus};
use crate::player::Player;

/// Escape sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Printed before every read.
pub const MOVE_PROMPT: &str = "Please enter a column to play: ";

const INVALID_MOVE: &str = "Invalid move. Column is either full or out of range.";
const INVALID_INPUT: &str = "Invalid input. Please enter a valid integer.";
const READ_FAILED: &str = "Failed to read input. Please try again.";

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
];

// ═══════════════════════════════════════════════════════════════════════
// Input Sources
// ═══════════════════════════════════════════════════════════════════════

/// Supplies lines of player input.
pub trait MoveSource {
    /// Read one line. `Ok(None)` means input has ended.
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Line editor input for an interactive terminal.
pub struct EditorSource {
    editor: DefaultEditor,
    interrupt: Arc<AtomicBool>,
}

impl EditorSource {
    /// Create an editor that raises `interrupt` on Ctrl-C.
    pub fn new(interrupt: Arc<AtomicBool>) -> anyhow::Result<Self> {
        let editor = DefaultEditor::new().context("Failed to initialize line editor")?;
        Ok(Self { editor, interrupt })
    }
}

impl MoveSource for EditorSource {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        tracing::debug!(%err, "history entry not recorded");
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                self.interrupt.store(true, Ordering::Relaxed);
                Ok(None)
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("Failed to read input"),
        }
    }
}

/// Input from any buffered reader, one move per line.
///
/// A line that is not valid UTF-8 is consumed and reported as an
/// [`io::ErrorKind::InvalidData`] error; the next read continues after it.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> MoveSource for ReaderSource<R> {
    fn next_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
            .context("Input is not valid UTF-8")?;
        Ok(Some(line))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop a token into a column
    Play(usize),
    /// Take back the last move
    Undo,
    /// Abandon the game
    Quit,
    /// Anything unrecognised
    Invalid,
}

impl Command {
    /// Parse a line, ignoring surrounding whitespace and case of keywords.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Ok(col) = line.parse::<usize>() {
            return Command::Play(col);
        }
        match line.to_ascii_lowercase().as_str() {
            "undo" | "u" => Command::Undo,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Invalid,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Session
// ═══════════════════════════════════════════════════════════════════════

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player won
    Win(Player),
    /// The board filled up
    Draw,
    /// Players quit, input ended, or the session was interrupted
    Abandoned,
}

/// Presentation settings and the interrupt flag for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Clear the screen before drawing each turn
    pub clear_screen: bool,

    /// Colorize tokens
    pub color: bool,

    /// Set to true to stop the session at the next prompt
    pub interrupt: Arc<AtomicBool>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl SessionOptions {
    /// Plain output: no screen clearing, no color.
    pub fn plain() -> Self {
        Self {
            clear_screen: false,
            color: false,
            ..Default::default()
        }
    }

    /// Check if the session has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request the session to stop.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }
}

/// Runs the turn loop for one game.
pub struct Session<S, W> {
    game: Game,
    source: S,
    out: W,
    options: SessionOptions,
}

impl<S: MoveSource, W: Write> Session<S, W> {
    /// Create a session.
    pub fn new(game: Game, source: S, out: W, options: SessionOptions) -> Self {
        Self {
            game,
            source,
            out,
            options,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the session, returning the game and output sink.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.out)
    }

    /// Play until someone wins, the board fills, or input stops.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        loop {
            self.draw()?;

            match self.game.status() {
                GameStatus::Ongoing => {}
                GameStatus::Draw => {
                    writeln!(self.out, "Draw!")?;
                    tracing::info!(moves = self.game.moves().len(), "game ended in a draw");
                    return Ok(Outcome::Draw);
                }
                GameStatus::Win(winner) => {
                    let token = self.paint(winner.token);
                    writeln!(self.out, "The winner is: {} ({})", winner.name, token)?;
                    tracing::info!(winner = %winner.name, moves = self.game.moves().len(), "game won");
                    return Ok(Outcome::Win(winner));
                }
            }

            let player = self.game.current_player().clone();
            let token = self.paint(player.token);
            writeln!(self.out, "{}'s ({}) Turn", player.name, token)?;

            if !self.take_turn()? {
                writeln!(self.out, "Game abandoned.")?;
                tracing::info!(moves = self.game.moves().len(), "game abandoned");
                return Ok(Outcome::Abandoned);
            }
        }
    }

    /// Read lines until one changes the game. Returns false to abandon.
    fn take_turn(&mut self) -> anyhow::Result<bool> {
        loop {
            if self.options.is_interrupted() {
                return Ok(false);
            }

            writeln!(self.out, "{}", MOVE_PROMPT)?;
            self.out.flush()?;

            let line = match self.source.next_line("> ") {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(false),
                Err(err) if is_unreadable(&err) => {
                    tracing::debug!(err = %format!("{:#}", err), "unreadable input");
                    writeln!(self.out, "{}", READ_FAILED)?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            match Command::parse(&line) {
                Command::Play(col) => match self.game.play(col) {
                    Ok(_) => return Ok(true),
                    Err(err) if err.is_illegal_move() => {
                        tracing::debug!(%err, "illegal move");
                        writeln!(self.out, "{}", INVALID_MOVE)?;
                    }
                    Err(err) => return Err(err.into()),
                },
                Command::Undo => match self.game.undo() {
                    Some(_) => return Ok(true),
                    None => writeln!(self.out, "Nothing to undo.")?,
                },
                Command::Quit => return Ok(false),
                Command::Invalid => writeln!(self.out, "{}", INVALID_INPUT)?,
            }
        }
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        if self.options.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        let board = if self.options.color {
            self.game.board().render_with(|token| self.paint(token))
        } else {
            self.game.board().render()
        };
        writeln!(self.out, "{}", board)?;
        Ok(())
    }

    /// Token text, colored by the owning player's seat when enabled.
    fn paint(&self, token: char) -> String {
        if !self.options.color {
            return token.to_string();
        }
        match self.game.players().iter().position(|p| p.token == token) {
            Some(seat) => token
                .to_string()
                .color(PALETTE[seat % PALETTE.len()])
                .bold()
                .to_string(),
            None => token.to_string(),
        }
    }
}

/// Whether a read failed on undecodable input rather than a broken stream.
fn is_unreadable(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::InvalidData)
    })
}
