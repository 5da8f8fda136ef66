//! The game grid
//!
//! Cells are stored in a single row-major vector. Row 0 is the top of the
//! board; tokens fall toward the highest row index.

use crate::error::{GameError, Result};

/// A single cell: the owning player's token, or `None` when empty.
pub type Cell = Option<char>;

/// A Connect Four board of `rows x cols` cells.
///
/// # Example
///
/// ```
/// use connect_four::Board;
///
/// let mut board = Board::new(6, 7);
/// assert_eq!(board.place_token(3, 'a').unwrap(), 5); // lands on the bottom row
/// assert_eq!(board.place_token(3, 'b').unwrap(), 4); // stacks on top
/// assert_eq!(board.get(5, 3), Some('a'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Token at `(row, col)`, or `None` when empty or out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    // ═══════════════════════════════════════════════════════════════════
    // Moves
    // ═══════════════════════════════════════════════════════════════════

    /// Whether a token can be dropped into `col`.
    pub fn valid_move(&self, col: usize) -> bool {
        col < self.cols && self.landing_row(col).is_some()
    }

    /// Lowest empty row in `col`.
    fn landing_row(&self, col: usize) -> Option<usize> {
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[self.index(row, col)].is_none())
    }

    /// Drop `token` into `col` and return the row it came to rest in.
    pub fn place_token(&mut self, col: usize, token: char) -> Result<usize> {
        if col >= self.cols {
            return Err(GameError::ColumnOutOfRange {
                col,
                cols: self.cols,
            });
        }
        let row = self.landing_row(col).ok_or(GameError::ColumnFull(col))?;
        let idx = self.index(row, col);
        self.cells[idx] = Some(token);
        Ok(row)
    }

    /// Clear a cell. Used to take back the most recent move.
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx] = None;
        }
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lines
    // ═══════════════════════════════════════════════════════════════════

    /// Every row, top to bottom.
    pub fn row_lines(&self) -> Vec<Vec<Cell>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }

    /// Every column, left to right, each read top to bottom.
    pub fn column_lines(&self) -> Vec<Vec<Cell>> {
        (0..self.cols)
            .map(|col| (0..self.rows).map(|row| self.get(row, col)).collect())
            .collect()
    }

    /// Diagonals running from top-left to bottom-right.
    ///
    /// Each line is read from its bottom-left end. With a 3x3 board numbered
    /// row by row:
    ///
    /// ```text
    /// [0][1][2]
    /// [3][4][5]
    /// [6][7][8]
    /// ```
    ///
    /// the lines are `[0]`, `[3, 1]`, `[6, 4, 2]`, `[7, 5]`, `[8]`.
    pub fn diagonals_top_left_to_bottom_right(&self) -> Vec<Vec<Cell>> {
        self.diagonals(|d, row| d as isize - row as isize)
            .into_iter()
            .map(|mut line| {
                line.reverse();
                line
            })
            .collect()
    }

    /// Diagonals running from top-right to bottom-left.
    ///
    /// Each line is read from its top-left end. For the same 3x3 board the
    /// lines are `[2]`, `[1, 5]`, `[0, 4, 8]`, `[3, 7]`, `[6]`.
    pub fn diagonals_top_right_to_bottom_left(&self) -> Vec<Vec<Cell>> {
        let last_col = self.cols as isize - 1;
        self.diagonals(move |d, row| last_col - (d as isize - row as isize))
    }

    /// Walk `rows + cols - 1` diagonals, mapping (diagonal, row) to a column.
    ///
    /// Cells in each line come out top row first.
    fn diagonals(&self, col_for: impl Fn(usize, usize) -> isize) -> Vec<Vec<Cell>> {
        if self.rows == 0 || self.cols == 0 {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(self.rows + self.cols - 1);
        for d in 0..(self.rows + self.cols - 1) {
            let line: Vec<Cell> = (0..self.rows)
                .filter_map(|row| {
                    let col = col_for(d, row);
                    (col >= 0 && (col as usize) < self.cols).then(|| self.get(row, col as usize))
                })
                .collect();
            if !line.is_empty() {
                lines.push(line);
            }
        }
        lines
    }

    // ═══════════════════════════════════════════════════════════════════
    // Rendering
    // ═══════════════════════════════════════════════════════════════════

    /// Render the board as text with a header of column indices.
    pub fn render(&self) -> String {
        self.render_with(|token| token.to_string())
    }

    /// Render the board, formatting each occupied cell with `paint`.
    ///
    /// `paint` may add escape codes; padding is computed from the bare token
    /// so columns stay aligned.
    pub fn render_with(&self, paint: impl Fn(char) -> String) -> String {
        let mut output = String::new();
        let cell_width = self.cols.to_string().len();

        for col in 0..self.cols {
            output.push_str(&format!("{:>width$} ", col, width = cell_width + 1));
        }
        output.push('\n');

        for row in 0..self.rows {
            for col in 0..self.cols {
                let padding = " ".repeat(cell_width.saturating_sub(1));
                match self.get(row, col) {
                    Some(token) => output.push_str(&format!("[{}{}]", paint(token), padding)),
                    None => output.push_str(&format!("[ {}]", padding)),
                }
            }
            output.push('\n');
        }

        output
    }
}
