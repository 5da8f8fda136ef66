//! Board tests

use connect_four::*;
use pretty_assertions::assert_eq;

/// 3x3 board where cell (r, c) holds the digit `r * 3 + c`.
fn numbered_board() -> Board {
    let mut board = Board::new(3, 3);
    for col in 0..3 {
        for row in (0..3).rev() {
            let digit = char::from_digit((row * 3 + col) as u32, 10).unwrap();
            board.place_token(col, digit).unwrap();
        }
    }
    board
}

fn tokens(lines: Vec<Vec<Cell>>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.into_iter().map(|c| c.unwrap_or('.')).collect())
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Moves
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(6, 7);
    assert_eq!(board.rows(), 6);
    assert_eq!(board.cols(), 7);
    assert!(!board.is_full());
    for col in 0..7 {
        assert!(board.valid_move(col));
    }
}

#[test]
fn test_valid_move_rejects_out_of_range() {
    let board = Board::new(6, 7);
    assert!(!board.valid_move(7));
    assert!(!board.valid_move(usize::MAX));
}

#[test]
fn test_place_token_out_of_range() {
    let mut board = Board::new(2, 2);
    assert_eq!(
        board.place_token(2, 'a'),
        Err(GameError::ColumnOutOfRange { col: 2, cols: 2 })
    );
}

#[test]
fn test_full_column_is_invalid() {
    let mut board = Board::new(2, 3);
    board.place_token(1, 'a').unwrap();
    board.place_token(1, 'b').unwrap();

    assert!(!board.valid_move(1));
    assert!(board.valid_move(0));
    assert_eq!(board.place_token(1, 'a'), Err(GameError::ColumnFull(1)));
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2, 2);
    for col in 0..2 {
        board.place_token(col, 'a').unwrap();
        board.place_token(col, 'b').unwrap();
    }
    assert!(board.is_full());
}

// ═══════════════════════════════════════════════════════════════════════
// Lines
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_row_and_column_lines() {
    let board = numbered_board();
    assert_eq!(tokens(board.row_lines()), vec!["012", "345", "678"]);
    assert_eq!(tokens(board.column_lines()), vec!["036", "147", "258"]);
}

#[test]
fn test_diagonals_top_left_to_bottom_right() {
    let board = numbered_board();
    assert_eq!(
        tokens(board.diagonals_top_left_to_bottom_right()),
        vec!["0", "31", "642", "75", "8"]
    );
}

#[test]
fn test_diagonals_top_right_to_bottom_left() {
    let board = numbered_board();
    assert_eq!(
        tokens(board.diagonals_top_right_to_bottom_left()),
        vec!["2", "15", "048", "37", "6"]
    );
}

#[test]
fn test_diagonals_on_wide_board() {
    let board = Board::new(2, 4);
    let lines = board.diagonals_top_left_to_bottom_right();
    let lengths: Vec<usize> = lines.iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![1, 2, 2, 2, 1]);
}

// ═══════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_small_board() {
    let mut board = Board::new(2, 3);
    board.place_token(0, 'a').unwrap();
    board.place_token(2, 'b').unwrap();
    board.place_token(2, 'a').unwrap();

    assert_eq!(board.render(), " 0  1  2 \n[ ][ ][a]\n[a][ ][b]\n");
}

#[test]
fn test_render_pads_for_two_digit_columns() {
    let mut board = Board::new(2, 10);
    board.place_token(9, 'z').unwrap();

    let rendered = board.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "  0   1   2   3   4   5   6   7   8   9 ");
    assert_eq!(lines[1], "[  ]".repeat(10));
    assert_eq!(lines[2], format!("{}[z ]", "[  ]".repeat(9)));
}

#[test]
fn test_render_with_paint_keeps_padding() {
    let mut board = Board::new(1, 2);
    board.place_token(0, 'a').unwrap();
    assert_eq!(board.render_with(|t| format!("<{}>", t)), " 0  1 \n[<a>][ ]\n");
}
