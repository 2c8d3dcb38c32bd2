//! Win detection and end-of-game announcement.
//!
//! A board of size `n` has `2n + 2` winning lines. They are evaluated in a
//! fixed order (columns, rows, main diagonal, anti-diagonal) and the first
//! line fully owned by one player decides the game.

use std::io::{self, Write};

use crate::board::Board;
use crate::types::{CellIndex, Outcome, Player};

/// One winning line: its `n` cells in order.
pub type Line = Vec<CellIndex>;

/// Every winning line of a board of size `n`, in evaluation order.
pub fn win_lines(board_size: usize) -> Vec<Line> {
    let n = board_size;
    let mut lines = Vec::with_capacity(2 * n + 2);
    // Columns
    for x in 0..n {
        lines.push((0..n).map(|k| CellIndex::new(x, k)).collect());
    }
    // Rows
    for y in 0..n {
        lines.push((0..n).map(|k| CellIndex::new(k, y)).collect());
    }
    // Diagonal
    lines.push((0..n).map(|k| CellIndex::new(k, k)).collect());
    // Anti-diagonal
    lines.push((0..n).map(|k| CellIndex::new(k, n - 1 - k)).collect());
    lines
}

/// The player owning every cell produced by `line`, if any.
pub fn winner_on_line(
    board: &Board,
    line: impl Fn(usize) -> CellIndex,
) -> Option<Player> {
    let first = board[line(0)]?;
    (1..board.size())
        .all(|k| board[line(k)] == Some(first))
        .then_some(first)
}

/// First player owning a complete line, in evaluation order.
pub fn check_for_winner(board: &Board) -> Option<Player> {
    win_lines(board.size())
        .iter()
        .find_map(|line| winner_on_line(board, |k| line[k]))
}

/// Evaluate a board snapshot. A winner takes precedence over a full board.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = check_for_winner(board) {
        Outcome::Winner(player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Print the end-of-game line for a terminal outcome.
///
/// Returns whether the outcome was terminal; nothing is written otherwise.
pub fn announce<W: Write + ?Sized>(outcome: Outcome, out: &mut W) -> io::Result<bool> {
    match outcome.message() {
        Some(message) => {
            writeln!(out, "{message}")?;
            Ok(true)
        }
        None => Ok(false),
    }
}
