//! Win detection logic.

use crate::cell::Cell;
use crate::types::{Board, Symbol};

/// An index-triple of cells that wins the round when filled by one symbol.
pub type Line = [Cell; 3];

/// The 8 fixed winning lines, scanned in declared order:
/// 3 rows, then 3 columns, then 2 diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Finds a completed line on the board.
///
/// Returns the winning symbol and the line it completed. Lines are
/// scanned in the declared order and the first match is returned, which
/// makes the result deterministic on any board.
pub fn winning_line(board: &Board) -> Option<(Symbol, Line)> {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(symbol) = board.get(a) {
            if Some(symbol) == board.get(b) && Some(symbol) == board.get(c) {
                return Some((symbol.clone(), line));
            }
        }
    }

    None
}
