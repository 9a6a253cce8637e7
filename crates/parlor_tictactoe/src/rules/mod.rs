//! Pure rules engine: terminal-state evaluation for a board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{winning_line, Line, LINES};

use crate::types::{Board, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal state of a board.
///
/// Computed from the board on demand, never stored as authoritative
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The round continues; at least one cell is open and no line is
    /// complete.
    Ongoing,
    /// A symbol completed a line.
    Win {
        /// The symbol occupying the completed line.
        symbol: Symbol,
        /// The completed line, for presentation to highlight.
        line: Line,
    },
    /// All 9 cells are played with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true if the round is over (win or draw).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winning symbol, if there is one.
    pub fn winning_symbol(&self) -> Option<&Symbol> {
        match self {
            Outcome::Win { symbol, .. } => Some(symbol),
            _ => None,
        }
    }
}

/// Evaluates the terminal state of a board.
///
/// Pure and idempotent: identical boards always evaluate to identical
/// outcomes, and evaluation never mutates anything.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((symbol, line)) = winning_line(board) {
        return Outcome::Win { symbol, line };
    }

    if is_full(board) {
        return Outcome::Draw;
    }

    Outcome::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn sym(text: &str) -> Symbol {
        Symbol::new(text).unwrap()
    }

    #[test]
    fn test_empty_board_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_completed_line_wins() {
        let mut board = Board::new();
        board.set(Cell::TopLeft, sym("O"));
        board.set(Cell::MiddleLeft, sym("O"));
        board.set(Cell::BottomLeft, sym("O"));

        let outcome = evaluate(&board);
        assert_eq!(outcome.winning_symbol().map(Symbol::as_str), Some("O"));
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_full_board_without_line_draws() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        let marks = ["X", "O", "X", "O", "X", "X", "O", "X", "O"];
        for (cell, mark) in Cell::ALL.into_iter().zip(marks) {
            board.set(cell, sym(mark));
        }

        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X wins the top row on a full board.
        let mut board = Board::new();
        let marks = ["X", "X", "X", "O", "O", "X", "X", "O", "O"];
        for (cell, mark) in Cell::ALL.into_iter().zip(marks) {
            board.set(cell, sym(mark));
        }

        assert!(matches!(evaluate(&board), Outcome::Win { .. }));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut board = Board::new();
        board.set(Cell::Center, sym("X"));
        board.set(Cell::TopLeft, sym("O"));

        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
