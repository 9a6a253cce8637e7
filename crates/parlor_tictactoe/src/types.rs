//! Core domain types for the tic-tac-toe session engine.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// One of the two fixed player positions in a session.
///
/// A slot is independent of the name or symbol currently assigned to it.
/// Slot one always moves first in a fresh round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// First player slot (moves first).
    One,
    /// Second player slot.
    Two,
}

impl Slot {
    /// Returns the opposing slot.
    pub fn other(self) -> Self {
        match self {
            Slot::One => Slot::Two,
            Slot::Two => Slot::One,
        }
    }
}

/// The mark a slot places on the board.
///
/// A symbol is arbitrary non-blank text: a preset letter or glyph, or
/// custom text supplied by the player. Construction trims whitespace and
/// rejects input that trims to empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol from raw text, trimming surrounding whitespace.
    ///
    /// Returns `None` if the text is empty or whitespace-only.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells hold the symbol played there, or nothing. The board itself does
/// not police overwrites; move legality lives in the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Option<Symbol>; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| None),
        }
    }

    /// Gets the symbol at the given cell, if one has been played.
    pub fn get(&self, cell: Cell) -> Option<&Symbol> {
        self.cells[cell.index()].as_ref()
    }

    /// Writes a symbol into the given cell.
    pub fn set(&mut self, cell: Cell, symbol: Symbol) {
        self.cells[cell.index()] = Some(symbol);
    }

    /// Checks if a cell is unplayed.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_none()
    }

    /// Returns the number of cells holding a mark.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Option<Symbol>; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Unplayed cells show their 1-based number so a player can name them.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match &self.cells[idx] {
                    Some(symbol) => result.push_str(symbol.as_str()),
                    None => result.push_str(&(idx + 1).to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
