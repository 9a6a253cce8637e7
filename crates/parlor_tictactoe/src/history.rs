//! Snapshot-based undo history.

use crate::score::Scoreboard;
use crate::types::{Board, Slot};
use serde::{Deserialize, Serialize};

/// State captured immediately before a move is applied.
///
/// Snapshots are plain values: popping one hands the session back
/// exactly what it held before the move, with no references shared
/// with live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) board: Board,
    pub(crate) to_move: Slot,
    pub(crate) scores: Scoreboard,
    pub(crate) symbols_locked: bool,
}

impl Snapshot {
    /// Captures pre-move session state.
    pub fn new(board: Board, to_move: Slot, scores: Scoreboard, symbols_locked: bool) -> Self {
        Self {
            board,
            to_move,
            scores,
            symbols_locked,
        }
    }

    /// Returns the captured board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the slot that was to move.
    pub fn to_move(&self) -> Slot {
        self.to_move
    }

    /// Returns the captured scores.
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Returns the captured lock flag.
    pub fn symbols_locked(&self) -> bool {
        self.symbols_locked
    }
}

/// LIFO stack of pre-move snapshots.
///
/// Grows by one entry per applied move, shrinks by one per undo, and is
/// cleared on restart. Unbounded, though a round caps it at 9 entries
/// in practice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<Snapshot>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    /// Removes and returns the most recent snapshot.
    ///
    /// Returns `None` when the history is empty.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no snapshots are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stored snapshots, oldest first.
    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }
}
