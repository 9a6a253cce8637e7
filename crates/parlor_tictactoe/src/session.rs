//! Game session: the command/query surface over one running match.

use crate::cell::Cell;
use crate::history::{History, Snapshot};
use crate::roster::{Roster, SymbolError};
use crate::rules::{evaluate, Outcome};
use crate::score::Scoreboard;
use crate::types::{Board, Slot, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Rejection reasons for a move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name one of the 9 cells.
    #[display("Cell index {} is out of range", _0)]
    OutOfRange(usize),
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Cell),
    /// The round has already ended in a win or draw.
    #[display("The round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}

/// One running match: board, turn, lock, undo history, scores, and the
/// player roster, owned as a single aggregate.
///
/// All mutation flows through the command methods; queries are cheap
/// reads a presentation layer can poll after every command. Rejected
/// commands leave the session untouched, so a caller that discards the
/// returned rejection gets silent no-op behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) to_move: Slot,
    pub(crate) symbols_locked: bool,
    pub(crate) history: History,
    pub(crate) scores: Scoreboard,
    pub(crate) roster: Roster,
}

impl GameSession {
    /// Creates a fresh session: empty board, slot one to move, symbols
    /// unlocked, zeroed scores, default roster.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            to_move: Slot::One,
            symbols_locked: false,
            history: History::new(),
            scores: Scoreboard::new(),
            roster: Roster::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Plays the active slot's symbol into the cell at `index`.
    ///
    /// On success: symbols lock, a pre-move snapshot is pushed, the
    /// mark is written, the turn flips, and if the move ends the round
    /// the scoreboard is credited exactly once.
    ///
    /// # Errors
    ///
    /// Rejects an out-of-range index, an occupied cell, or a move after
    /// the round has ended. The session is unchanged on rejection.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        let Some(cell) = Cell::from_index(index) else {
            warn!(index, "Move rejected: index out of range");
            return Err(MoveError::OutOfRange(index));
        };

        if evaluate(&self.board).is_terminal() {
            warn!(%cell, "Move rejected: round is over");
            return Err(MoveError::RoundOver);
        }

        if !self.board.is_empty(cell) {
            warn!(%cell, "Move rejected: cell occupied");
            return Err(MoveError::Occupied(cell));
        }

        // Snapshot records the pre-move lock value; undoing the first
        // move of a round therefore restores the unlocked state.
        self.history.push(Snapshot::new(
            self.board.clone(),
            self.to_move,
            self.scores,
            self.symbols_locked,
        ));
        self.symbols_locked = true;

        let symbol = self.roster.symbol(self.to_move).clone();
        self.board.set(cell, symbol.clone());
        self.to_move = self.to_move.other();

        info!(%cell, %symbol, "Move applied");

        match evaluate(&self.board) {
            Outcome::Win { symbol, .. } => {
                match self.roster.slot_for_symbol(&symbol) {
                    Some(slot) => self.scores.record_win(slot),
                    // A winning symbol held by neither slot cannot occur
                    // while the lock holds; absorbed as a draw rather
                    // than a crash.
                    None => self.scores.record_draw(),
                }
                info!(winner = %symbol, "Round ended in a win");
            }
            Outcome::Draw => {
                self.scores.record_draw();
                info!("Round ended in a draw");
            }
            Outcome::Ongoing => {}
        }

        Ok(())
    }

    /// Reverts the most recent move, restoring board, turn, scores, and
    /// lock state from its snapshot.
    ///
    /// Undoing the last remaining move forces the symbols unlocked,
    /// whatever the snapshot recorded. Returns false (and changes
    /// nothing) when there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            debug!("Undo ignored: history is empty");
            return false;
        };

        self.board = snapshot.board;
        self.to_move = snapshot.to_move;
        self.scores = snapshot.scores;
        self.symbols_locked = snapshot.symbols_locked;

        if self.history.is_empty() {
            self.symbols_locked = false;
        }

        info!(remaining = self.history.len(), "Move undone");
        true
    }

    /// Starts a fresh round: empty board, slot one to move, history
    /// cleared, symbols unlocked. Zeroes the scoreboard when
    /// `clear_scores` is set.
    #[instrument(skip(self))]
    pub fn restart(&mut self, clear_scores: bool) {
        self.board = Board::new();
        self.to_move = Slot::One;
        self.history.clear();
        self.symbols_locked = false;
        if clear_scores {
            self.scores.reset();
        }
        info!(clear_scores, "Board restarted");
    }

    /// Sets a slot's display name. Always accepted; empty names show as
    /// the positional placeholder.
    pub fn set_player_name(&mut self, slot: Slot, name: impl Into<String>) {
        self.roster.set_name(slot, name);
    }

    /// Assigns a symbol to a slot. Presets and custom text take the
    /// same path; the candidate is trimmed first.
    ///
    /// # Errors
    ///
    /// Rejects assignment while symbols are locked, blank candidates,
    /// and candidates equal to the other slot's symbol. The roster is
    /// unchanged on rejection.
    #[instrument(skip(self))]
    pub fn set_player_symbol(&mut self, slot: Slot, candidate: &str) -> Result<(), SymbolError> {
        if self.symbols_locked {
            warn!(?slot, candidate, "Symbol rejected: locked for the round");
            return Err(SymbolError::Locked);
        }

        self.roster.assign_symbol(slot, candidate).inspect_err(|error| {
            warn!(?slot, candidate, %error, "Symbol rejected");
        })
    }

    /// Restores default names and symbols, then restarts the round and
    /// clears the scores.
    #[instrument(skip(self))]
    pub fn reset_player_config(&mut self) {
        self.roster = Roster::new();
        self.restart(true);
        info!("Player configuration reset to defaults");
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Evaluates and returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Returns the accumulated scores.
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Returns the slot whose turn it is.
    pub fn to_move(&self) -> Slot {
        self.to_move
    }

    /// Returns the symbol the next move will place.
    pub fn current_symbol(&self) -> &Symbol {
        self.roster.symbol(self.to_move)
    }

    /// Returns the player roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns true if there is a move to undo.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns true if symbols are frozen for the current round.
    pub fn symbols_locked(&self) -> bool {
        self.symbols_locked
    }

    /// Returns the undo history, oldest entry first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns a status line for display.
    ///
    /// Announces the winner or draw once the round ends, otherwise
    /// whose turn it is and with which symbol.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::Win { symbol, .. } => match self.roster.slot_for_symbol(&symbol) {
                Some(slot) => format!("{} wins!", self.roster.display_name(slot)),
                None => format!("{} wins!", symbol),
            },
            Outcome::Draw => "Draw".to_string(),
            Outcome::Ongoing => format!(
                "Turn: {} ({})",
                self.roster.display_name(self.to_move),
                self.current_symbol()
            ),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
