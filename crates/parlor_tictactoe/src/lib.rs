//! Parlor Tic-Tac-Toe - two-player session engine
//!
//! This library is the game state machine behind a tic-tac-toe table:
//! move legality, win/draw detection, strict turn alternation,
//! snapshot-based undo, per-player names and symbols with a round lock,
//! and score accumulation across rounds. Presentation lives elsewhere;
//! a host drives the engine through commands and reads it back through
//! queries after each one.
//!
//! # Architecture
//!
//! - **Rules**: pure evaluation of a board into win/draw/ongoing
//! - **Session**: the owning aggregate and its command/query surface
//! - **History**: value snapshots supporting single-step undo
//! - **Roster**: player configuration and the symbol rules
//! - **Invariants**: first-class checks of the engine's guarantees
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{GameSession, Outcome, Slot};
//!
//! let mut session = GameSession::new();
//! session.set_player_name(Slot::One, "Ada");
//!
//! // Slot one takes the top row: X O X O X.
//! for index in [0, 4, 1, 3, 2] {
//!     session.apply_move(index).unwrap();
//! }
//!
//! assert!(matches!(session.outcome(), Outcome::Win { .. }));
//! assert_eq!(session.scores().wins(Slot::One), 1);
//! assert_eq!(session.status_line(), "Ada wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cell;
mod history;
mod roster;
mod rules;
mod score;
mod session;
mod types;

pub mod invariants;

// Crate-level exports - board addressing
pub use cell::Cell;

// Crate-level exports - undo history
pub use history::{History, Snapshot};

// Crate-level exports - player configuration
pub use roster::{PlayerProfile, Roster, SymbolError, DEFAULT_SYMBOLS, PRESET_SYMBOLS};

// Crate-level exports - rules engine
pub use rules::{evaluate, is_full, winning_line, Line, Outcome, LINES};

// Crate-level exports - score tracking
pub use score::Scoreboard;

// Crate-level exports - session surface
pub use session::{GameSession, MoveError};

// Crate-level exports - core domain types
pub use types::{Board, Slot, Symbol};
