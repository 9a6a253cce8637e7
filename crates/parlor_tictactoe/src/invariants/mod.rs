//! First-class invariants for the session engine.
//!
//! Each invariant names a property the engine guarantees across every
//! command sequence. They double as documentation and as checks the
//! tests run after exercising the session.

use crate::session::GameSession;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Record of a violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation record from an invariant's description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A group of invariants checked in one pass.
///
/// Implemented for tuples of invariants so a whole suite composes into
/// a single type, checked with one call.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set against the state.
    ///
    /// # Errors
    ///
    /// Returns one violation per invariant that failed to hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! invariant_set_for_tuple {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

invariant_set_for_tuple!(I1);
invariant_set_for_tuple!(I1, I2);
invariant_set_for_tuple!(I1, I2, I3);

pub mod distinct_symbols;
pub mod lock_consistent;
pub mod monotonic_board;

pub use distinct_symbols::DistinctSymbolsInvariant;
pub use lock_consistent::LockConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    DistinctSymbolsInvariant,
    MonotonicBoardInvariant,
    LockConsistentInvariant,
);

impl GameSession {
    /// Checks the full session invariant set.
    ///
    /// # Errors
    ///
    /// Returns the list of violated invariants, if any.
    pub fn verify(&self) -> Result<(), Vec<InvariantViolation>> {
        SessionInvariants::check_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Slot;

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let session = GameSession::new();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_commands() {
        let mut session = GameSession::new();
        session.set_player_symbol(Slot::One, "★").unwrap();
        session.apply_move(4).unwrap();
        session.apply_move(0).unwrap();
        session.undo();

        assert!(session.verify().is_ok());
    }

    #[test]
    fn test_violations_report_descriptions() {
        let mut session = GameSession::new();
        session.apply_move(0).unwrap();

        // Clear the lock behind the session's back; the lock invariant
        // should name itself in the report.
        session.symbols_locked = false;

        let violations = session.verify().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            LockConsistentInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = GameSession::new();

        type TwoInvariants = (DistinctSymbolsInvariant, LockConsistentInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
