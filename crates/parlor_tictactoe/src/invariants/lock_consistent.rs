//! Lock consistency invariant: the symbol lock tracks round activity.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: symbols are locked exactly while the history is
/// non-empty.
///
/// The first move of a round sets the lock and pushes a snapshot;
/// restart clears both; undoing the last remaining move forces the
/// lock off. No reachable state holds one without the other.
pub struct LockConsistentInvariant;

impl Invariant<GameSession> for LockConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        session.symbols_locked() == session.can_undo()
    }

    fn description() -> &'static str {
        "Symbols are locked exactly while the round has moves to undo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_holds() {
        let session = GameSession::new();
        assert!(LockConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_holds_through_a_round() {
        let mut session = GameSession::new();

        session.apply_move(0).unwrap();
        assert!(LockConsistentInvariant::holds(&session));

        session.apply_move(4).unwrap();
        session.undo();
        assert!(LockConsistentInvariant::holds(&session));

        session.undo();
        assert!(LockConsistentInvariant::holds(&session));

        session.restart(false);
        assert!(LockConsistentInvariant::holds(&session));
    }
}
