//! Distinct symbols invariant: the two slots never share a symbol.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Slot;

/// Invariant: the two player symbols never compare equal.
///
/// Assignment rejects duplicates and the round lock freezes symbols
/// during play, so no command sequence can produce a shared symbol.
pub struct DistinctSymbolsInvariant;

impl Invariant<GameSession> for DistinctSymbolsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.roster().symbol(Slot::One) != session.roster().symbol(Slot::Two)
    }

    fn description() -> &'static str {
        "Player symbols are distinct"
    }
}
