//! Score accumulation across rounds.

use crate::types::Slot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Win and draw counters keyed by player slot.
///
/// Counters survive board restarts and are only zeroed by an explicit
/// reset. Undo restores an earlier `Scoreboard` value wholesale from a
/// snapshot; counters are never decremented individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    slot_one_wins: u32,
    slot_two_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the win count for a slot.
    pub fn wins(&self, slot: Slot) -> u32 {
        match slot {
            Slot::One => self.slot_one_wins,
            Slot::Two => self.slot_two_wins,
        }
    }

    /// Returns the draw count.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Credits a win to the given slot.
    pub fn record_win(&mut self, slot: Slot) {
        match slot {
            Slot::One => self.slot_one_wins += 1,
            Slot::Two => self.slot_two_wins += 1,
        }
        debug!(?slot, "Recorded win");
    }

    /// Records a drawn round.
    pub fn record_draw(&mut self) {
        self.draws += 1;
        debug!("Recorded draw");
    }

    /// Zeroes all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
