//! Player configuration: names, symbols, and the rules guarding them.

use crate::types::{Slot, Symbol};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Preset symbol palette offered alongside custom text.
pub const PRESET_SYMBOLS: [&str; 9] = ["X", "O", "★", "●", "▲", "♢", "🙂", "🔥", "🍀"];

/// Default symbols assigned to slot one and slot two.
pub const DEFAULT_SYMBOLS: [&str; 2] = ["X", "O"];

fn placeholder(slot: Slot) -> &'static str {
    match slot {
        Slot::One => "Player 1",
        Slot::Two => "Player 2",
    }
}

/// Rejection reasons for a symbol assignment.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SymbolError {
    /// Symbols cannot change once a round has begun.
    #[display("Symbols are locked for the current round")]
    Locked,
    /// Candidate text was empty or whitespace-only.
    #[display("Symbol is blank")]
    Blank,
    /// Candidate symbol already belongs to the other slot.
    #[display("Symbol {} is taken by the other player", _0)]
    Taken(Symbol),
}

impl std::error::Error for SymbolError {}

/// Name and symbol for one player slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    name: String,
    symbol: Symbol,
}

impl PlayerProfile {
    /// Returns the stored name, exactly as entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the slot's symbol.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }
}

/// The two player profiles of a session.
///
/// Invariant: the two symbols are always distinct. Assignments that
/// would break this are rejected without touching state. The lock that
/// freezes symbols during a round lives in the session, which checks it
/// before delegating here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    one: PlayerProfile,
    two: PlayerProfile,
}

impl Roster {
    /// Creates a roster with default names and symbols.
    pub fn new() -> Self {
        Self {
            one: PlayerProfile {
                name: placeholder(Slot::One).to_string(),
                symbol: Symbol::new(DEFAULT_SYMBOLS[0]).expect("default symbol is non-blank"),
            },
            two: PlayerProfile {
                name: placeholder(Slot::Two).to_string(),
                symbol: Symbol::new(DEFAULT_SYMBOLS[1]).expect("default symbol is non-blank"),
            },
        }
    }

    /// Returns the profile for a slot.
    pub fn profile(&self, slot: Slot) -> &PlayerProfile {
        match slot {
            Slot::One => &self.one,
            Slot::Two => &self.two,
        }
    }

    fn profile_mut(&mut self, slot: Slot) -> &mut PlayerProfile {
        match slot {
            Slot::One => &mut self.one,
            Slot::Two => &mut self.two,
        }
    }

    /// Returns the symbol assigned to a slot.
    pub fn symbol(&self, slot: Slot) -> &Symbol {
        &self.profile(slot).symbol
    }

    /// Returns the name to show for a slot.
    ///
    /// Falls back to the positional placeholder when the stored name is
    /// empty or whitespace-only.
    pub fn display_name(&self, slot: Slot) -> &str {
        let name = self.profile(slot).name.trim();
        if name.is_empty() {
            placeholder(slot)
        } else {
            name
        }
    }

    /// Resolves a symbol back to the slot holding it.
    pub fn slot_for_symbol(&self, symbol: &Symbol) -> Option<Slot> {
        if &self.one.symbol == symbol {
            Some(Slot::One)
        } else if &self.two.symbol == symbol {
            Some(Slot::Two)
        } else {
            None
        }
    }

    /// Sets a slot's name. Free-form; empty input is allowed and shows
    /// as the positional placeholder.
    pub fn set_name(&mut self, slot: Slot, name: impl Into<String>) {
        self.profile_mut(slot).name = name.into();
        debug!(?slot, name = %self.profile(slot).name, "Player renamed");
    }

    /// Assigns a symbol to a slot.
    ///
    /// The candidate is trimmed; presets and custom text take the same
    /// path. Rejected if blank, or if it equals the other slot's
    /// current symbol.
    ///
    /// # Errors
    ///
    /// Returns `SymbolError::Blank` or `SymbolError::Taken` and leaves
    /// the roster unchanged.
    pub fn assign_symbol(&mut self, slot: Slot, candidate: &str) -> Result<(), SymbolError> {
        let symbol = Symbol::new(candidate).ok_or(SymbolError::Blank)?;

        if self.symbol(slot.other()) == &symbol {
            return Err(SymbolError::Taken(symbol));
        }

        debug!(?slot, symbol = %symbol, "Symbol assigned");
        self.profile_mut(slot).symbol = symbol;
        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
