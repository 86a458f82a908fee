//! Territories and their identifiers.
//!
//! ## TerritoryId
//!
//! Territories are identified by their 0-based position in the registry.
//! The console shows 1-based numbers; use `TerritoryId::from_one_based`
//! to convert user input.
//!
//! ```
//! use rust_war::core::TerritoryId;
//!
//! let id = TerritoryId::from_one_based(1).unwrap();
//! assert_eq!(id.index(), 0);
//! assert_eq!(id.one_based(), 1);
//!
//! // There is no territory number 0
//! assert!(TerritoryId::from_one_based(0).is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::faction::Faction;

/// Index of a territory in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryId(pub usize);

impl TerritoryId {
    /// Create a territory ID from a 0-based index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Convert a 1-based territory number into an ID.
    ///
    /// Returns `None` for 0, which no territory uses.
    #[must_use]
    pub const fn from_one_based(number: usize) -> Option<Self> {
        match number.checked_sub(1) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }

    /// The 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// The 1-based number shown to the player.
    #[must_use]
    pub const fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.one_based())
    }
}

/// A named map unit with an owning faction and a garrison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Display name.
    pub name: String,

    /// Owning army.
    pub faction: Faction,

    /// Garrison size. At least 1 for every territory on the map.
    pub troops: u32,
}

impl Territory {
    /// Create a new territory.
    pub fn new(name: impl Into<String>, faction: impl Into<Faction>, troops: u32) -> Self {
        Self {
            name: name.into(),
            faction: faction.into(),
            troops,
        }
    }

    /// Check if this territory belongs to `faction`.
    #[must_use]
    pub fn is_owned_by(&self, faction: &Faction) -> bool {
        &self.faction == faction
    }
}
