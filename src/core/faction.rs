//! Faction identifiers.
//!
//! A faction is the army that owns a territory, named by its color.
//! The engine only compares factions for equality; it never interprets
//! the name.

use serde::{Deserialize, Serialize};

/// Faction controlled by the player in the standard game.
pub const PLAYER_FACTION: &str = "Blue";

/// Opaque faction identifier with value equality.
///
/// ```
/// use rust_war::core::Faction;
///
/// let blue = Faction::new("Blue");
/// assert_eq!(blue, Faction::blue());
/// assert_ne!(blue, Faction::green());
/// assert_eq!(blue.to_string(), "Blue");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Faction(String);

impl Faction {
    /// Create a faction from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The faction name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The player's army in the standard game.
    #[must_use]
    pub fn blue() -> Self {
        Self::new(PLAYER_FACTION)
    }

    #[must_use]
    pub fn green() -> Self {
        Self::new("Green")
    }

    #[must_use]
    pub fn yellow() -> Self {
        Self::new("Yellow")
    }

    #[must_use]
    pub fn black() -> Self {
        Self::new("Black")
    }
}

impl Default for Faction {
    fn default() -> Self {
        Self::blue()
    }
}

impl From<&str> for Faction {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_equality() {
        assert_eq!(Faction::new("Green"), Faction::green());
        assert_ne!(Faction::yellow(), Faction::black());
    }

    #[test]
    fn test_faction_default_is_player() {
        assert_eq!(Faction::default().name(), PLAYER_FACTION);
    }

    #[test]
    fn test_faction_serializes_as_plain_string() {
        let json = serde_json::to_string(&Faction::green()).unwrap();
        assert_eq!(json, "\"Green\"");

        let back: Faction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Faction::green());
    }
}
