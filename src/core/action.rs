//! Attack orders: which territory attacks which.
//!
//! An order is just the pair of territory IDs the player picked. It says
//! nothing about legality; the validator decides that.

use serde::{Deserialize, Serialize};

use super::territory::TerritoryId;

/// A proposed attack.
///
/// ## Example
///
/// ```
/// use rust_war::core::{AttackOrder, TerritoryId};
///
/// // Player typed "1" then "2"
/// let order = AttackOrder::from_one_based(1, 2).unwrap();
/// assert_eq!(order.attacker, TerritoryId::new(0));
/// assert_eq!(order.defender, TerritoryId::new(1));
///
/// // Territory numbers start at 1
/// assert!(AttackOrder::from_one_based(0, 2).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackOrder {
    /// Territory the attack is launched from.
    pub attacker: TerritoryId,

    /// Territory under attack.
    pub defender: TerritoryId,
}

impl AttackOrder {
    /// Create an order from 0-based IDs.
    #[must_use]
    pub const fn new(attacker: TerritoryId, defender: TerritoryId) -> Self {
        Self { attacker, defender }
    }

    /// Create an order from the 1-based numbers shown on the map.
    ///
    /// Returns `None` if either number is 0.
    #[must_use]
    pub fn from_one_based(attacker: usize, defender: usize) -> Option<Self> {
        Some(Self {
            attacker: TerritoryId::from_one_based(attacker)?,
            defender: TerritoryId::from_one_based(defender)?,
        })
    }
}

impl std::fmt::Display for AttackOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.attacker, self.defender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = AttackOrder::new(TerritoryId::new(2), TerritoryId::new(4));
        assert_eq!(order.attacker.index(), 2);
        assert_eq!(order.defender.index(), 4);
        assert_eq!(format!("{}", order), "(3) -> (5)");
    }

    #[test]
    fn test_order_from_one_based_rejects_zero() {
        assert!(AttackOrder::from_one_based(3, 0).is_none());
        assert!(AttackOrder::from_one_based(0, 0).is_none());
        assert!(AttackOrder::from_one_based(5, 4).is_some());
    }

    #[test]
    fn test_order_serde() {
        let order = AttackOrder::new(TerritoryId::new(0), TerritoryId::new(1));
        let json = serde_json::to_string(&order).unwrap();
        let back: AttackOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
