//! Territory registry: the map.
//!
//! The `Registry` owns every territory for the lifetime of a game. Its size
//! is fixed at construction and territories are never removed; a faction is
//! "eliminated" when it no longer owns any territory.
//!
//! Only combat mutates the registry, through crate-private entry points.

use std::ops::Index;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::error::{Result, WarError};
use super::faction::Faction;
use super::territory::{Territory, TerritoryId};

/// Number of territories on the standard map.
pub const MAP_SIZE: usize = 5;

/// Territory IDs owned by one faction. Inline for maps up to 8 territories.
pub type TerritoryIds = SmallVec<[TerritoryId; 8]>;

/// Fixed-size ordered collection of territories.
///
/// ## Example
///
/// ```
/// use rust_war::core::{Faction, Registry, Territory, TerritoryId};
///
/// let registry = Registry::new(vec![
///     Territory::new("Brasil", "Blue", 10),
///     Territory::new("Argentina", "Green", 5),
/// ]).unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry[TerritoryId::new(1)].name, "Argentina");
/// assert_eq!(registry.count_by_faction(&Faction::blue()), 1);
/// assert!(registry.get(TerritoryId::new(2)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    territories: Vec<Territory>,
}

impl Registry {
    /// Create a registry from an ordered list of territories.
    ///
    /// Fails if the list is empty or any territory starts with no troops.
    pub fn new(territories: Vec<Territory>) -> Result<Self> {
        if territories.is_empty() {
            return Err(WarError::EmptyMap);
        }
        if let Some(empty) = territories.iter().find(|t| t.troops == 0) {
            return Err(WarError::EmptyGarrison {
                name: empty.name.clone(),
            });
        }
        Ok(Self { territories })
    }

    /// Create a registry that must hold exactly `MAP_SIZE` territories.
    pub fn with_map_size(territories: Vec<Territory>) -> Result<Self> {
        if territories.len() != MAP_SIZE {
            return Err(WarError::MapSize {
                expected: MAP_SIZE,
                actual: territories.len(),
            });
        }
        Self::new(territories)
    }

    /// The standard five-territory starting map.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            territories: vec![
                Territory::new("Brasil", Faction::blue(), 10),
                Territory::new("Argentina", Faction::green(), 5),
                Territory::new("Peru", Faction::green(), 3),
                Territory::new("Suecia", Faction::yellow(), 8),
                Territory::new("Egito", Faction::black(), 6),
            ],
        }
    }

    /// Get the number of territories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Always false: an empty registry cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Check if an ID refers to a territory on this map.
    #[must_use]
    pub fn contains(&self, id: TerritoryId) -> bool {
        id.index() < self.territories.len()
    }

    /// Get a territory by ID.
    #[must_use]
    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.index())
    }

    /// Iterate over all territories in map order.
    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Iterate over (TerritoryId, &Territory) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryId(i), t))
    }

    /// Iterate over all territory IDs.
    pub fn ids(&self) -> impl Iterator<Item = TerritoryId> {
        (0..self.territories.len()).map(TerritoryId)
    }

    /// Count the territories currently owned by `faction`.
    #[must_use]
    pub fn count_by_faction(&self, faction: &Faction) -> usize {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(faction))
            .count()
    }

    /// IDs of the territories owned by `faction`, in map order.
    #[must_use]
    pub fn owned_by(&self, faction: &Faction) -> TerritoryIds {
        self.entries()
            .filter(|(_, t)| t.is_owned_by(faction))
            .map(|(id, _)| id)
            .collect()
    }

    /// Distinct factions present on the map, in order of first appearance.
    #[must_use]
    pub fn factions(&self) -> Vec<Faction> {
        let mut factions: Vec<Faction> = Vec::new();
        for territory in &self.territories {
            if !factions.contains(&territory.faction) {
                factions.push(territory.faction.clone());
            }
        }
        factions
    }

    /// Territory count for every faction present on the map.
    #[must_use]
    pub fn faction_counts(&self) -> FxHashMap<Faction, usize> {
        let mut counts = FxHashMap::default();
        for territory in &self.territories {
            *counts.entry(territory.faction.clone()).or_insert(0) += 1;
        }
        counts
    }

    // === Combat entry points ===

    /// Hand a territory to a new owner.
    pub(crate) fn set_faction(&mut self, id: TerritoryId, faction: Faction) {
        self.territories[id.index()].faction = faction;
    }

    /// Change a garrison by `delta`, saturating at 0.
    ///
    /// Returns the new troop count.
    pub(crate) fn adjust_troops(&mut self, id: TerritoryId, delta: i64) -> u32 {
        let territory = &mut self.territories[id.index()];
        let updated = (i64::from(territory.troops) + delta).clamp(0, i64::from(u32::MAX));
        territory.troops = updated as u32;
        territory.troops
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<TerritoryId> for Registry {
    type Output = Territory;

    fn index(&self, id: TerritoryId) -> &Self::Output {
        &self.territories[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_map() {
        let registry = Registry::standard();

        assert_eq!(registry.len(), MAP_SIZE);
        assert_eq!(registry[TerritoryId::new(0)].name, "Brasil");
        assert_eq!(registry[TerritoryId::new(0)].troops, 10);
        assert_eq!(registry[TerritoryId::new(4)].faction, Faction::black());
        assert_eq!(registry.count_by_faction(&Faction::green()), 2);
    }

    #[test]
    fn test_rejects_empty_map() {
        assert!(matches!(Registry::new(vec![]), Err(WarError::EmptyMap)));
    }

    #[test]
    fn test_rejects_empty_garrison() {
        let result = Registry::new(vec![
            Territory::new("Brasil", "Blue", 10),
            Territory::new("Peru", "Green", 0),
        ]);

        match result {
            Err(WarError::EmptyGarrison { name }) => assert_eq!(name, "Peru"),
            other => panic!("Expected EmptyGarrison, got {:?}", other),
        }
    }

    #[test]
    fn test_with_map_size() {
        let two = vec![
            Territory::new("Brasil", "Blue", 10),
            Territory::new("Peru", "Green", 3),
        ];
        assert!(matches!(
            Registry::with_map_size(two),
            Err(WarError::MapSize { expected: 5, actual: 2 })
        ));

        let five: Vec<_> = Registry::standard().iter().cloned().collect();
        assert!(Registry::with_map_size(five).is_ok());
    }

    #[test]
    fn test_bounds_checked_get() {
        let registry = Registry::standard();
        assert!(registry.get(TerritoryId::new(4)).is_some());
        assert!(registry.get(TerritoryId::new(5)).is_none());
        assert!(registry.contains(TerritoryId::new(0)));
        assert!(!registry.contains(TerritoryId::new(99)));
    }

    #[test]
    fn test_owned_by() {
        let registry = Registry::standard();
        let green = registry.owned_by(&Faction::green());
        assert_eq!(green.as_slice(), &[TerritoryId::new(1), TerritoryId::new(2)]);
        assert!(registry.owned_by(&Faction::new("Red")).is_empty());
    }

    #[test]
    fn test_factions_in_map_order() {
        let registry = Registry::standard();
        assert_eq!(
            registry.factions(),
            vec![Faction::blue(), Faction::green(), Faction::yellow(), Faction::black()]
        );
    }

    #[test]
    fn test_faction_counts_sum_to_size() {
        let registry = Registry::standard();
        let counts = registry.faction_counts();

        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&Faction::green()], 2);
        assert_eq!(counts.values().sum::<usize>(), registry.len());
    }

    #[test]
    fn test_adjust_troops_saturates() {
        let mut registry = Registry::standard();
        let peru = TerritoryId::new(2);

        assert_eq!(registry.adjust_troops(peru, -1), 2);
        assert_eq!(registry.adjust_troops(peru, -10), 0);
        assert_eq!(registry.adjust_troops(peru, 4), 4);
    }

    #[test]
    fn test_set_faction() {
        let mut registry = Registry::standard();
        registry.set_faction(TerritoryId::new(3), Faction::blue());

        assert_eq!(registry.count_by_faction(&Faction::blue()), 2);
        assert_eq!(registry.count_by_faction(&Faction::yellow()), 0);
    }
}
