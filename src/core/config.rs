//! Game configuration.
//!
//! A game is configured at startup by a `GameConfig`:
//! - Which faction the player controls
//! - Which same-owner attack rule applies
//! - Which mission to hand out (or a random one)
//! - An optional custom starting map
//! - An optional fixed RNG seed
//!
//! Configs load from TOML; every field has a default, so an empty file
//! is the standard game.
//!
//! ```
//! use rust_war::core::{GameConfig, MissionChoice, SameOwnerPolicy};
//!
//! let config = GameConfig::from_toml_str(r#"
//!     seed = 7
//!     mission = "conquer_count"
//!     same_owner_policy = "reject_same_faction"
//! "#).unwrap();
//!
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.mission, MissionChoice::ConquerCount);
//! assert_eq!(config.same_owner_policy, SameOwnerPolicy::RejectSameFaction);
//! assert_eq!(config.player_faction.name(), "Blue");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, WarError};
use super::faction::Faction;
use super::registry::Registry;
use super::rng::clock_seed;
use super::territory::Territory;

/// Which rule rejects attacks between territories of the same side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameOwnerPolicy {
    /// Reject attacks on the player's own territories.
    #[default]
    RejectSelfIndexOnly,
    /// Reject attacks where attacker and defender share a faction.
    RejectSameFaction,
}

/// Which mission the player receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionChoice {
    /// Uniform random pick between the mission kinds.
    #[default]
    Random,
    /// Always eliminate `eliminate_target`.
    EliminateFaction,
    /// Always conquer `conquer_target` territories.
    ConquerCount,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Faction under player control.
    pub player_faction: Faction,

    /// Same-owner attack rule.
    pub same_owner_policy: SameOwnerPolicy,

    /// Only the player's territories may attack.
    ///
    /// Turning this off gives the hot-seat rules where any territory may
    /// attack, which is where `RejectSameFaction` matters.
    pub player_only: bool,

    /// RNG seed. `None` seeds from the system clock.
    pub seed: Option<u64>,

    /// Mission assignment.
    pub mission: MissionChoice,

    /// Faction to wipe out for the elimination mission.
    pub eliminate_target: Faction,

    /// Territories to hold for the conquest mission.
    pub conquer_target: u32,

    /// Custom starting map. Must have exactly `MAP_SIZE` territories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territories: Option<Vec<Territory>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_faction: Faction::blue(),
            same_owner_policy: SameOwnerPolicy::default(),
            player_only: true,
            seed: None,
            mission: MissionChoice::default(),
            eliminate_target: Faction::green(),
            conquer_target: 3,
            territories: None,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Set the player's faction.
    #[must_use]
    pub fn with_player_faction(mut self, faction: impl Into<Faction>) -> Self {
        self.player_faction = faction.into();
        self
    }

    /// Set the same-owner attack rule.
    #[must_use]
    pub fn with_same_owner_policy(mut self, policy: SameOwnerPolicy) -> Self {
        self.same_owner_policy = policy;
        self
    }

    /// Allow or forbid attacks from territories the player does not own.
    #[must_use]
    pub fn with_player_only(mut self, player_only: bool) -> Self {
        self.player_only = player_only;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the mission assignment.
    #[must_use]
    pub fn with_mission(mut self, mission: MissionChoice) -> Self {
        self.mission = mission;
        self
    }

    /// Set the faction the elimination mission targets.
    #[must_use]
    pub fn with_eliminate_target(mut self, faction: impl Into<Faction>) -> Self {
        self.eliminate_target = faction.into();
        self
    }

    /// Set how many territories the conquest mission requires.
    #[must_use]
    pub fn with_conquer_target(mut self, target: u32) -> Self {
        self.conquer_target = target;
        self
    }

    /// Use a custom starting map.
    #[must_use]
    pub fn with_territories(mut self, territories: Vec<Territory>) -> Self {
        self.territories = Some(territories);
        self
    }

    /// The configured seed, or one taken from the clock.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// Build the starting map.
    pub fn build_registry(&self) -> Result<Registry> {
        match &self.territories {
            Some(territories) => Registry::with_map_size(territories.clone()),
            None => Ok(Registry::standard()),
        }
    }

    /// Check the mission targets against a map.
    ///
    /// Only the targets of missions that can be handed out are checked.
    pub fn validate(&self, registry: &Registry) -> Result<()> {
        if self.mission != MissionChoice::ConquerCount {
            let target = &self.eliminate_target;
            if registry.count_by_faction(target) == 0 || (self.player_only && *target == self.player_faction) {
                return Err(WarError::InvalidEliminateTarget { target: target.clone() });
            }
        }
        if self.mission == MissionChoice::EliminateFaction {
            return Ok(());
        }
        let target = self.conquer_target;
        if target == 0 || target as usize > registry.len() {
            return Err(WarError::InvalidMissionTarget {
                target,
                max: registry.len(),
            });
        }
        Ok(())
    }
}
