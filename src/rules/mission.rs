//! Secret missions and how they are scored.
//!
//! Each game hands the player one mission at the start:
//! - **EliminateFaction**: leave a faction without territories
//! - **ConquerCount**: hold at least N territories
//!
//! Evaluation only reads the registry, so it can be called as often as
//! the caller likes with the same answer until the map changes.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::validator::AttackPolicy;
use crate::core::{Faction, GameConfig, GameRng, MissionChoice, Registry, Result, WarError};

/// The player's win condition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mission {
    /// Take every territory away from `target`.
    EliminateFaction { target: Faction },
    /// Own at least `target` territories.
    ConquerCount { target: u32 },
}

impl Mission {
    /// Hand out the mission a configuration asks for.
    ///
    /// `MissionChoice::Random` picks uniformly between the two kinds.
    pub fn assign(config: &GameConfig, rng: &mut GameRng) -> Self {
        let eliminate = match config.mission {
            MissionChoice::EliminateFaction => true,
            MissionChoice::ConquerCount => false,
            MissionChoice::Random => rng.gen_range_usize(0..2) == 0,
        };

        let mission = if eliminate {
            Mission::EliminateFaction {
                target: config.eliminate_target.clone(),
            }
        } else {
            Mission::ConquerCount {
                target: config.conquer_target,
            }
        };

        info!(mission = %mission.description(), "mission assigned");
        mission
    }

    /// Check that the mission can be completed on `registry` under `policy`.
    ///
    /// An elimination target must hold territory at the start, and it cannot
    /// be the player's own army while only the player attacks.
    pub fn check(&self, registry: &Registry, policy: &AttackPolicy) -> Result<()> {
        match self {
            Mission::ConquerCount { target } if *target == 0 || *target as usize > registry.len() => {
                Err(WarError::InvalidMissionTarget {
                    target: *target,
                    max: registry.len(),
                })
            }
            Mission::EliminateFaction { target }
                if registry.count_by_faction(target) == 0
                    || (policy.player_only && *target == policy.player_faction) =>
            {
                Err(WarError::InvalidEliminateTarget { target: target.clone() })
            }
            _ => Ok(()),
        }
    }

    /// Human-readable mission text.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Mission::EliminateFaction { target } => {
                format!("Destroy every territory of the {} army.", target)
            }
            Mission::ConquerCount { target } => {
                format!("Conquer a total of {} territories.", target)
            }
        }
    }
}

impl std::fmt::Display for Mission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

/// Counts behind a mission evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionProgress {
    /// Territories `faction` still holds.
    EliminateFaction { faction: Faction, remaining: usize },
    /// Territories the player holds out of `target`.
    ConquerCount { owned: usize, target: u32 },
}

impl std::fmt::Display for MissionProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionProgress::EliminateFaction { faction, remaining } => {
                write!(f, "The {} army still holds {} territories.", faction, remaining)
            }
            MissionProgress::ConquerCount { owned, target } => {
                write!(f, "You hold {} of the {} territories required.", owned, target)
            }
        }
    }
}

/// Mission evaluation with the counts for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionStatus {
    pub description: String,
    pub progress: MissionProgress,
    pub complete: bool,
}

/// Evaluate a mission and keep the intermediate counts.
pub fn mission_status(registry: &Registry, player_faction: &Faction, mission: &Mission) -> MissionStatus {
    let (progress, complete) = match mission {
        Mission::EliminateFaction { target } => {
            let remaining = registry.count_by_faction(target);
            (
                MissionProgress::EliminateFaction {
                    faction: target.clone(),
                    remaining,
                },
                remaining == 0,
            )
        }
        Mission::ConquerCount { target } => {
            let owned = registry.count_by_faction(player_faction);
            (
                MissionProgress::ConquerCount {
                    owned,
                    target: *target,
                },
                owned >= *target as usize,
            )
        }
    };

    MissionStatus {
        description: mission.description(),
        progress,
        complete,
    }
}

/// Check whether the player has fulfilled `mission`.
///
/// ```
/// use rust_war::core::{Faction, Registry};
/// use rust_war::rules::{is_mission_complete, Mission};
///
/// let registry = Registry::standard();
/// let mission = Mission::ConquerCount { target: 3 };
///
/// // Blue starts with one territory
/// assert!(!is_mission_complete(&registry, &Faction::blue(), &mission));
/// ```
#[must_use]
pub fn is_mission_complete(registry: &Registry, player_faction: &Faction, mission: &Mission) -> bool {
    mission_status(registry, player_faction, mission).complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Territory;

    fn blue_holds(count: usize) -> Registry {
        let territories = (0..5)
            .map(|i| {
                let faction = if i < count { "Blue" } else { "Green" };
                Territory::new(format!("T{}", i), faction, 2)
            })
            .collect();
        Registry::new(territories).unwrap()
    }

    #[test]
    fn test_conquer_count() {
        let mission = Mission::ConquerCount { target: 3 };
        let blue = Faction::blue();

        assert!(!is_mission_complete(&blue_holds(2), &blue, &mission));
        assert!(is_mission_complete(&blue_holds(3), &blue, &mission));
        assert!(is_mission_complete(&blue_holds(5), &blue, &mission));
    }

    #[test]
    fn test_eliminate_faction() {
        let mission = Mission::EliminateFaction { target: Faction::green() };
        let blue = Faction::blue();

        assert!(!is_mission_complete(&Registry::standard(), &blue, &mission));
        assert!(!is_mission_complete(&blue_holds(4), &blue, &mission));
        assert!(is_mission_complete(&blue_holds(5), &blue, &mission));
    }

    #[test]
    fn test_eliminate_absent_faction_is_complete() {
        let mission = Mission::EliminateFaction { target: Faction::new("Red") };
        assert!(is_mission_complete(&Registry::standard(), &Faction::blue(), &mission));
    }

    #[test]
    fn test_status_counts() {
        let registry = Registry::standard();
        let blue = Faction::blue();

        let status = mission_status(&registry, &blue, &Mission::EliminateFaction { target: Faction::green() });
        assert_eq!(
            status.progress,
            MissionProgress::EliminateFaction {
                faction: Faction::green(),
                remaining: 2,
            }
        );
        assert!(!status.complete);

        let status = mission_status(&registry, &blue, &Mission::ConquerCount { target: 3 });
        assert_eq!(status.progress, MissionProgress::ConquerCount { owned: 1, target: 3 });
        assert_eq!(status.progress.to_string(), "You hold 1 of the 3 territories required.");
    }

    #[test]
    fn test_status_is_idempotent() {
        let registry = blue_holds(3);
        let mission = Mission::ConquerCount { target: 3 };

        let first = mission_status(&registry, &Faction::blue(), &mission);
        let second = mission_status(&registry, &Faction::blue(), &mission);
        assert_eq!(first, second);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            Mission::EliminateFaction { target: Faction::green() }.description(),
            "Destroy every territory of the Green army."
        );
        assert_eq!(
            Mission::ConquerCount { target: 3 }.to_string(),
            "Conquer a total of 3 territories."
        );
    }

    #[test]
    fn test_assign_fixed_choice() {
        let mut rng = GameRng::new(1);

        let config = GameConfig::new().with_mission(MissionChoice::ConquerCount).with_conquer_target(4);
        assert_eq!(Mission::assign(&config, &mut rng), Mission::ConquerCount { target: 4 });

        let config = GameConfig::new()
            .with_mission(MissionChoice::EliminateFaction)
            .with_eliminate_target("Black");
        assert_eq!(
            Mission::assign(&config, &mut rng),
            Mission::EliminateFaction { target: Faction::black() }
        );
    }

    #[test]
    fn test_assign_random_hands_out_both_kinds() {
        let config = GameConfig::new();
        let mut rng = GameRng::new(42);

        let mut eliminate = 0;
        let mut conquer = 0;
        for _ in 0..200 {
            match Mission::assign(&config, &mut rng) {
                Mission::EliminateFaction { .. } => eliminate += 1,
                Mission::ConquerCount { .. } => conquer += 1,
            }
        }

        assert!(eliminate > 50);
        assert!(conquer > 50);
    }

    #[test]
    fn test_assign_is_deterministic() {
        let config = GameConfig::new();
        let a = Mission::assign(&config, &mut GameRng::new(9));
        let b = Mission::assign(&config, &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_check_conquer_target() {
        let registry = Registry::standard();
        let policy = AttackPolicy::new("Blue");

        assert!(Mission::ConquerCount { target: 5 }.check(&registry, &policy).is_ok());
        assert!(Mission::EliminateFaction { target: Faction::green() }.check(&registry, &policy).is_ok());
        assert!(matches!(
            Mission::ConquerCount { target: 6 }.check(&registry, &policy),
            Err(WarError::InvalidMissionTarget { target: 6, max: 5 })
        ));
    }

    #[test]
    fn test_check_eliminate_target() {
        let registry = Registry::standard();
        let policy = AttackPolicy::new("Blue");

        // Faction names are case sensitive
        let absent = Mission::EliminateFaction { target: Faction::new("green") };
        assert!(matches!(
            absent.check(&registry, &policy),
            Err(WarError::InvalidEliminateTarget { target }) if target == Faction::new("green")
        ));

        let own = Mission::EliminateFaction { target: Faction::blue() };
        assert!(matches!(
            own.check(&registry, &policy),
            Err(WarError::InvalidEliminateTarget { .. })
        ));

        // In hot-seat play the other armies can take Blue's territories
        assert!(own.check(&registry, &policy.with_player_only(false)).is_ok());
    }

    #[test]
    fn test_mission_serde_tagged() {
        let mission = Mission::ConquerCount { target: 3 };
        let json = serde_json::to_string(&mission).unwrap();
        assert_eq!(json, r#"{"kind":"conquer_count","target":3}"#);

        let back: Mission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mission);
    }
}
