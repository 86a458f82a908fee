//! Battle resolution.
//!
//! One battle is one pair of dice: the attacker rolls, the defender rolls,
//! ties go to the attacker. A successful attack costs the defender one
//! troop. When the defender's last troop falls the territory changes hands:
//! it takes the attacker's color and one troop marches in from the
//! attacking territory.
//!
//! The resolver trusts its inputs. Call `validate_attack` first.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Dice, Faction, Registry, TerritoryId};

/// Troops left in a freshly conquered territory.
pub const CONQUEST_GARRISON: u32 = 1;

/// Ownership change caused by a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conquest {
    /// Owner before the battle.
    pub previous_owner: Faction,
    /// Owner after the battle (the attacker's faction).
    pub new_owner: Faction,
}

/// Everything a caller needs to report one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub attacker: TerritoryId,
    pub defender: TerritoryId,
    pub attack_roll: u8,
    pub defense_roll: u8,
    /// The attack roll met or beat the defense roll.
    pub attack_succeeded: bool,
    /// Set when the defender was taken.
    pub conquest: Option<Conquest>,
}

impl BattleOutcome {
    /// Check if the defending territory changed hands.
    #[must_use]
    pub fn is_conquest(&self) -> bool {
        self.conquest.is_some()
    }
}

/// Resolve one battle, rolling the attack die first.
///
/// ## Panics
///
/// Panics if either ID is not on the map.
pub fn resolve_battle<D: Dice + ?Sized>(
    registry: &mut Registry,
    attacker: TerritoryId,
    defender: TerritoryId,
    dice: &mut D,
) -> BattleOutcome {
    let attack_roll = dice.roll_d6();
    let defense_roll = dice.roll_d6();
    apply_rolls(registry, attacker, defender, attack_roll, defense_roll)
}

/// Resolve one battle with rolls that are already known.
///
/// ## Example
///
/// ```
/// use rust_war::core::{Registry, Territory, TerritoryId};
/// use rust_war::rules::apply_rolls;
///
/// let mut registry = Registry::new(vec![
///     Territory::new("Brasil", "Blue", 10),
///     Territory::new("Argentina", "Green", 5),
/// ]).unwrap();
///
/// let outcome = apply_rolls(&mut registry, TerritoryId::new(0), TerritoryId::new(1), 6, 3);
///
/// assert!(outcome.attack_succeeded);
/// assert!(!outcome.is_conquest());
/// assert_eq!(registry[TerritoryId::new(1)].troops, 4);
/// assert_eq!(registry[TerritoryId::new(0)].troops, 10);
/// ```
///
/// ## Panics
///
/// Panics if either ID is not on the map.
pub fn apply_rolls(
    registry: &mut Registry,
    attacker: TerritoryId,
    defender: TerritoryId,
    attack_roll: u8,
    defense_roll: u8,
) -> BattleOutcome {
    let attack_succeeded = attack_roll >= defense_roll;
    debug!(
        attacker = %registry[attacker].name,
        defender = %registry[defender].name,
        attack_roll,
        defense_roll,
        attack_succeeded,
        "battle rolled"
    );

    let mut outcome = BattleOutcome {
        attacker,
        defender,
        attack_roll,
        defense_roll,
        attack_succeeded,
        conquest: None,
    };

    if !attack_succeeded {
        return outcome;
    }

    let remaining = registry.adjust_troops(defender, -1);
    if remaining == 0 {
        let new_owner = registry[attacker].faction.clone();
        let previous_owner = registry[defender].faction.clone();

        registry.set_faction(defender, new_owner.clone());
        registry.adjust_troops(defender, i64::from(CONQUEST_GARRISON));
        registry.adjust_troops(attacker, -1);

        info!(
            territory = %registry[defender].name,
            from = %previous_owner,
            to = %new_owner,
            "territory conquered"
        );

        outcome.conquest = Some(Conquest {
            previous_owner,
            new_owner,
        });
    }

    outcome
}
