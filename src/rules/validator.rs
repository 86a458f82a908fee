//! Pre-battle legality checks.
//!
//! `validate_attack` runs the checks in a fixed order and reports the
//! first one that fails:
//!
//! 1. Both territories exist
//! 2. A territory does not attack itself
//! 3. The attacker belongs to the player (when `player_only`)
//! 4. The defender is not on the same side (per `SameOwnerPolicy`)
//! 5. The attacker has at least `MIN_ATTACKING_TROOPS`
//!
//! Validation is pure: it reads the registry and never mutates it.

use thiserror::Error;

use crate::core::{AttackOrder, Faction, GameConfig, Registry, SameOwnerPolicy, TerritoryId};

/// Troops an attacker needs: one to commit, one to stay behind.
pub const MIN_ATTACKING_TROOPS: u32 = 2;

/// Why an attack was refused.
///
/// All rejections are recoverable; the player picks again.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AttackRejection {
    #[error("Territory {number} does not exist")]
    InvalidIndex {
        /// The 1-based territory number that was asked for.
        number: usize,
    },

    #[error("A territory cannot attack itself")]
    SelfAttack,

    #[error("You can only attack from territories of the {player} army, {territory} belongs to {owner}")]
    NotOwnedByPlayer {
        territory: String,
        owner: Faction,
        player: Faction,
    },

    #[error("{territory} already belongs to the {owner} army")]
    AttackingOwnTerritory { territory: String, owner: Faction },

    #[error("{territory} needs at least {} troops to attack, it has {troops}", MIN_ATTACKING_TROOPS)]
    InsufficientTroops { territory: String, troops: u32 },
}

impl AttackRejection {
    fn invalid(id: TerritoryId) -> Self {
        AttackRejection::InvalidIndex {
            number: id.one_based(),
        }
    }
}

/// The rule set an attack is checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackPolicy {
    /// Faction under player control.
    pub player_faction: Faction,

    /// Same-owner rule for check 4.
    pub same_owner: SameOwnerPolicy,

    /// Enforce check 3.
    pub player_only: bool,
}

impl AttackPolicy {
    /// Standard rules for `player_faction`.
    pub fn new(player_faction: impl Into<Faction>) -> Self {
        Self {
            player_faction: player_faction.into(),
            same_owner: SameOwnerPolicy::default(),
            player_only: true,
        }
    }

    /// The rules a game configuration asks for.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            player_faction: config.player_faction.clone(),
            same_owner: config.same_owner_policy,
            player_only: config.player_only,
        }
    }

    /// Use a different same-owner rule.
    #[must_use]
    pub fn with_same_owner(mut self, same_owner: SameOwnerPolicy) -> Self {
        self.same_owner = same_owner;
        self
    }

    /// Allow or forbid attacks from territories the player does not own.
    #[must_use]
    pub fn with_player_only(mut self, player_only: bool) -> Self {
        self.player_only = player_only;
        self
    }
}

/// Check whether `attacker` may attack `defender`.
///
/// ## Example
///
/// ```
/// use rust_war::core::{Registry, TerritoryId};
/// use rust_war::rules::{validate_attack, AttackPolicy, AttackRejection};
///
/// let registry = Registry::standard();
/// let policy = AttackPolicy::new("Blue");
///
/// // Brasil (Blue, 10) attacks Argentina (Green)
/// assert!(validate_attack(&registry, &policy, TerritoryId::new(0), TerritoryId::new(1)).is_ok());
///
/// // Argentina is not the player's
/// assert!(matches!(
///     validate_attack(&registry, &policy, TerritoryId::new(1), TerritoryId::new(2)),
///     Err(AttackRejection::NotOwnedByPlayer { .. })
/// ));
/// ```
pub fn validate_attack(
    registry: &Registry,
    policy: &AttackPolicy,
    attacker: TerritoryId,
    defender: TerritoryId,
) -> Result<(), AttackRejection> {
    let Some(from) = registry.get(attacker) else {
        return Err(AttackRejection::invalid(attacker));
    };
    let Some(to) = registry.get(defender) else {
        return Err(AttackRejection::invalid(defender));
    };

    if attacker == defender {
        return Err(AttackRejection::SelfAttack);
    }

    if policy.player_only && !from.is_owned_by(&policy.player_faction) {
        return Err(AttackRejection::NotOwnedByPlayer {
            territory: from.name.clone(),
            owner: from.faction.clone(),
            player: policy.player_faction.clone(),
        });
    }

    let same_side = match policy.same_owner {
        SameOwnerPolicy::RejectSelfIndexOnly => to.is_owned_by(&policy.player_faction),
        SameOwnerPolicy::RejectSameFaction => to.faction == from.faction,
    };
    if same_side {
        return Err(AttackRejection::AttackingOwnTerritory {
            territory: to.name.clone(),
            owner: to.faction.clone(),
        });
    }

    if from.troops < MIN_ATTACKING_TROOPS {
        return Err(AttackRejection::InsufficientTroops {
            territory: from.name.clone(),
            troops: from.troops,
        });
    }

    Ok(())
}

/// Validate an `AttackOrder`.
pub fn validate_order(
    registry: &Registry,
    policy: &AttackPolicy,
    order: AttackOrder,
) -> Result<(), AttackRejection> {
    validate_attack(registry, policy, order.attacker, order.defender)
}

/// Enumerate every attack that would pass validation, in map order.
#[must_use]
pub fn legal_attacks(registry: &Registry, policy: &AttackPolicy) -> Vec<AttackOrder> {
    let mut orders = Vec::new();

    for attacker in registry.ids() {
        for defender in registry.ids() {
            if validate_attack(registry, policy, attacker, defender).is_ok() {
                orders.push(AttackOrder::new(attacker, defender));
            }
        }
    }

    orders
}
