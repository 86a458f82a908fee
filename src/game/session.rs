//! Game session: the map, the mission, the dice, and the battle log.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{AttackOrder, Dice, Faction, GameConfig, GameRng, Registry, Result};
use crate::rules::{
    legal_attacks, mission_status, resolve_battle, validate_order, AttackPolicy, AttackRejection, BattleOutcome,
    Mission, MissionStatus,
};

/// One resolved battle in the session log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    /// 1-based battle number.
    pub turn: u32,
    pub order: AttackOrder,
    pub outcome: BattleOutcome,
}

/// Result of an accepted attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub outcome: BattleOutcome,
    /// The mission was fulfilled by this battle's result.
    pub mission_complete: bool,
}

/// Builder for creating a `WarGame`.
///
/// ## Example
///
/// ```
/// use rust_war::core::{GameConfig, ScriptedDice, TerritoryId};
/// use rust_war::game::WarGameBuilder;
/// use rust_war::rules::Mission;
///
/// let mut game = WarGameBuilder::new()
///     .config(GameConfig::new().with_seed(42))
///     .mission(Mission::ConquerCount { target: 2 })
///     .build_with_dice(ScriptedDice::new([6, 1]))
///     .unwrap();
///
/// // Brasil attacks Peru until it falls
/// let mut report = game.attack_numbered(1, 3).unwrap();
/// while !report.outcome.is_conquest() {
///     report = game.attack_numbered(1, 3).unwrap();
/// }
///
/// assert!(report.mission_complete);
/// assert_eq!(game.registry()[TerritoryId::new(2)].name, "Peru");
/// assert_eq!(game.history().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WarGameBuilder {
    config: GameConfig,
    registry: Option<Registry>,
    mission: Option<Mission>,
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a configuration instead of the defaults.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from this map instead of the configured one.
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Hand out this mission instead of assigning one.
    pub fn mission(mut self, mission: Mission) -> Self {
        self.mission = Some(mission);
        self
    }

    /// Build a game that rolls with the seeded `GameRng`.
    pub fn build(self) -> Result<WarGame<GameRng>> {
        let setup = self.prepare()?;
        let dice = setup.rng.clone();
        Ok(setup.into_game(dice))
    }

    /// Build a game that rolls with `dice`.
    ///
    /// The seeded RNG is still used to assign a random mission.
    pub fn build_with_dice<D: Dice>(self, dice: D) -> Result<WarGame<D>> {
        Ok(self.prepare()?.into_game(dice))
    }

    fn prepare(self) -> Result<Setup> {
        let WarGameBuilder {
            config,
            registry,
            mission,
        } = self;

        let registry = match registry {
            Some(registry) => registry,
            None => config.build_registry()?,
        };

        let seed = config.resolve_seed();
        let mut rng = GameRng::new(seed);

        let mission = match mission {
            Some(mission) => mission,
            None => {
                config.validate(&registry)?;
                Mission::assign(&config, &mut rng)
            }
        };
        let policy = AttackPolicy::from_config(&config);
        mission.check(&registry, &policy)?;

        info!(
            seed,
            player = %config.player_faction,
            territories = registry.len(),
            "game created"
        );

        Ok(Setup {
            config,
            policy,
            registry,
            mission,
            rng,
        })
    }
}

struct Setup {
    config: GameConfig,
    policy: AttackPolicy,
    registry: Registry,
    mission: Mission,
    rng: GameRng,
}

impl Setup {
    fn into_game<D: Dice>(self, dice: D) -> WarGame<D> {
        WarGame {
            policy: self.policy,
            seed: self.rng.seed(),
            config: self.config,
            registry: self.registry,
            mission: self.mission,
            dice,
            history: Vector::new(),
        }
    }
}

/// A single-player game in progress.
///
/// Owns the map and the dice. Every attack goes through the validator
/// before the dice are rolled, and the mission is checked after every
/// battle.
#[derive(Clone, Debug)]
pub struct WarGame<D = GameRng> {
    config: GameConfig,
    policy: AttackPolicy,
    registry: Registry,
    mission: Mission,
    dice: D,
    seed: u64,
    history: Vector<BattleRecord>,
}

impl<D: Dice> WarGame<D> {
    /// Get the game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The attack rules in force.
    pub fn policy(&self) -> &AttackPolicy {
        &self.policy
    }

    /// Current map.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The player's mission.
    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    /// The player's faction.
    pub fn player_faction(&self) -> &Faction {
        &self.policy.player_faction
    }

    /// Seed of the session RNG, for replaying a game.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Every battle fought so far, oldest first.
    pub fn history(&self) -> &Vector<BattleRecord> {
        &self.history
    }

    /// Number of battles fought.
    pub fn battles_fought(&self) -> usize {
        self.history.len()
    }

    /// Validate and fight one battle.
    ///
    /// A rejected attack leaves the game untouched.
    pub fn attack(&mut self, order: AttackOrder) -> std::result::Result<AttackReport, AttackRejection> {
        if let Err(rejection) = validate_order(&self.registry, &self.policy, order) {
            debug!(%order, %rejection, "attack rejected");
            return Err(rejection);
        }

        let outcome = resolve_battle(&mut self.registry, order.attacker, order.defender, &mut self.dice);

        self.history.push_back(BattleRecord {
            turn: self.history.len() as u32 + 1,
            order,
            outcome: outcome.clone(),
        });

        let mission_complete = self.is_mission_complete();
        if mission_complete {
            info!(battles = self.history.len(), mission = %self.mission, "mission complete");
        }

        Ok(AttackReport {
            outcome,
            mission_complete,
        })
    }

    /// Attack using the 1-based territory numbers shown on the map.
    pub fn attack_numbered(
        &mut self,
        attacker: usize,
        defender: usize,
    ) -> std::result::Result<AttackReport, AttackRejection> {
        let order = AttackOrder::from_one_based(attacker, defender).ok_or_else(|| {
            AttackRejection::InvalidIndex {
                number: if attacker == 0 { attacker } else { defender },
            }
        })?;
        self.attack(order)
    }

    /// Evaluate the mission with counts for display.
    pub fn mission_status(&self) -> MissionStatus {
        mission_status(&self.registry, &self.policy.player_faction, &self.mission)
    }

    /// Check whether the player has won.
    pub fn is_mission_complete(&self) -> bool {
        self.mission_status().complete
    }

    /// Every attack the player could make right now.
    pub fn legal_attacks(&self) -> Vec<AttackOrder> {
        legal_attacks(&self.registry, &self.policy)
    }

    /// No legal attack is left and the mission is still open.
    pub fn is_stalemated(&self) -> bool {
        !self.is_mission_complete() && self.legal_attacks().is_empty()
    }
}
