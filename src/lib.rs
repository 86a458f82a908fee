//! # rust-war
//!
//! Rules engine for a turn-based territory conquest game in the style of WAR.
//!
//! ## Rules
//!
//! 1. **Battles**: The attacker and the defender each roll one die. Ties go
//!    to the attacker. A lost battle costs the defender one troop.
//!
//! 2. **Conquest**: A territory whose last troop falls changes color and is
//!    occupied by one troop moved out of the attacking territory.
//!
//! 3. **Missions**: The player is secretly handed one mission at the start,
//!    either wiping out a faction or holding a number of territories.
//!
//! ## Modules
//!
//! - `core`: Factions, territories, the map, orders, dice, configuration
//! - `rules`: Attack validation, battle resolution, mission checks
//! - `game`: Game session tying the rules to one map and one set of dice

pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    AttackOrder, Dice, Faction, GameConfig, GameRng, MissionChoice, Registry, Result, SameOwnerPolicy,
    ScriptedDice, Territory, TerritoryId, WarError, MAP_SIZE,
};

pub use crate::rules::{
    apply_rolls, is_mission_complete, legal_attacks, mission_status, resolve_battle, validate_attack,
    AttackPolicy, AttackRejection, BattleOutcome, Conquest, Mission, MissionProgress, MissionStatus,
};

pub use crate::game::{AttackReport, BattleRecord, WarGame, WarGameBuilder};
