//! Core game types: factions, territories, the map, orders, dice, configuration.
//!
//! These are the building blocks the rules operate on. Nothing here
//! decides whether an attack is legal or who wins a battle.

pub mod action;
pub mod config;
pub mod error;
pub mod faction;
pub mod registry;
pub mod rng;
pub mod territory;

pub use action::AttackOrder;
pub use config::{GameConfig, MissionChoice, SameOwnerPolicy};
pub use error::{Result, WarError};
pub use faction::{Faction, PLAYER_FACTION};
pub use registry::{Registry, TerritoryIds, MAP_SIZE};
pub use rng::{clock_seed, Dice, GameRng, ScriptedDice, DIE_FACES};
pub use territory::{Territory, TerritoryId};
