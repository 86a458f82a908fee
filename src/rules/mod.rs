//! Game rules: who may attack, how battles resolve, when the player wins.
//!
//! - `validator`: legality checks run before every battle
//! - `combat`: dice battles and conquest
//! - `mission`: mission assignment and completion checks
//!
//! Rules are free functions over a `Registry`. They own no state; the
//! game session owns the map and the dice and passes them in.

pub mod combat;
pub mod mission;
pub mod validator;

pub use combat::{apply_rolls, resolve_battle, BattleOutcome, Conquest, CONQUEST_GARRISON};
pub use mission::{is_mission_complete, mission_status, Mission, MissionProgress, MissionStatus};
pub use validator::{
    legal_attacks, validate_attack, validate_order, AttackPolicy, AttackRejection, MIN_ATTACKING_TROOPS,
};
