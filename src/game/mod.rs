//! The WAR game session.
//!
//! A session owns everything that changes during play:
//! - The map (`Registry`)
//! - The player's mission
//! - The dice
//! - The battle log
//!
//! Sessions are built with `WarGameBuilder` and driven one attack at a time.

mod session;

pub use session::{AttackReport, BattleRecord, WarGame, WarGameBuilder};
