use thiserror::Error;

use super::faction::Faction;

/// Setup and configuration failures.
///
/// These are fatal: a game cannot start until they are fixed.
#[derive(Error, Debug)]
pub enum WarError {
    #[error("Map has no territories")]
    EmptyMap,

    #[error("Map must have exactly {expected} territories, got {actual}")]
    MapSize { expected: usize, actual: usize },

    #[error("Territory {name} starts without troops")]
    EmptyGarrison { name: String },

    #[error("Mission target of {target} territories is outside 1..={max}")]
    InvalidMissionTarget { target: u32, max: usize },

    #[error("The {target} army cannot be eliminated: it holds no territory or is the player's own")]
    InvalidEliminateTarget { target: Faction },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, WarError>;
