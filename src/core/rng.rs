//! Deterministic dice for battle resolution.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Replaceable**: Combat only sees the `Dice` trait, so tests can
//!   script exact rolls with `ScriptedDice`
//! - **Replayable**: The seed is kept so a game can be replayed with `--seed`
//!
//! ## Usage
//!
//! ```
//! use rust_war::core::{Dice, GameRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same rolls
//! assert_eq!(rng1.roll_d6(), rng2.roll_d6());
//!
//! let roll = rng1.roll_d6();
//! assert!((1..=6).contains(&roll));
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on a battle die.
pub const DIE_FACES: u8 = 6;

/// Source of six-sided die rolls.
///
/// Every roll must be in `1..=DIE_FACES`.
pub trait Dice {
    /// Roll one six-sided die.
    fn roll_d6(&mut self) -> u8;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll_d6(&mut self) -> u8 {
        (**self).roll_d6()
    }
}

/// Seeded game RNG.
///
/// Uses ChaCha8 for speed while keeping a well distributed sequence.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl Dice for GameRng {
    fn roll_d6(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Seed derived from the current time, for games started without `--seed`.
#[must_use]
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
        .unwrap_or(0)
}

/// Dice that replay a fixed sequence of rolls, wrapping around at the end.
///
/// ```
/// use rust_war::core::{Dice, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 3]);
/// assert_eq!(dice.roll_d6(), 6);
/// assert_eq!(dice.roll_d6(), 3);
/// assert_eq!(dice.roll_d6(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create scripted dice from a non-empty roll sequence.
    ///
    /// ## Panics
    ///
    /// Panics if `rolls` is empty or any roll is outside `1..=6`. Scripts
    /// are written by hand in tests, so a bad one is a bug in the test.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: Vec<u8> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "Scripted dice need at least one roll");
        assert!(
            rolls.iter().all(|r| (1..=DIE_FACES).contains(r)),
            "Scripted rolls must be between 1 and 6"
        );
        Self { rolls, cursor: 0 }
    }

    /// Number of rolls made so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl Dice for ScriptedDice {
    fn roll_d6(&mut self) -> u8 {
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}
