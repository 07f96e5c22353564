//! Combat math.
//!
//! Pure functions turning attack and defense numbers into win odds, unit
//! advantage and loot. None of them can fail: any finite input produces a
//! well-defined result.
//!
//! # Core Functions
//!
//! - `win_probability`: logistic curve over the power gap
//! - `unit_advantage_multiplier`: rock-paper-scissors bonus
//! - `loot_amount`: logarithmic loot scaling
//! - `destruction_percent`: attacker's share of total power after a win

pub mod advantage;
pub mod loot;
pub mod probability;

pub use advantage::{UNIT_ADVANTAGE_MULTIPLIER, has_unit_advantage, unit_advantage_multiplier};
pub use loot::{destruction_percent, loot_amount};
pub use probability::{LOGISTIC_STEEPNESS, win_probability};
