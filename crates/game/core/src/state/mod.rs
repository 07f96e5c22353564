//! Caller-owned player snapshots.
//!
//! The engine holds no state between calls. Snapshots are loaded by the
//! caller, passed in by reference, and replaced by the fresh copies returned
//! from each operation.
mod player;
mod time;
mod unit;

pub use player::PlayerCombatState;
pub use time::Timestamp;
pub use unit::{UnitParseError, UnitType};
