//! Garrison troops: rosters, unit tables and training.
//!
//! Garrison capacity is a fixed ceiling consumed by trained units. It is a
//! separate resource from the regenerating energy meter on
//! [`crate::state::PlayerCombatState`].

mod roster;
mod tables;
mod train;

pub use roster::{TroopKind, TroopRoster};
pub use tables::{UnitProfile, UnitTables};
pub use train::{TrainError, can_train, total_damage, used_capacity};
