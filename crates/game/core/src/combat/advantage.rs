//! Unit-type advantage.

use crate::state::UnitType;

/// Attack multiplier granted when the attacker's unit counters the defender's.
pub const UNIT_ADVANTAGE_MULTIPLIER: f64 = 1.2;

/// Returns true if `attacker` counters `defender`.
///
/// Missing unit types never grant an advantage.
pub fn has_unit_advantage(attacker: Option<UnitType>, defender: Option<UnitType>) -> bool {
    match (attacker, defender) {
        (Some(attacker), Some(defender)) => attacker.counters() == defender,
        _ => false,
    }
}

/// Attack multiplier for a unit matchup: 1.2 for a counter, otherwise 1.0.
pub fn unit_advantage_multiplier(attacker: Option<UnitType>, defender: Option<UnitType>) -> f64 {
    if has_unit_advantage(attacker, defender) {
        UNIT_ADVANTAGE_MULTIPLIER
    } else {
        1.0
    }
}
