use crate::state::{PlayerCombatState, Timestamp};
use crate::troops::TroopRoster;

/// Per-call raid inputs that are not part of either player snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaidRequest {
    /// Current time, used for cooldown checks, regeneration and stamps.
    pub now: Timestamp,
    /// Seed handed to the RNG oracle for the win roll.
    pub seed: u64,
    /// Attacker's garrison. A non-empty roster replaces the win-based power.
    pub roster: Option<TroopRoster>,
}

impl RaidRequest {
    pub const fn new(now: Timestamp, seed: u64) -> Self {
        Self {
            now,
            seed,
            roster: None,
        }
    }

    pub fn with_roster(mut self, roster: TroopRoster) -> Self {
        self.roster = Some(roster);
        self
    }
}

/// Result of a resolved raid.
///
/// The updated snapshots are fresh values; the caller decides whether and
/// where to persist them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaidOutcome {
    pub success: bool,
    pub win_probability: f64,
    pub unit_advantage_applied: bool,
    pub destruction_percent: f64,
    pub loot_amount: u64,
    pub updated_attacker: PlayerCombatState,
    pub updated_defender: PlayerCombatState,

    /// Attack power after the unit multiplier.
    pub attack_power: f64,
    pub defense_power: f64,
    /// The uniform roll compared against `win_probability`.
    pub roll: f64,
    /// True when this raid pushed the streak over the fatigue threshold.
    pub fatigue_triggered: bool,
}

/// Pre-roll odds of a raid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaidOdds {
    /// Attack power after the unit multiplier.
    pub attack_power: f64,
    pub defense_power: f64,
    pub win_probability: f64,
    pub unit_advantage_applied: bool,
}
