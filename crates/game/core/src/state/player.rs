use crate::config::{RegenPolicy, StartingStats};
use crate::regen::regenerate;

use super::{Timestamp, UnitType};

/// Snapshot of one player's raid-relevant numbers.
///
/// Used for both sides of a raid. `capacity` here is the regenerating
/// **energy** meter that gates raids; garrison space for trained troops is
/// tracked separately by [`crate::troops::TroopRoster`].
///
/// Invariants maintained by every engine operation:
/// - `0 <= capacity <= max_capacity`
/// - `balance` never underflows (losses saturate at zero)
/// - `win_count` and `streak` are only changed by raid resolution
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerCombatState {
    pub win_count: u32,
    pub defense_power: u32,
    pub unit_type: UnitType,
    pub capacity: f64,
    pub max_capacity: f64,
    pub last_capacity_update: Timestamp,
    pub balance: u64,
    pub streak: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown_until: Option<Timestamp>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_raid_time: Option<Timestamp>,
}

impl PlayerCombatState {
    /// Creates a player with the configured starting values.
    pub fn new(unit_type: UnitType, starting: &StartingStats, now: Timestamp) -> Self {
        let max_capacity = starting.max_capacity.max(0.0);
        Self {
            win_count: 0,
            defense_power: starting.defense_power,
            unit_type,
            capacity: starting.capacity.clamp(0.0, max_capacity),
            max_capacity,
            last_capacity_update: now,
            balance: starting.balance,
            streak: 0,
            cooldown_until: None,
            last_raid_time: None,
        }
    }

    pub fn with_wins(mut self, win_count: u32) -> Self {
        self.win_count = win_count;
        self
    }

    pub fn with_defense(mut self, defense_power: u32) -> Self {
        self.defense_power = defense_power;
        self
    }

    /// Sets the energy meter, clamped to `[0, max_capacity]`.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity.clamp(0.0, self.max_capacity);
        self
    }

    pub fn with_balance(mut self, balance: u64) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_streak(mut self, streak: u32) -> Self {
        self.streak = streak;
        self
    }

    pub fn with_cooldown_until(mut self, until: Timestamp) -> Self {
        self.cooldown_until = Some(until);
        self
    }

    /// Returns true while a fatigue cooldown is still running at `now`.
    pub fn is_on_cooldown(&self, now: Timestamp) -> bool {
        self.cooldown_until.is_some_and(|until| until > now)
    }

    /// Returns a copy with energy brought up to date at `now`.
    #[must_use]
    pub fn regenerated(&self, now: Timestamp, policy: &RegenPolicy) -> Self {
        let (capacity, last_capacity_update) = regenerate(
            self.capacity,
            self.max_capacity,
            self.last_capacity_update,
            now,
            policy,
        );
        Self {
            capacity,
            last_capacity_update,
            ..self.clone()
        }
    }
}
