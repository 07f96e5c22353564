//! Raid resolution pipeline.

use crate::combat::{
    destruction_percent, has_unit_advantage, loot_amount, unit_advantage_multiplier,
    win_probability,
};
use crate::config::RaidConfig;
use crate::env::{RngOracle, TablesOracle};
use crate::state::PlayerCombatState;
use crate::troops::{TroopRoster, total_damage};

use super::{RaidError, RaidOdds, RaidOutcome, RaidRequest};

/// Attack power of a player with no wins and no roster.
pub const BASE_ATTACK_POWER: f64 = 100.0;

/// Attack power gained per historical win.
pub const POWER_PER_WIN: f64 = 5.0;

/// Attack power before the unit multiplier.
///
/// A non-empty roster contributes its total damage; otherwise power comes
/// from the win record: `win_count * 5 + 100`.
pub fn attack_base_power(
    attacker: &PlayerCombatState,
    roster: Option<&TroopRoster>,
    tables: &(impl TablesOracle + ?Sized),
) -> f64 {
    match roster {
        Some(roster) if !roster.is_empty() => f64::from(total_damage(roster, tables)),
        _ => f64::from(attacker.win_count) * POWER_PER_WIN + BASE_ATTACK_POWER,
    }
}

/// Attack power, defense power and win probability for a matchup.
///
/// Pure preview: no eligibility checks and no roll.
pub fn raid_odds(
    attacker: &PlayerCombatState,
    defender: &PlayerCombatState,
    roster: Option<&TroopRoster>,
    tables: &(impl TablesOracle + ?Sized),
) -> RaidOdds {
    let attacker_unit = Some(attacker.unit_type);
    let defender_unit = Some(defender.unit_type);
    let attack_power = attack_base_power(attacker, roster, tables)
        * unit_advantage_multiplier(attacker_unit, defender_unit);
    let defense_power = f64::from(defender.defense_power);

    RaidOdds {
        attack_power,
        defense_power,
        win_probability: win_probability(attack_power, defense_power),
        unit_advantage_applied: has_unit_advantage(attacker_unit, defender_unit),
    }
}

/// Resolves one raid attempt.
///
/// # Stages
///
/// 1. **Eligibility**: reject if the attacker is on cooldown, regenerate
///    energy to `request.now`, reject if energy is below `raid_cost`, then
///    deduct the cost.
/// 2. **Power**: attacker base power times the unit multiplier against the
///    defender's `defense_power`.
/// 3. **Roll**: one uniform draw from `rng`; the raid succeeds if it is below
///    the win probability.
/// 4. **Apply**: on success the attacker gains a win, streak and loot, and the
///    defender loses loot (saturating) and `defense_penalty`. On failure the
///    streak resets and the loss penalty is drained from energy. Reaching the
///    fatigue threshold starts a cooldown and resets the streak.
///
/// # Errors
///
/// [`RaidError::OnCooldown`] and [`RaidError::InsufficientStamina`]. Inputs
/// are borrowed immutably, so an error leaves the caller's snapshots as they
/// were.
pub fn resolve_raid(
    attacker: &PlayerCombatState,
    defender: &PlayerCombatState,
    request: &RaidRequest,
    config: &RaidConfig,
    tables: &(impl TablesOracle + ?Sized),
    rng: &(impl RngOracle + ?Sized),
) -> Result<RaidOutcome, RaidError> {
    let now = request.now;

    // 1. Eligibility
    if let Some(until) = attacker.cooldown_until
        && until > now
    {
        return Err(RaidError::OnCooldown { until, now });
    }

    let mut next_attacker = attacker.regenerated(now, &config.regen);
    next_attacker.cooldown_until = None;
    if next_attacker.capacity < config.raid_cost {
        return Err(RaidError::InsufficientStamina {
            required: config.raid_cost,
            available: next_attacker.capacity,
        });
    }
    next_attacker.capacity = (next_attacker.capacity - config.raid_cost).max(0.0);

    // 2. Power
    let RaidOdds {
        attack_power,
        defense_power,
        win_probability,
        unit_advantage_applied,
    } = raid_odds(attacker, defender, request.roster.as_ref(), tables);

    // 3. Roll
    let roll = rng.unit_interval(request.seed);
    let success = roll < win_probability;

    // 4. Outcome
    let mut next_defender = defender.clone();
    let mut loot = 0;

    if success {
        next_attacker.win_count = next_attacker.win_count.saturating_add(1);
        next_attacker.streak = next_attacker.streak.saturating_add(1);

        loot = loot_amount(config.base_reward, attack_power, defense_power);
        next_attacker.balance = next_attacker.balance.saturating_add(loot);
        next_defender.balance = next_defender.balance.saturating_sub(loot);
        next_defender.defense_power = next_defender
            .defense_power
            .saturating_sub(config.defense_penalty);
        next_defender.last_raid_time = Some(now);
    } else {
        next_attacker.streak = 0;
        next_attacker.capacity =
            (next_attacker.capacity - config.loss_stamina_penalty.max(0.0)).max(0.0);
    }

    let fatigue_triggered =
        config.fatigue_threshold > 0 && next_attacker.streak >= config.fatigue_threshold;
    if fatigue_triggered {
        next_attacker.cooldown_until = Some(now.plus_secs(config.cooldown_secs));
        next_attacker.streak = 0;
    }

    Ok(RaidOutcome {
        success,
        win_probability,
        unit_advantage_applied,
        destruction_percent: destruction_percent(attack_power, defense_power, success),
        loot_amount: loot,
        updated_attacker: next_attacker,
        updated_defender: next_defender,
        attack_power,
        defense_power,
        roll,
        fatigue_triggered,
    })
}
