use crate::state::PlayerCombatState;

/// Ends a running fatigue cooldown and clears the win streak.
#[must_use]
pub fn skip_cooldown(state: &PlayerCombatState) -> PlayerCombatState {
    PlayerCombatState {
        cooldown_until: None,
        streak: 0,
        ..state.clone()
    }
}

/// Fills the energy meter to its maximum.
///
/// The regeneration clock is left alone; a full meter cannot overfill.
#[must_use]
pub fn refill_stamina(state: &PlayerCombatState) -> PlayerCombatState {
    PlayerCombatState {
        capacity: state.max_capacity,
        ..state.clone()
    }
}

/// Raises defense power by `amount`, saturating at `u32::MAX`.
#[must_use]
pub fn upgrade_defense(state: &PlayerCombatState, amount: u32) -> PlayerCombatState {
    PlayerCombatState {
        defense_power: state.defense_power.saturating_add(amount),
        ..state.clone()
    }
}
