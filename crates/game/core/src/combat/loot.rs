//! Loot and destruction.

/// Loot won by a successful raid.
///
/// # Formula
///
/// ```text
/// gap        = max(0, attack - defense)
/// multiplier = log10(1 + gap / 10) + 1
/// loot       = floor(base_reward * multiplier)
/// ```
///
/// The multiplier is never below 1, so a zero or negative gap still pays
/// `base_reward`, and it grows logarithmically so huge power gaps cannot drain
/// the economy.
pub fn loot_amount(base_reward: u64, attack: f64, defense: f64) -> u64 {
    let gap = (attack - defense).max(0.0);
    let multiplier = (1.0 + gap / 10.0).log10() + 1.0;
    (base_reward as f64 * multiplier).floor() as u64
}

/// Share of the defender's base destroyed, in `[0, 100]`.
///
/// A failed raid destroys nothing. A successful one destroys the attacker's
/// share of the combined power: `100 * attack / (attack + defense)`.
pub fn destruction_percent(attack: f64, defense: f64, success: bool) -> f64 {
    if !success {
        return 0.0;
    }
    let attack = attack.max(0.0);
    let total = attack + defense.max(0.0);
    if total <= 0.0 {
        return 100.0;
    }
    (100.0 * attack / total).clamp(0.0, 100.0)
}
