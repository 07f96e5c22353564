//! Win probability curve.

/// Steepness `k` of the logistic win curve.
pub const LOGISTIC_STEEPNESS: f64 = 0.1;

/// Probability that `attack` beats `defense`.
///
/// # Formula
///
/// ```text
/// p = 1 / (1 + e^(-k * (attack - defense)))    k = 0.1
/// ```
///
/// Exactly 0.5 at equal power, strictly increasing in `attack` and strictly
/// decreasing in `defense`. Negative inputs are accepted; the sigmoid keeps
/// the result inside `[0, 1]`.
pub fn win_probability(attack: f64, defense: f64) -> f64 {
    1.0 / (1.0 + (-LOGISTIC_STEEPNESS * (attack - defense)).exp())
}
