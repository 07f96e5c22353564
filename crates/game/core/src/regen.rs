//! Energy (raid capacity) regeneration.
//!
//! Energy refills at a flat rate per elapsed wall-clock second and is stored
//! together with the time of its last update, so it can be brought up to date
//! lazily whenever a player is loaded.

use crate::config::RegenPolicy;
use crate::state::Timestamp;

/// Brings an energy meter up to date at `now`.
///
/// Returns the new `(capacity, last_update)` pair.
///
/// - If no time has elapsed (or the clock went backwards) the inputs are
///   returned unchanged, so calling twice with the same `now` is a no-op.
/// - The result is clamped to `[0, max_capacity]`; any elapsed time long
///   enough to overfill the meter yields exactly `max_capacity`.
pub fn regenerate(
    capacity: f64,
    max_capacity: f64,
    last_update: Timestamp,
    now: Timestamp,
    policy: &RegenPolicy,
) -> (f64, Timestamp) {
    let elapsed_secs = now.secs_since(last_update);
    if elapsed_secs <= 0.0 {
        return (capacity, last_update);
    }

    let rate = policy.rate_per_second.max(0.0);
    let refilled = capacity + elapsed_secs * rate;
    (refilled.clamp(0.0, max_capacity.max(0.0)), now)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: RegenPolicy = RegenPolicy::flat(1.0 / 3.0);

    #[test]
    fn refills_at_flat_rate() {
        let (capacity, stamp) = regenerate(
            10.0,
            100.0,
            Timestamp::from_secs(0),
            Timestamp::from_secs(60),
            &POLICY,
        );
        assert!((capacity - 30.0).abs() < 1e-9);
        assert_eq!(stamp, Timestamp::from_secs(60));
    }

    #[test]
    fn full_refill_takes_three_hundred_seconds() {
        let (capacity, _) = regenerate(
            0.0,
            100.0,
            Timestamp::EPOCH,
            Timestamp::from_secs(300),
            &POLICY,
        );
        assert!((capacity - 100.0).abs() < 1e-9);
        assert!(capacity <= 100.0);
    }

    #[test]
    fn no_elapsed_time_leaves_inputs_unchanged() {
        let last = Timestamp::from_secs(50);
        assert_eq!(regenerate(42.5, 100.0, last, last, &POLICY), (42.5, last));
        // Clock skew: `now` before the last update.
        assert_eq!(
            regenerate(42.5, 100.0, last, Timestamp::from_secs(40), &POLICY),
            (42.5, last)
        );
    }

    #[test]
    fn repeated_call_with_same_now_is_idempotent() {
        let now = Timestamp::from_secs(90);
        let first = regenerate(5.0, 100.0, Timestamp::from_secs(10), now, &POLICY);
        let second = regenerate(first.0, 100.0, first.1, now, &POLICY);
        assert_eq!(first, second);
    }

    #[test]
    fn ten_years_saturates_at_max() {
        let ten_years = Timestamp::from_secs(10 * 365 * 24 * 60 * 60);
        let (capacity, stamp) = regenerate(0.0, 100.0, Timestamp::EPOCH, ten_years, &POLICY);
        assert_eq!(capacity, 100.0);
        assert_eq!(stamp, ten_years);
    }
}
