//! Wall-clock adapter.

use raid_core::{ClockOracle, Timestamp};

/// [`ClockOracle`] backed by the system clock.
///
/// Times before the Unix epoch are reported as the epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockOracle for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = chrono::Utc::now().timestamp_millis();
        Timestamp::from_millis(u64::try_from(millis).unwrap_or(0))
    }
}
