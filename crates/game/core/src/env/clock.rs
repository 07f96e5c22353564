use crate::state::Timestamp;

/// Source of the current time.
///
/// Production callers wrap the system clock; tests pin time with
/// [`FixedClock`].
pub trait ClockOracle: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Clock frozen at a single instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    pub const fn at_secs(secs: u64) -> Self {
        Self(Timestamp::from_secs(secs))
    }
}

impl ClockOracle for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_advances() {
        let clock = FixedClock::at_secs(90);
        assert_eq!(clock.now(), Timestamp::from_secs(90));
        assert_eq!(clock.now(), clock.now());
    }
}
