/// Wall-clock instant in milliseconds since the Unix epoch.
///
/// The engine never reads the clock itself; timestamps always come from the
/// caller (see [`crate::env::ClockOracle`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Signed seconds elapsed from `earlier` to `self`.
    ///
    /// Negative when `earlier` is in the future (clock skew).
    pub fn secs_since(self, earlier: Timestamp) -> f64 {
        (self.0 as f64 - earlier.0 as f64) / 1000.0
    }

    /// Whole milliseconds from `earlier` to `self`, or 0 if `earlier` is later.
    pub const fn millis_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    #[must_use]
    pub const fn plus_secs(self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs.saturating_mul(1000)))
    }
}

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secs_since_is_signed() {
        let a = Timestamp::from_secs(10);
        let b = Timestamp::from_millis(12_500);
        assert_eq!(b.secs_since(a), 2.5);
        assert_eq!(a.secs_since(b), -2.5);
        assert_eq!(a.millis_since(b), 0);
    }

    #[test]
    fn plus_secs_saturates() {
        let t = Timestamp(u64::MAX - 1);
        assert_eq!(t.plus_secs(10), Timestamp(u64::MAX));
    }
}
