use crate::state::Timestamp;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Daily yield rate on the deposited principal, in basis points.
pub const YIELD_RATE_BPS: u64 = 5;

/// Command tokens credited per unit of claimed yield.
pub const COMMAND_PER_YIELD: u64 = 10;

/// Walked steps needed for one command token.
pub const STEPS_PER_COMMAND: u64 = 1_000;

const BPS_DENOMINATOR: u128 = 10_000;

/// A player's staked principal and the command tokens it has produced.
///
/// Yield accrues per whole day since `last_yield_time`. Partial days are
/// carried over to the next claim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Vault {
    pub principal: u64,
    pub command_balance: u64,
    pub last_yield_time: Timestamp,
    pub total_steps: u64,
}

impl Vault {
    pub fn new(now: Timestamp) -> Self {
        Self {
            last_yield_time: now,
            ..Self::default()
        }
    }

    fn whole_days(&self, now: Timestamp) -> u64 {
        now.millis_since(self.last_yield_time) / (SECONDS_PER_DAY * 1000)
    }

    /// Yield accrued since the last claim, before conversion to command
    /// tokens.
    pub fn pending_yield(&self, now: Timestamp) -> u64 {
        let days = u128::from(self.whole_days(now));
        let accrued = u128::from(self.principal) * u128::from(YIELD_RATE_BPS) * days
            / BPS_DENOMINATOR;
        u64::try_from(accrued).unwrap_or(u64::MAX)
    }

    /// Converts pending yield into command tokens.
    ///
    /// Returns the number of command tokens credited. The yield clock moves
    /// forward by the whole days that were paid out.
    pub fn claim_yield(&mut self, now: Timestamp) -> u64 {
        let days = self.whole_days(now);
        if days == 0 {
            return 0;
        }

        let credited = self.pending_yield(now).saturating_mul(COMMAND_PER_YIELD);
        self.command_balance = self.command_balance.saturating_add(credited);
        self.last_yield_time = self
            .last_yield_time
            .plus_secs(days.saturating_mul(SECONDS_PER_DAY));
        credited
    }

    /// Adds to the principal after settling what the old principal earned.
    ///
    /// Returns the command tokens credited by the implicit claim.
    pub fn deposit(&mut self, amount: u64, now: Timestamp) -> u64 {
        let credited = if self.principal == 0 {
            self.last_yield_time = now;
            0
        } else {
            self.claim_yield(now)
        };
        self.principal = self.principal.saturating_add(amount);
        credited
    }

    /// Records walked steps and credits one command token per full
    /// [`STEPS_PER_COMMAND`] in this batch.
    pub fn record_steps(&mut self, steps: u64) -> u64 {
        self.total_steps = self.total_steps.saturating_add(steps);
        let credited = steps / STEPS_PER_COMMAND;
        self.command_balance = self.command_balance.saturating_add(credited);
        credited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u64) -> Timestamp {
        Timestamp::from_secs(n * SECONDS_PER_DAY)
    }

    #[test]
    fn yield_accrues_per_whole_day() {
        let mut vault = Vault::new(Timestamp::EPOCH);
        vault.deposit(100_000, Timestamp::EPOCH);

        assert_eq!(vault.pending_yield(day(1)), 50);
        assert_eq!(vault.pending_yield(Timestamp::from_secs(SECONDS_PER_DAY - 1)), 0);
        assert_eq!(vault.pending_yield(day(3)), 150);
    }

    #[test]
    fn claim_credits_command_tokens_and_keeps_partial_day() {
        let mut vault = Vault::new(Timestamp::EPOCH);
        vault.deposit(100_000, Timestamp::EPOCH);

        let now = day(2).plus_secs(3_600);
        assert_eq!(vault.claim_yield(now), 1_000);
        assert_eq!(vault.command_balance, 1_000);
        assert_eq!(vault.last_yield_time, day(2));

        // Nothing left until another full day passes.
        assert_eq!(vault.claim_yield(now), 0);
        assert_eq!(vault.command_balance, 1_000);
    }

    #[test]
    fn deposit_claims_before_growing_principal() {
        let mut vault = Vault::new(Timestamp::EPOCH);
        vault.deposit(100_000, Timestamp::EPOCH);

        let credited = vault.deposit(100_000, day(1));
        assert_eq!(credited, 500);
        assert_eq!(vault.principal, 200_000);
        assert_eq!(vault.pending_yield(day(2)), 100);
    }

    #[test]
    fn first_deposit_starts_the_yield_clock() {
        let mut vault = Vault::new(Timestamp::EPOCH);
        assert_eq!(vault.deposit(100_000, day(10)), 0);
        assert_eq!(vault.pending_yield(day(10)), 0);
        assert_eq!(vault.pending_yield(day(11)), 50);
    }

    #[test]
    fn steps_convert_per_thousand() {
        let mut vault = Vault::default();
        assert_eq!(vault.record_steps(2_500), 2);
        assert_eq!(vault.record_steps(999), 0);
        assert_eq!(vault.total_steps, 3_499);
        assert_eq!(vault.command_balance, 2);
    }
}
