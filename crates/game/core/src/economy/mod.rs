//! Economy around raids: the yield vault, fitness steps, wager escrow and
//! the paid quality-of-life actions.
//!
//! Everything here is pure. Charging a price for a paid action is the
//! caller's job and must happen before the returned state is committed.

mod escrow;
mod upgrades;
mod vault;

pub use escrow::{ESCROW_FEE_PERCENT, EscrowSettlement, MIN_DESTRUCTION_FOR_PAYOUT, settle_wager};
pub use upgrades::{refill_stamina, skip_cooldown, upgrade_defense};
pub use vault::{
    COMMAND_PER_YIELD, SECONDS_PER_DAY, STEPS_PER_COMMAND, Vault, YIELD_RATE_BPS,
};
