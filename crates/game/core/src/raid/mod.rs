//! Raid resolution.
//!
//! One raid attempt runs four strictly sequential stages:
//!
//! ```text
//! eligibility ──▶ power ──▶ roll ──▶ apply outcome
//! (cooldown,      (wins or   (logistic  (loot, streak,
//!  energy)         roster)    odds)      fatigue)
//! ```
//!
//! Eligibility failures return before anything is computed, so a failed raid
//! never hands back modified snapshots.

mod errors;
mod outcome;
mod resolver;

pub use errors::RaidError;
pub use outcome::{RaidOdds, RaidOutcome, RaidRequest};
pub use resolver::{
    BASE_ATTACK_POWER, POWER_PER_WIN, attack_base_power, raid_odds, resolve_raid,
};
