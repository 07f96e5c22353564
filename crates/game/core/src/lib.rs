//! Deterministic raid and economy rules for Yield Raiders.
//!
//! `raid-core` holds the canonical game math (win curves, unit advantage,
//! loot scaling, energy regeneration, garrison training) and the raid
//! resolver that stitches them together. Every operation is a pure function
//! of its inputs: the caller supplies player snapshots, the current
//! [`Timestamp`], and an [`RngOracle`], and receives fresh snapshots back to
//! persist however it likes.
pub mod combat;
pub mod config;
pub mod economy;
pub mod env;
pub mod error;
pub mod raid;
pub mod regen;
pub mod state;
pub mod troops;

pub use combat::{
    destruction_percent, has_unit_advantage, loot_amount, unit_advantage_multiplier,
    win_probability,
};
pub use config::{PriceList, RaidConfig, RegenPolicy, StartingStats};
pub use economy::{
    EscrowSettlement, Vault, refill_stamina, settle_wager, skip_cooldown, upgrade_defense,
};
pub use env::{
    ClockOracle, FixedClock, FixedRoll, PcgRng, RngOracle, TablesOracle, derive_seed, seed_key_for,
};
pub use error::{ErrorSeverity, GameError};
pub use raid::{
    RaidError, RaidOdds, RaidOutcome, RaidRequest, attack_base_power, raid_odds, resolve_raid,
};
pub use regen::regenerate;
pub use state::{PlayerCombatState, Timestamp, UnitParseError, UnitType};
pub use troops::{TrainError, TroopKind, TroopRoster, UnitProfile, UnitTables, can_train};
