//! Raid service orchestrating the engine, repository, ledger and clock.
//!
//! The service is the only place where engine results are committed: every
//! operation loads the affected records, runs the pure raid-core function,
//! and saves the returned snapshots. Paid actions settle on the ledger
//! before anything is saved, so a failed payment leaves the records as
//! they were; a failed save refunds the payment.
mod economy;
mod raids;
mod wager;

use client_ledger_core::{AccountId, LedgerClient, TxReceipt};
use raid_core::{
    ClockOracle, EscrowSettlement, PlayerCombatState, RaidConfig, RaidOutcome, Timestamp, TroopRoster, UnitTables,
    UnitType, Vault, seed_key_for,
};

use crate::activity::ActivityLog;
use crate::clock::SystemClock;
use crate::error::{Result, RuntimeError};
use crate::leaderboard::{LeaderboardEntry, rank_players};
use crate::repository::{PlayerId, PlayerRecord, PlayerRepository};

/// Operational settings that are not game balance.
#[derive(Clone, Debug)]
pub struct ServiceSettings {
    /// Ledger account that receives payments for paid actions and deposits.
    pub treasury: AccountId,
    /// Fixed session seed for reproducible raids; random when `None`.
    ///
    /// Raid seeds also mix in the attacker's stored raid count and both
    /// players' seed keys, so a fixed seed still varies from raid to raid
    /// across processes.
    pub session_seed: Option<u64>,
    /// Entries kept in each player's activity log.
    pub activity_capacity: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            treasury: AccountId::new("treasury"),
            session_seed: None,
            activity_capacity: ActivityLog::DEFAULT_CAPACITY,
        }
    }
}

/// Result of a committed raid.
#[derive(Debug, Clone, PartialEq)]
pub struct RaidReport {
    pub attacker: PlayerId,
    pub defender: PlayerId,
    /// Seed the roll was drawn from; replaying with it reproduces the raid.
    pub seed: u64,
    pub outcome: RaidOutcome,
}

/// Result of a raid fought over an escrowed wager.
#[derive(Debug, Clone, PartialEq)]
pub struct WagerReport {
    pub raid: RaidReport,
    /// Transfer of the wager into the treasury.
    pub escrow: TxReceipt,
    pub settlement: EscrowSettlement,
    /// Payouts of the non-zero shares, attacker first.
    pub payouts: Vec<TxReceipt>,
}

pub struct RaidService<R, L, C = SystemClock> {
    repo: R,
    ledger: L,
    clock: C,
    config: RaidConfig,
    tables: UnitTables,
    settings: ServiceSettings,
    session_seed: u64,
}

impl<R, L, C> RaidService<R, L, C>
where
    R: PlayerRepository,
    L: LedgerClient,
    C: ClockOracle,
{
    pub fn new(
        repo: R,
        ledger: L,
        clock: C,
        config: RaidConfig,
        tables: UnitTables,
        settings: ServiceSettings,
    ) -> Self {
        let session_seed = settings.session_seed.unwrap_or_else(rand::random);
        tracing::debug!(session_seed, "raid service created");

        Self {
            repo,
            ledger,
            clock,
            config,
            tables,
            settings,
            session_seed,
        }
    }

    pub fn config(&self) -> &RaidConfig {
        &self.config
    }

    pub fn tables(&self) -> &UnitTables {
        &self.tables
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn session_seed(&self) -> u64 {
        self.session_seed
    }

    /// Registers a new player with the configured starting stats.
    ///
    /// The wallet defaults to an account named after the player id.
    pub fn register(
        &self,
        username: &str,
        unit_type: UnitType,
        wallet: Option<AccountId>,
    ) -> Result<PlayerRecord> {
        let id = PlayerId::from_username(username)
            .ok_or_else(|| RuntimeError::InvalidUsername(username.to_string()))?;
        if self.repo.exists(&id) {
            return Err(RuntimeError::PlayerExists(id));
        }

        let now = self.clock.now();
        let mut activity = ActivityLog::new(self.settings.activity_capacity);
        activity.push(now, format!("Joined the raid as {}", unit_type));

        let record = PlayerRecord {
            wallet: wallet.unwrap_or_else(|| AccountId::new(id.as_str())),
            seed_key: seed_key_for(id.as_str()),
            raid_count: 0,
            id,
            username: username.trim().to_string(),
            combat: PlayerCombatState::new(unit_type, &self.config.starting, now),
            roster: TroopRoster::default(),
            vault: Vault::new(now),
            activity,
        };
        self.repo.save(&record)?;

        tracing::info!(player = %record.id, unit = %unit_type, "player registered");
        Ok(record)
    }

    /// Loads a player with energy brought up to date. Nothing is saved.
    pub fn status(&self, id: &PlayerId) -> Result<PlayerRecord> {
        let mut record = self.load_player(id)?;
        record.combat = record.combat.regenerated(self.clock.now(), &self.config.regen);
        Ok(record)
    }

    /// Top `limit` players by wins, ties broken by username.
    pub fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        Ok(rank_players(self.repo.list()?, limit))
    }

    fn load_player(&self, id: &PlayerId) -> Result<PlayerRecord> {
        self.repo
            .load(id)?
            .ok_or_else(|| RuntimeError::PlayerNotFound(id.clone()))
    }

    fn now(&self) -> Timestamp {
        self.clock.now()
    }
}
