#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use client_ledger_core::{AccountId, MockLedger};
use raid_core::{ClockOracle, RaidConfig, Timestamp, UnitTables};
use raid_runtime::{
    InMemoryPlayerRepo, PlayerId, PlayerRepository, RaidService, ServiceSettings,
};

/// Clock the test moves by hand. Clones share the same time.
#[derive(Clone, Default)]
pub struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    pub fn advance_secs(&self, secs: u64) {
        self.0.fetch_add(secs * 1000, Ordering::SeqCst);
    }
}

impl ClockOracle for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.0.load(Ordering::SeqCst))
    }
}

pub type TestService = RaidService<InMemoryPlayerRepo, MockLedger, ManualClock>;

pub struct Harness {
    pub service: TestService,
    pub ledger: MockLedger,
    pub clock: ManualClock,
}

pub fn treasury() -> AccountId {
    AccountId::new("treasury")
}

pub fn harness() -> Harness {
    harness_with(RaidConfig::default())
}

pub fn harness_with(config: RaidConfig) -> Harness {
    let ledger = MockLedger::new().with_account("treasury", 0);
    let clock = ManualClock::default();
    let settings = ServiceSettings {
        session_seed: Some(42),
        ..ServiceSettings::default()
    };
    let service = RaidService::new(
        InMemoryPlayerRepo::new(),
        ledger.clone(),
        clock.clone(),
        config,
        UnitTables::default(),
        settings,
    );
    Harness {
        service,
        ledger,
        clock,
    }
}

pub fn id(name: &str) -> PlayerId {
    PlayerId::from_username(name).unwrap()
}

/// Overwrites stored combat numbers for a player.
pub fn set_combat(service: &TestService, name: &str, wins: u32, defense: u32) {
    let repo = service.repository();
    let mut record = repo.load(&id(name)).unwrap().unwrap();
    record.combat = record.combat.with_wins(wins).with_defense(defense);
    repo.save(&record).unwrap();
}
