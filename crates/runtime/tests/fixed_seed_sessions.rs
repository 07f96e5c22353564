mod common;

use std::collections::HashSet;
use std::path::Path;

use client_ledger_core::MockLedger;
use common::{ManualClock, id};
use raid_core::{PcgRng, RaidConfig, RngOracle, UnitTables, UnitType};
use raid_runtime::{
    FilePlayerRepository, PlayerRepository, RaidReport, RaidService, ServiceSettings,
};

type FileService = RaidService<FilePlayerRepository, MockLedger, ManualClock>;

/// One service per command, as the binary builds it.
fn session(dir: &Path, clock: &ManualClock) -> FileService {
    RaidService::new(
        FilePlayerRepository::new(dir).unwrap(),
        MockLedger::new(),
        clock.clone(),
        RaidConfig::default().with_fatigue(0, 0),
        UnitTables::default(),
        ServiceSettings {
            session_seed: Some(42),
            ..ServiceSettings::default()
        },
    )
}

fn play(dir: &Path, raids: usize) -> Vec<RaidReport> {
    let clock = ManualClock::default();
    session(dir, &clock)
        .register("alice", UnitType::Infantry, None)
        .unwrap();
    session(dir, &clock)
        .register("bob", UnitType::Archer, None)
        .unwrap();

    (0..raids)
        .map(|_| {
            clock.advance_secs(60);
            session(dir, &clock).raid(&id("alice"), &id("bob")).unwrap()
        })
        .collect()
}

#[test]
fn separate_commands_draw_fresh_rolls_under_a_fixed_seed() {
    let dir = tempfile::tempdir().unwrap();
    let reports = play(dir.path(), 3);

    let repo = FilePlayerRepository::new(dir.path()).unwrap();
    let alice = repo.load(&id("alice")).unwrap().unwrap();
    let bob = repo.load(&id("bob")).unwrap().unwrap();
    assert_ne!(alice.seed_key, bob.seed_key);
    assert_eq!(alice.raid_count, 3);
    assert_eq!(bob.raid_count, 0);

    let seeds: HashSet<u64> = reports.iter().map(|report| report.seed).collect();
    assert_eq!(seeds.len(), 3);

    let rolls: Vec<f64> = reports
        .iter()
        .map(|report| PcgRng.unit_interval(report.seed))
        .collect();
    assert_ne!(rolls[0], rolls[1]);
    assert_ne!(rolls[1], rolls[2]);
}

#[test]
fn fixed_seed_replays_the_same_raids_from_scratch() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    assert_eq!(play(first.path(), 3), play(second.path(), 3));
}
