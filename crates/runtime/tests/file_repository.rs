use client_ledger_core::AccountId;
use raid_core::{PlayerCombatState, StartingStats, Timestamp, TroopRoster, UnitType, Vault};
use raid_runtime::{
    ActivityLog, FilePlayerRepository, PlayerId, PlayerRecord, PlayerRepository, RepositoryError,
};

fn record(name: &str) -> PlayerRecord {
    let mut activity = ActivityLog::new(10);
    activity.push(Timestamp::from_secs(5), "Joined");
    PlayerRecord {
        id: PlayerId::from_username(name).unwrap(),
        username: name.to_string(),
        wallet: AccountId::new(format!("wallet-{name}")),
        seed_key: 7,
        raid_count: 3,
        combat: PlayerCombatState::new(
            UnitType::Archer,
            &StartingStats::default(),
            Timestamp::from_secs(5),
        )
        .with_cooldown_until(Timestamp::from_secs(15)),
        roster: TroopRoster::new(2, 1, 0),
        vault: Vault::new(Timestamp::from_secs(5)),
        activity,
    }
}

#[test]
fn saved_records_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let original = record("Freydis");

    {
        let repo = FilePlayerRepository::new(dir.path()).unwrap();
        repo.save(&original).unwrap();
    }

    let repo = FilePlayerRepository::new(dir.path()).unwrap();
    assert!(repo.exists(&original.id));
    assert_eq!(repo.load(&original.id).unwrap(), Some(original));
}

#[test]
fn missing_player_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FilePlayerRepository::new(dir.path()).unwrap();
    let ghost = PlayerId::from_username("ghost").unwrap();

    assert!(!repo.exists(&ghost));
    assert_eq!(repo.load(&ghost).unwrap(), None);
}

#[test]
fn list_ignores_unrelated_files() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FilePlayerRepository::new(dir.path()).unwrap();
    repo.save(&record("leif")).unwrap();
    repo.save(&record("thorfinn")).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a player").unwrap();

    let mut names: Vec<_> = repo.list().unwrap().into_iter().map(|r| r.username).collect();
    names.sort();
    assert_eq!(names, ["leif", "thorfinn"]);
}

#[test]
fn save_replaces_previous_record() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FilePlayerRepository::new(dir.path()).unwrap();
    let mut player = record("gudrid");
    repo.save(&player).unwrap();

    player.combat = player.combat.with_wins(3);
    repo.save(&player).unwrap();

    assert_eq!(repo.load(&player.id).unwrap().unwrap().combat.win_count, 3);
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn corrupted_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FilePlayerRepository::new(dir.path()).unwrap();
    std::fs::write(dir.path().join("player_broken.json"), "{ not json").unwrap();

    let broken = PlayerId::from_username("broken").unwrap();
    assert!(matches!(repo.load(&broken), Err(RepositoryError::Json(_))));
}
