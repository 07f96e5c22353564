//! Win-count leaderboard.

use raid_core::UnitType;
use serde::{Deserialize, Serialize};

use crate::repository::PlayerRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub username: String,
    pub win_count: u32,
    pub defense_power: u32,
    pub unit_type: UnitType,
}

/// Ranks players by wins (descending), breaking ties by username, and keeps
/// the first `limit`.
pub fn rank_players(mut players: Vec<PlayerRecord>, limit: usize) -> Vec<LeaderboardEntry> {
    players.sort_by(|a, b| {
        b.combat
            .win_count
            .cmp(&a.combat.win_count)
            .then_with(|| a.username.cmp(&b.username))
    });

    players
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, player)| LeaderboardEntry {
            rank: index + 1,
            username: player.username,
            win_count: player.combat.win_count,
            defense_power: player.combat.defense_power,
            unit_type: player.combat.unit_type,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::PlayerId;
    use client_ledger_core::AccountId;
    use raid_core::{PlayerCombatState, StartingStats, Timestamp};

    fn record(name: &str, wins: u32) -> PlayerRecord {
        PlayerRecord {
            id: PlayerId::from_username(name).unwrap(),
            username: name.to_string(),
            wallet: AccountId::new(name),
            seed_key: 0,
            raid_count: 0,
            combat: PlayerCombatState::new(
                UnitType::Infantry,
                &StartingStats::default(),
                Timestamp::EPOCH,
            )
            .with_wins(wins),
            roster: Default::default(),
            vault: Default::default(),
            activity: Default::default(),
        }
    }

    #[test]
    fn sorts_by_wins_then_username() {
        let board = rank_players(
            vec![
                record("cara", 3),
                record("bjorn", 7),
                record("astrid", 3),
                record("dag", 0),
            ],
            10,
        );

        let order: Vec<_> = board.iter().map(|e| (e.rank, e.username.as_str())).collect();
        assert_eq!(order, [(1, "bjorn"), (2, "astrid"), (3, "cara"), (4, "dag")]);
    }

    #[test]
    fn limit_truncates() {
        let board = rank_players((0..8).map(|i| record(&format!("p{i}"), i)).collect(), 5);
        assert_eq!(board.len(), 5);
        assert_eq!(board[0].win_count, 7);
        assert!(rank_players(Vec::new(), 5).is_empty());
    }
}
