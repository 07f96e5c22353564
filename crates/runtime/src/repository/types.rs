//! Persisted player types.

use std::fmt;

use client_ledger_core::AccountId;
use raid_core::{PlayerCombatState, TroopRoster, Vault};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityLog;

/// Stable player identifier: the lower-cased username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub const MAX_LEN: usize = 32;

    /// Derives the id for `username`, or `None` if the name is empty, too
    /// long, or contains anything besides ASCII letters, digits, `-` and `_`.
    pub fn from_username(username: &str) -> Option<Self> {
        let name = username.trim();
        let valid = !name.is_empty()
            && name.len() <= Self::MAX_LEN
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self(name.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything stored for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    /// Display name as registered.
    pub username: String,
    /// Ledger account charged for paid actions.
    pub wallet: AccountId,
    /// Per-player key mixed into raid seeds.
    pub seed_key: u64,
    /// Raids this player has launched; feeds the next raid seed.
    #[serde(default)]
    pub raid_count: u64,
    pub combat: PlayerCombatState,
    #[serde(default)]
    pub roster: TroopRoster,
    #[serde(default)]
    pub vault: Vault,
    #[serde(default)]
    pub activity: ActivityLog,
}
