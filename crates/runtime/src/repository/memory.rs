//! In-memory player repository.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{PlayerId, PlayerRecord, PlayerRepository, RepositoryError, Result};

/// In-memory implementation of [`PlayerRepository`], used by tests and
/// short-lived sessions.
#[derive(Default)]
pub struct InMemoryPlayerRepo {
    players: RwLock<HashMap<PlayerId, PlayerRecord>>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerRepository for InMemoryPlayerRepo {
    fn load(&self, id: &PlayerId) -> Result<Option<PlayerRecord>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.get(id).cloned())
    }

    fn save(&self, record: &PlayerRecord) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<PlayerRecord>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.values().cloned().collect())
    }

    fn exists(&self, id: &PlayerId) -> bool {
        self.players
            .read()
            .map(|players| players.contains_key(id))
            .unwrap_or(false)
    }
}
