//! Repository contract for saving and loading player records.

use super::{PlayerId, PlayerRecord, Result};

/// Storage for player records keyed by [`PlayerId`].
///
/// `save` replaces the whole record. There is no cross-record transaction:
/// two raids that touch the same defender concurrently are last-write-wins.
pub trait PlayerRepository: Send + Sync {
    /// Load a player record, or `None` if no record is stored under `id`.
    fn load(&self, id: &PlayerId) -> Result<Option<PlayerRecord>>;

    /// Insert or replace a player record.
    fn save(&self, record: &PlayerRecord) -> Result<()>;

    /// Every stored record, in unspecified order.
    fn list(&self) -> Result<Vec<PlayerRecord>>;

    /// Check if a record exists.
    fn exists(&self, id: &PlayerId) -> bool;

    /// Save several records one after another.
    fn save_all(&self, records: &[&PlayerRecord]) -> Result<()> {
        for record in records {
            self.save(record)?;
        }
        Ok(())
    }
}
