//! File-based PlayerRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{PlayerId, PlayerRecord, PlayerRepository, RepositoryError, Result};

/// File-based implementation of [`PlayerRepository`].
///
/// Stores each player as `player_{id}.json`. Writes go to a temporary file
/// that is renamed over the old record, so a crash never leaves a torn
/// document behind.
pub struct FilePlayerRepository {
    base_dir: PathBuf,
}

impl FilePlayerRepository {
    /// Create a new file-based player repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a player file.
    fn player_path(&self, id: &PlayerId) -> PathBuf {
        self.base_dir.join(format!("player_{}.json", id))
    }

    fn read_record(path: &Path) -> Result<PlayerRecord> {
        let json = fs::read_to_string(path).map_err(RepositoryError::Io)?;
        serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl PlayerRepository for FilePlayerRepository {
    fn load(&self, id: &PlayerId) -> Result<Option<PlayerRecord>> {
        let path = self.player_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let record = Self::read_record(&path)?;
        if &record.id != id {
            return Err(RepositoryError::CorruptedData(format!(
                "{} holds player {}",
                path.display(),
                record.id
            )));
        }

        tracing::debug!("Loaded player {} from {}", id, path.display());

        Ok(Some(record))
    }

    fn save(&self, record: &PlayerRecord) -> Result<()> {
        let path = self.player_path(&record.id);
        let temp_path = path.with_extension("json.tmp");

        // Write to temp file
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved player {} to {}", record.id, path.display());

        Ok(())
    }

    fn list(&self) -> Result<Vec<PlayerRecord>> {
        let mut records = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && filename.starts_with("player_")
                && filename.ends_with(".json")
            {
                records.push(Self::read_record(&path)?);
            }
        }

        Ok(records)
    }

    fn exists(&self, id: &PlayerId) -> bool {
        self.player_path(id).exists()
    }
}
