//! Content factory for loading balance data from a directory.

use std::path::{Path, PathBuf};

use raid_core::{RaidConfig, UnitTables};

use crate::loaders::{ConfigLoader, LoadResult, TablesLoader};

/// Content factory that loads all balance content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── tables.ron
/// ```
///
/// A missing file falls back to the built-in defaults; a present but
/// malformed file is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const TABLES_FILE: &'static str = "tables.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load raid configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<RaidConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(RaidConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load troop tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<UnitTables> {
        let path = self.data_dir.join(Self::TABLES_FILE);
        if !path.exists() {
            return Ok(UnitTables::default());
        }
        TablesLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn empty_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), RaidConfig::default());
        assert_eq!(factory.load_tables().unwrap(), UnitTables::default());
    }

    #[test]
    fn bundled_data_matches_defaults() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        assert_eq!(factory.load_config().unwrap(), RaidConfig::default());
        assert_eq!(factory.load_tables().unwrap(), UnitTables::default());
    }
}
