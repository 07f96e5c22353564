//! Troop tables loader.

use std::path::Path;

use raid_core::UnitTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for troop tables from RON files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load [`UnitTables`] from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a `UnitTables` struct
    pub fn load(path: &Path) -> LoadResult<UnitTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse [`UnitTables`] from RON text.
    pub fn parse(content: &str) -> LoadResult<UnitTables> {
        let tables: UnitTables = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit tables RON: {}", e))?;
        Ok(tables)
    }
}
