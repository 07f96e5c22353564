//! Data-driven balance content and loaders.
//!
//! Raid tuning lives in a TOML file (`config.toml`) and the troop tables in a
//! RON file (`tables.ron`). Both are optional on disk: every value falls back
//! to the built-in defaults from raid-core.
//!
//! Content is consumed by the runtime and never appears in player state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, TablesLoader};
