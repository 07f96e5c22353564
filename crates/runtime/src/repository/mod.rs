//! Repository layer for player data.
//!
//! Repositories handle data that CHANGES during play: combat snapshots,
//! troop rosters, vaults and activity history. Balance content (raid config,
//! unit tables) is loaded by raid-content, not stored here.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FilePlayerRepository;
pub use memory::InMemoryPlayerRepo;
pub use traits::PlayerRepository;
pub use types::{PlayerId, PlayerRecord};
