//! Runtime orchestration for Yield Raiders.
//!
//! This crate wires the pure raid-core engine to persistence, the wall clock
//! and the payment ledger. Consumers embed [`RaidService`] to register
//! players, resolve raids, train troops and run the paid economy actions.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the orchestrator and its settings
//! - [`repository`] provides player persistence adapters
//! - [`activity`] keeps the bounded per-player history
//! - [`leaderboard`] ranks players by wins
//! - [`clock`] adapts the system clock to the engine's clock oracle
pub mod activity;
pub mod clock;
pub mod error;
pub mod leaderboard;
pub mod repository;
pub mod service;

pub use activity::{ActivityEntry, ActivityLog};
pub use clock::SystemClock;
pub use error::{Result, RuntimeError};
pub use leaderboard::{LeaderboardEntry, rank_players};
pub use repository::{
    FilePlayerRepository, InMemoryPlayerRepo, PlayerId, PlayerRecord, PlayerRepository,
    RepositoryError,
};
pub use service::{RaidReport, RaidService, ServiceSettings, WagerReport};
