//! Unified error type surfaced by the runtime API.
//!
//! Wraps engine rejections, repository failures and ledger failures so
//! clients can bubble them up with consistent context.
use client_ledger_core::PaymentError;
use raid_core::{ErrorSeverity, GameError, RaidError, TrainError};
use thiserror::Error;

pub use crate::repository::RepositoryError;
use crate::repository::PlayerId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("player {0} is already registered")]
    PlayerExists(PlayerId),

    #[error("invalid username {0:?}: use 1-32 letters, digits, '-' or '_'")]
    InvalidUsername(String),

    #[error("player {0} cannot raid themselves")]
    SelfRaid(PlayerId),

    #[error(transparent)]
    Raid(#[from] RaidError),

    #[error(transparent)]
    Train(#[from] TrainError),

    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Severity for engine rejections, `None` for everything else.
    pub fn game_severity(&self) -> Option<ErrorSeverity> {
        match self {
            Self::Raid(err) => Some(err.severity()),
            Self::Train(err) => Some(err.severity()),
            _ => None,
        }
    }
}
