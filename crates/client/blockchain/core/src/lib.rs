//! Payment ledger abstraction for Yield Raiders.
//!
//! Paid in-game actions (skipping a cooldown, refilling stamina, buying a
//! shield upgrade) are settled on an external token ledger before the game
//! state changes. This crate defines the client interface for that ledger
//! and an in-memory mock.
//!
//! # Usage
//!
//! ```ignore
//! use client_ledger_core::{AccountId, LedgerClient};
//!
//! async fn charge(ledger: &dyn LedgerClient, player: &AccountId, treasury: &AccountId) {
//!     let receipt = ledger.transfer(player, treasury, 5).await?;
//!     tracing::info!(tx = %receipt.tx_id, "charged");
//! }
//! ```

pub mod traits;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use traits::{LedgerClient, PaymentError};
pub use types::{AccountId, TxId, TxReceipt};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockLedger;
