//! Ledger client trait and its error type.

use async_trait::async_trait;

use crate::types::{AccountId, TxReceipt};

/// Payment failures.
///
/// Every variant means no funds moved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("Insufficient funds in {account}: required {required}, available {available}")]
    InsufficientFunds {
        account: AccountId,
        required: u64,
        available: u64,
    },

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Invalid amount: {0}")]
    InvalidAmount(u64),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Client for the external token ledger.
///
/// Implementations must be atomic per call: a transfer either settles in
/// full and returns a receipt, or fails and leaves both balances unchanged.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Move `amount` from `from` to `to`.
    async fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: u64,
    ) -> Result<TxReceipt, PaymentError>;

    /// Current balance of `account`.
    async fn balance(&self, account: &AccountId) -> Result<u64, PaymentError>;
}
