//! Mock ledger for tests and local play.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::traits::{LedgerClient, PaymentError};
use crate::types::{AccountId, TxId, TxReceipt};

/// In-memory ledger.
///
/// Balances live in a shared map, so clones observe the same accounts.
/// Unknown senders are rejected; unknown recipients are opened on first
/// credit.
#[derive(Clone, Default)]
pub struct MockLedger {
    balances: Arc<Mutex<HashMap<AccountId, u64>>>,
    transaction_counter: Arc<Mutex<u64>>,
}

fn poisoned<T>(_: T) -> PaymentError {
    PaymentError::Transport("mock ledger lock poisoned".to_string())
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an account with `amount`, replacing any previous balance.
    pub fn with_account(self, account: impl Into<AccountId>, amount: u64) -> Self {
        self.fund(account, amount);
        self
    }

    /// Sets the balance of `account`.
    ///
    /// Still applies after a panic poisoned the lock.
    pub fn fund(&self, account: impl Into<AccountId>, amount: u64) {
        self.balances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(account.into(), amount);
    }

    fn next_tx_id(&self) -> Result<TxId, PaymentError> {
        let mut counter = self.transaction_counter.lock().map_err(poisoned)?;
        *counter += 1;
        Ok(TxId(*counter))
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: u64,
    ) -> Result<TxReceipt, PaymentError> {
        if amount == 0 {
            return Err(PaymentError::InvalidAmount(amount));
        }

        let mut balances = self.balances.lock().map_err(poisoned)?;
        let available = *balances
            .get(from)
            .ok_or_else(|| PaymentError::AccountNotFound(from.clone()))?;
        if available < amount {
            return Err(PaymentError::InsufficientFunds {
                account: from.clone(),
                required: amount,
                available,
            });
        }

        balances.insert(from.clone(), available - amount);
        let credit = balances.entry(to.clone()).or_insert(0);
        *credit = credit.saturating_add(amount);
        drop(balances);

        let tx_id = self.next_tx_id()?;
        tracing::debug!(%tx_id, %from, %to, amount, "mock ledger transfer");

        Ok(TxReceipt {
            tx_id,
            from: from.clone(),
            to: to.clone(),
            amount,
        })
    }

    async fn balance(&self, account: &AccountId) -> Result<u64, PaymentError> {
        self.balances
            .lock()
            .map_err(poisoned)?
            .get(account)
            .copied()
            .ok_or_else(|| PaymentError::AccountNotFound(account.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> MockLedger {
        MockLedger::new()
            .with_account("alice", 100)
            .with_account("treasury", 0)
    }

    #[tokio::test]
    async fn transfer_moves_funds() {
        let ledger = ledger();
        let alice = AccountId::from("alice");
        let treasury = AccountId::from("treasury");

        let receipt = ledger.transfer(&alice, &treasury, 30).await.unwrap();

        assert_eq!(receipt.amount, 30);
        assert_eq!(ledger.balance(&alice).await.unwrap(), 70);
        assert_eq!(ledger.balance(&treasury).await.unwrap(), 30);
    }

    #[tokio::test]
    async fn transaction_ids_increase() {
        let ledger = ledger();
        let alice = AccountId::from("alice");
        let treasury = AccountId::from("treasury");

        let first = ledger.transfer(&alice, &treasury, 1).await.unwrap();
        let second = ledger.transfer(&alice, &treasury, 1).await.unwrap();

        assert!(second.tx_id > first.tx_id);
    }

    #[tokio::test]
    async fn overdraft_is_rejected_without_side_effects() {
        let ledger = ledger();
        let alice = AccountId::from("alice");
        let treasury = AccountId::from("treasury");

        let err = ledger.transfer(&alice, &treasury, 101).await.unwrap_err();

        assert_eq!(
            err,
            PaymentError::InsufficientFunds {
                account: alice.clone(),
                required: 101,
                available: 100,
            }
        );
        assert_eq!(ledger.balance(&alice).await.unwrap(), 100);
        assert_eq!(ledger.balance(&treasury).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn zero_amount_and_unknown_sender_are_rejected() {
        let ledger = ledger();
        let treasury = AccountId::from("treasury");

        assert_eq!(
            ledger
                .transfer(&AccountId::from("alice"), &treasury, 0)
                .await
                .unwrap_err(),
            PaymentError::InvalidAmount(0)
        );
        assert!(matches!(
            ledger.transfer(&AccountId::from("mallory"), &treasury, 1).await,
            Err(PaymentError::AccountNotFound(_))
        ));
    }

    #[tokio::test]
    async fn funding_survives_a_poisoned_lock() {
        let ledger = ledger();
        let shared = ledger.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.balances.lock().unwrap();
            panic!("poison the balances");
        })
        .join();

        ledger.fund("bob", 25);

        let balances = ledger
            .balances
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        assert_eq!(balances.get(&AccountId::from("bob")), Some(&25));
    }
}
