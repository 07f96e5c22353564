use client_ledger_core::{AccountId, LedgerClient, TxReceipt};
use raid_core::{ClockOracle, settle_wager};

use super::{RaidService, WagerReport};
use crate::error::{Result, RuntimeError};
use crate::repository::{PlayerId, PlayerRepository};

impl<R, L, C> RaidService<R, L, C>
where
    R: PlayerRepository,
    L: LedgerClient,
    C: ClockOracle,
{
    /// Raids with `wager` held in escrow by the treasury.
    ///
    /// The wager moves from the attacker's wallet to the treasury before the
    /// raid. A rejected raid refunds it. Once resolved, the pool is split by
    /// destruction percent: the fee stays with the treasury and each share is
    /// paid to its player's wallet.
    pub async fn raid_with_wager(
        &self,
        attacker_id: &PlayerId,
        defender_id: &PlayerId,
        wager: u64,
    ) -> Result<WagerReport> {
        if attacker_id == defender_id {
            return Err(RuntimeError::SelfRaid(attacker_id.clone()));
        }
        let attacker_wallet = self.load_player(attacker_id)?.wallet;
        let defender_wallet = self.load_player(defender_id)?.wallet;

        let escrow = self
            .ledger
            .transfer(&attacker_wallet, &self.settings.treasury, wager)
            .await
            .inspect_err(|err| {
                tracing::warn!(attacker = %attacker_id, wager, %err, "wager rejected");
            })?;

        let raid = match self.raid(attacker_id, defender_id) {
            Ok(raid) => raid,
            Err(err) => {
                self.refund(&attacker_wallet, &escrow).await;
                return Err(err);
            }
        };

        let settlement = settle_wager(wager, raid.outcome.destruction_percent);
        let mut payouts = Vec::with_capacity(2);
        for (wallet, share) in [
            (&attacker_wallet, settlement.attacker_share),
            (&defender_wallet, settlement.defender_share),
        ] {
            if let Some(receipt) = self.pay_out(wallet, share).await? {
                payouts.push(receipt);
            }
        }

        tracing::info!(
            attacker = %attacker_id,
            defender = %defender_id,
            wager,
            fee = settlement.fee,
            attacker_share = settlement.attacker_share,
            defender_share = settlement.defender_share,
            "wager settled"
        );

        Ok(WagerReport {
            raid,
            escrow,
            settlement,
            payouts,
        })
    }

    async fn pay_out(&self, wallet: &AccountId, amount: u64) -> Result<Option<TxReceipt>> {
        if amount == 0 {
            return Ok(None);
        }
        let receipt = self
            .ledger
            .transfer(&self.settings.treasury, wallet, amount)
            .await
            .inspect_err(|err| {
                tracing::warn!(%wallet, amount, %err, "wager payout failed");
            })?;
        Ok(Some(receipt))
    }
}
