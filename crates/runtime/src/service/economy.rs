use client_ledger_core::{AccountId, LedgerClient, TxReceipt};
use raid_core::{ClockOracle, refill_stamina, skip_cooldown, upgrade_defense};

use super::RaidService;
use crate::error::Result;
use crate::repository::{PlayerId, PlayerRecord, PlayerRepository};

impl<R, L, C> RaidService<R, L, C>
where
    R: PlayerRepository,
    L: LedgerClient,
    C: ClockOracle,
{
    /// Converts the player's pending vault yield into command tokens.
    ///
    /// Returns the tokens credited; 0 when less than a day has accrued.
    pub fn claim_yield(&self, id: &PlayerId) -> Result<u64> {
        let mut record = self.load_player(id)?;
        let now = self.now();

        let credited = record.vault.claim_yield(now);
        if credited > 0 {
            record
                .activity
                .push(now, format!("Claimed yield: +{} command tokens", credited));
            self.repo.save(&record)?;
            tracing::info!(player = %id, credited, "yield claimed");
        }

        Ok(credited)
    }

    /// Stakes `amount` from the player's wallet into their vault.
    ///
    /// Pending yield on the old principal is claimed first. Returns the
    /// tokens credited by that claim.
    pub async fn deposit(&self, id: &PlayerId, amount: u64) -> Result<u64> {
        let mut record = self.load_player(id)?;
        let receipt = self
            .ledger
            .transfer(&record.wallet, &self.settings.treasury, amount)
            .await?;

        let now = self.now();
        let credited = record.vault.deposit(amount, now);
        record.activity.push(
            now,
            format!("Deposited {} into the vault ({})", amount, receipt.tx_id),
        );
        if let Err(err) = self.repo.save(&record) {
            self.refund(&record.wallet, &receipt).await;
            return Err(err.into());
        }

        tracing::info!(player = %id, amount, tx = %receipt.tx_id, "deposit settled");
        Ok(credited)
    }

    /// Records walked steps. Returns the command tokens credited.
    pub fn record_steps(&self, id: &PlayerId, steps: u64) -> Result<u64> {
        let mut record = self.load_player(id)?;
        let credited = record.vault.record_steps(steps);
        record.activity.push(
            self.now(),
            format!("Walked {} steps: +{} command tokens", steps, credited),
        );
        self.repo.save(&record)?;

        tracing::info!(player = %id, steps, credited, "steps recorded");
        Ok(credited)
    }

    /// Pays to end a fatigue cooldown and clear the win streak.
    pub async fn skip_cooldown(&self, id: &PlayerId) -> Result<PlayerRecord> {
        let price = self.config.prices.skip_cooldown;
        self.paid_action(id, price, "Cooldown skipped", |record| {
            record.combat = skip_cooldown(&record.combat);
        })
        .await
    }

    /// Pays to fill the energy meter.
    pub async fn refill_stamina(&self, id: &PlayerId) -> Result<PlayerRecord> {
        let price = self.config.prices.refill_stamina;
        let now = self.now();
        let regen = self.config.regen;
        self.paid_action(id, price, "Stamina refilled", move |record| {
            record.combat = refill_stamina(&record.combat.regenerated(now, &regen));
        })
        .await
    }

    /// Pays for a shield upgrade of `defense_upgrade_amount`.
    pub async fn upgrade_defense(&self, id: &PlayerId) -> Result<PlayerRecord> {
        let price = self.config.prices.upgrade_defense;
        let amount = self.config.defense_upgrade_amount;
        self.paid_action(
            id,
            price,
            &format!("Shield upgraded: +{} defense", amount),
            |record| {
                record.combat = upgrade_defense(&record.combat, amount);
            },
        )
        .await
    }

    /// Charges `price` to the player's wallet, then applies `apply` and saves.
    ///
    /// A zero price skips the ledger. If the save fails the payment is
    /// refunded.
    async fn paid_action(
        &self,
        id: &PlayerId,
        price: u64,
        label: &str,
        apply: impl FnOnce(&mut PlayerRecord),
    ) -> Result<PlayerRecord> {
        let mut record = self.load_player(id)?;
        let receipt = self.charge(&record, price).await?;

        apply(&mut record);
        let message = match &receipt {
            Some(receipt) => format!("{} (paid {}, {})", label, price, receipt.tx_id),
            None => label.to_string(),
        };
        record.activity.push(self.now(), message);
        if let Err(err) = self.repo.save(&record) {
            if let Some(receipt) = &receipt {
                self.refund(&record.wallet, receipt).await;
            }
            return Err(err.into());
        }

        tracing::info!(player = %id, price, action = label, "paid action applied");
        Ok(record)
    }

    async fn charge(&self, record: &PlayerRecord, price: u64) -> Result<Option<TxReceipt>> {
        if price == 0 {
            return Ok(None);
        }
        let receipt = self
            .ledger
            .transfer(&record.wallet, &self.settings.treasury, price)
            .await
            .inspect_err(|err| {
                tracing::warn!(player = %record.id, price, %err, "payment rejected");
            })?;
        Ok(Some(receipt))
    }

    /// Returns a charged amount from the treasury to `wallet`.
    ///
    /// Used when the state change a payment bought could not be committed.
    /// A failed refund is logged with the original receipt for manual
    /// settlement.
    pub(super) async fn refund(&self, wallet: &AccountId, charged: &TxReceipt) {
        match self
            .ledger
            .transfer(&self.settings.treasury, wallet, charged.amount)
            .await
        {
            Ok(refund) => tracing::info!(
                %wallet,
                amount = charged.amount,
                charged = %charged.tx_id,
                refund = %refund.tx_id,
                "payment refunded"
            ),
            Err(err) => tracing::warn!(
                %wallet,
                amount = charged.amount,
                charged = %charged.tx_id,
                %err,
                "refund failed, payment kept by treasury"
            ),
        }
    }
}
