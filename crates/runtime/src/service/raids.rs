use client_ledger_core::LedgerClient;
use raid_core::{
    ClockOracle, PcgRng, RaidOdds, RaidRequest, TroopKind, TroopRoster, can_train, derive_seed,
    raid_odds, resolve_raid,
};

use super::{RaidReport, RaidService};
use crate::error::{Result, RuntimeError};
use crate::repository::{PlayerId, PlayerRepository};

impl<R, L, C> RaidService<R, L, C>
where
    R: PlayerRepository,
    L: LedgerClient,
    C: ClockOracle,
{
    /// Resolves a raid and commits both players.
    ///
    /// The attacker's trained roster is used for attack power when it is not
    /// empty. On rejection (cooldown, low stamina) nothing is saved.
    pub fn raid(&self, attacker_id: &PlayerId, defender_id: &PlayerId) -> Result<RaidReport> {
        if attacker_id == defender_id {
            return Err(RuntimeError::SelfRaid(attacker_id.clone()));
        }

        let mut attacker = self.load_player(attacker_id)?;
        let mut defender = self.load_player(defender_id)?;

        let now = self.now();
        let seed = derive_seed(
            self.session_seed,
            attacker.raid_count,
            attacker.seed_key ^ defender.seed_key.rotate_left(32),
        );
        let request = RaidRequest::new(now, seed).with_roster(attacker.roster);

        let outcome = resolve_raid(
            &attacker.combat,
            &defender.combat,
            &request,
            &self.config,
            &self.tables,
            &PcgRng,
        )
        .inspect_err(|err| {
            tracing::warn!(attacker = %attacker_id, defender = %defender_id, %err, "raid rejected");
        })?;

        if outcome.success {
            attacker.activity.push(
                now,
                format!(
                    "Raided {}: victory, looted {} gold",
                    defender.username, outcome.loot_amount
                ),
            );
            defender.activity.push(
                now,
                format!(
                    "Raided by {}: defenses breached, lost {} gold",
                    attacker.username, outcome.loot_amount
                ),
            );
        } else {
            attacker
                .activity
                .push(now, format!("Raided {}: repelled", defender.username));
            defender
                .activity
                .push(now, format!("Repelled a raid by {}", attacker.username));
        }
        if outcome.fatigue_triggered {
            attacker.activity.push(
                now,
                format!("Troops fatigued, resting for {}s", self.config.cooldown_secs),
            );
        }

        attacker.raid_count = attacker.raid_count.wrapping_add(1);
        attacker.combat = outcome.updated_attacker.clone();
        defender.combat = outcome.updated_defender.clone();
        self.repo.save_all(&[&defender, &attacker])?;

        tracing::info!(
            attacker = %attacker_id,
            defender = %defender_id,
            success = outcome.success,
            win_probability = outcome.win_probability,
            loot = outcome.loot_amount,
            fatigue = outcome.fatigue_triggered,
            "raid resolved"
        );

        Ok(RaidReport {
            attacker: attacker_id.clone(),
            defender: defender_id.clone(),
            seed,
            outcome,
        })
    }

    /// Odds of a raid, without resolving it.
    pub fn odds(&self, attacker_id: &PlayerId, defender_id: &PlayerId) -> Result<RaidOdds> {
        let attacker = self.load_player(attacker_id)?;
        let defender = self.load_player(defender_id)?;
        Ok(raid_odds(
            &attacker.combat,
            &defender.combat,
            Some(&attacker.roster),
            &self.tables,
        ))
    }

    /// Trains one unit of `kind` into the player's garrison.
    pub fn train(&self, id: &PlayerId, kind: TroopKind) -> Result<TroopRoster> {
        let mut record = self.load_player(id)?;
        let roster = can_train(&record.roster, kind, &self.tables)?;

        record.roster = roster;
        record.activity.push(self.now(), format!("Trained {}", kind));
        self.repo.save(&record)?;

        tracing::info!(player = %id, %kind, total = roster.total_units(), "troop trained");
        Ok(roster)
    }
}
