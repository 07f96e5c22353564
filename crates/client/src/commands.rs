//! Command-line surface of the `raiders` binary.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_ledger_core::{AccountId, MockLedger};
use raid_core::{RaidError, TroopKind, UnitType};
use raid_runtime::{FilePlayerRepository, PlayerId, RaidService, RuntimeError, SystemClock};

pub type Service = RaidService<FilePlayerRepository, MockLedger, SystemClock>;

/// Yield Raiders: raid other players, train troops and grow your vault
#[derive(Parser, Debug)]
#[command(name = "raiders")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new player
    Register {
        username: String,
        /// Army affinity: infantry, archer or cavalry
        #[arg(long, default_value = "infantry", value_parser = parse_unit)]
        unit: UnitType,
        /// Ledger account charged for paid actions (defaults to the player id)
        #[arg(long)]
        wallet: Option<String>,
    },

    /// Show a player's current numbers and recent activity
    Status { player: String },

    /// Raid another player
    Raid {
        attacker: String,
        defender: String,
        /// Stake this much in escrow; the pool is split by destruction
        #[arg(long)]
        wager: Option<u64>,
    },

    /// Show the win probability of a raid without attacking
    Odds { attacker: String, defender: String },

    /// Train one garrison unit: archers, infantry or giants
    Train {
        player: String,
        #[arg(value_parser = parse_troop)]
        kind: TroopKind,
    },

    /// Convert accrued vault yield into command tokens
    Claim { player: String },

    /// Stake tokens from the player's wallet into the vault
    Deposit { player: String, amount: u64 },

    /// Record walked steps
    Steps { player: String, steps: u64 },

    /// Pay to end a fatigue cooldown
    SkipCooldown { player: String },

    /// Pay to refill stamina
    Refill { player: String },

    /// Pay for a shield upgrade
    UpgradeDefense { player: String },

    /// Top players by wins
    Leaderboard {
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

fn parse_unit(value: &str) -> Result<UnitType, String> {
    UnitType::parse(value).map_err(|e| e.to_string())
}

fn parse_troop(value: &str) -> Result<TroopKind, String> {
    TroopKind::parse(value).map_err(|e| e.to_string())
}

fn player_id(name: &str) -> Result<PlayerId> {
    PlayerId::from_username(name).with_context(|| format!("invalid player name {name:?}"))
}

impl Command {
    pub async fn execute(self, service: &Service, ledger: &MockLedger, funds: u64) -> Result<()> {
        match self {
            Command::Register {
                username,
                unit,
                wallet,
            } => {
                let record = service.register(&username, unit, wallet.map(AccountId::new))?;
                ledger.fund(record.wallet.clone(), funds);
                println!(
                    "Registered {} ({}) with {} gold and {} defense",
                    record.username, unit, record.combat.balance, record.combat.defense_power
                );
            }

            Command::Status { player } => {
                let record = service.status(&player_id(&player)?)?;
                let combat = &record.combat;
                println!("{} ({})", record.username, combat.unit_type);
                println!("  wins      {}", combat.win_count);
                println!("  gold      {}", combat.balance);
                println!("  defense   {}", combat.defense_power);
                println!(
                    "  stamina   {:.1}/{:.0}",
                    combat.capacity, combat.max_capacity
                );
                println!("  streak    {}", combat.streak);
                println!(
                    "  troops    {} archers, {} infantry, {} giants",
                    record.roster.archers, record.roster.infantry, record.roster.giants
                );
                println!(
                    "  vault     {} staked, {} command tokens, {} steps",
                    record.vault.principal, record.vault.command_balance, record.vault.total_steps
                );
                for entry in record.activity.iter().take(10) {
                    println!("  - {}", entry.message);
                }
            }

            Command::Raid {
                attacker,
                defender,
                wager,
            } => {
                let (attacker, defender) = (player_id(&attacker)?, player_id(&defender)?);
                let result = match wager {
                    Some(wager) => service
                        .raid_with_wager(&attacker, &defender, wager)
                        .await
                        .map(|report| {
                            println!(
                                "Wager of {} settled: {} to you, {} to the defender, {} fee",
                                wager,
                                report.settlement.attacker_share,
                                report.settlement.defender_share,
                                report.settlement.fee
                            );
                            report.raid
                        }),
                    None => service.raid(&attacker, &defender),
                };
                match result {
                    Ok(report) => {
                        let outcome = &report.outcome;
                        if outcome.success {
                            println!(
                                "Victory! Looted {} gold ({:.0}% destruction, {:.1}% odds)",
                                outcome.loot_amount,
                                outcome.destruction_percent,
                                outcome.win_probability * 100.0
                            );
                        } else {
                            println!(
                                "Repelled. ({:.1}% odds, rolled {:.3})",
                                outcome.win_probability * 100.0,
                                outcome.roll
                            );
                        }
                        if outcome.fatigue_triggered {
                            println!(
                                "Your troops are fatigued for {}s.",
                                service.config().cooldown_secs
                            );
                        }
                    }
                    Err(RuntimeError::Raid(err @ RaidError::OnCooldown { .. })) => {
                        println!(
                            "Troops are resting: {}s remaining.",
                            err.remaining_cooldown_secs()
                        );
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            Command::Odds { attacker, defender } => {
                let odds = service.odds(&player_id(&attacker)?, &player_id(&defender)?)?;
                println!(
                    "{:.1}% to win ({:.0} attack vs {:.0} defense{})",
                    odds.win_probability * 100.0,
                    odds.attack_power,
                    odds.defense_power,
                    if odds.unit_advantage_applied {
                        ", unit advantage"
                    } else {
                        ""
                    }
                );
            }

            Command::Train { player, kind } => {
                let roster = service.train(&player_id(&player)?, kind)?;
                println!(
                    "Trained {}. Garrison: {} archers, {} infantry, {} giants",
                    kind, roster.archers, roster.infantry, roster.giants
                );
            }

            Command::Claim { player } => {
                let credited = service.claim_yield(&player_id(&player)?)?;
                println!("Claimed {} command tokens", credited);
            }

            Command::Deposit { player, amount } => {
                let credited = service.deposit(&player_id(&player)?, amount).await?;
                println!("Deposited {} (claimed {} command tokens)", amount, credited);
            }

            Command::Steps { player, steps } => {
                let credited = service.record_steps(&player_id(&player)?, steps)?;
                println!("Recorded {} steps: +{} command tokens", steps, credited);
            }

            Command::SkipCooldown { player } => {
                service.skip_cooldown(&player_id(&player)?).await?;
                println!("Cooldown skipped");
            }

            Command::Refill { player } => {
                let record = service.refill_stamina(&player_id(&player)?).await?;
                println!("Stamina refilled to {:.0}", record.combat.capacity);
            }

            Command::UpgradeDefense { player } => {
                let record = service.upgrade_defense(&player_id(&player)?).await?;
                println!("Defense is now {}", record.combat.defense_power);
            }

            Command::Leaderboard { limit } => {
                for entry in service.leaderboard(limit)? {
                    println!(
                        "{:>2}. {:<20} {:>4} wins  {:>4} defense  {}",
                        entry.rank,
                        entry.username,
                        entry.win_count,
                        entry.defense_power,
                        entry.unit_type
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_raid_command() {
        let cli = Cli::try_parse_from(["raiders", "raid", "ivar", "ubba"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Raid { ref attacker, ref defender, wager: None }
                if attacker == "ivar" && defender == "ubba"
        ));

        let cli =
            Cli::try_parse_from(["raiders", "raid", "ivar", "ubba", "--wager", "50"]).unwrap();
        assert!(matches!(cli.command, Command::Raid { wager: Some(50), .. }));
    }

    #[test]
    fn parses_unit_and_troop_names_case_insensitively() {
        let cli = Cli::try_parse_from(["raiders", "register", "bjorn", "--unit", "Cavalry"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Register {
                unit: UnitType::Cavalry,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["raiders", "train", "bjorn", "GIANTS"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Train {
                kind: TroopKind::Giants,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["raiders", "register", "bjorn", "--unit", "dragon"]).is_err());
    }
}
