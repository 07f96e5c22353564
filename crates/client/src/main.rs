//! Yield Raiders client binary.
//!
//! Composition root that assembles:
//! 1. Balance content (raid config and unit tables) via raid-content
//! 2. Player persistence via the file repository
//! 3. The in-memory ledger for paid actions
//!
//! and runs one command against the resulting [`RaidService`].
//!
//! # Examples
//!
//! ```bash
//! raiders register ragnar --unit cavalry
//! raiders raid ragnar ecbert
//! RUST_LOG=debug raiders leaderboard --limit 10
//! ```

mod commands;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use client_ledger_core::{AccountId, MockLedger};
use raid_content::{ConfigLoader, ContentFactory, TablesLoader};
use raid_core::{RaidConfig, UnitTables};
use raid_runtime::{
    FilePlayerRepository, PlayerRepository, RaidService, ServiceSettings, SystemClock,
};

use commands::{Cli, Service};
use config::RuntimeConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = RuntimeConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting raiders: {:?}", cli.command);

    let (raid_config, tables) = load_content(&config)?;
    let (service, ledger) = build_service(&config, raid_config, tables)?;

    cli.command
        .execute(&service, &ledger, config.wallet_funds)
        .await
}

/// Loads balance content: explicit file paths first, then the content
/// directory, then the built-in defaults.
fn load_content(config: &RuntimeConfig) -> Result<(RaidConfig, UnitTables)> {
    let factory = config.content_dir.as_ref().map(ContentFactory::new);

    let raid_config = match (&config.config_path, &factory) {
        (Some(path), _) => ConfigLoader::load(path)?,
        (None, Some(factory)) => factory.load_config()?,
        (None, None) => RaidConfig::default(),
    };
    let tables = match (&config.tables_path, &factory) {
        (Some(path), _) => TablesLoader::load(path)?,
        (None, Some(factory)) => factory.load_tables()?,
        (None, None) => UnitTables::default(),
    };

    Ok((raid_config, tables))
}

fn build_service(
    config: &RuntimeConfig,
    raid_config: RaidConfig,
    tables: UnitTables,
) -> Result<(Service, MockLedger)> {
    let repo = FilePlayerRepository::new(&config.data_dir).with_context(|| {
        format!("failed to open player data at {}", config.data_dir.display())
    })?;
    tracing::info!("Player data: {}", repo.base_dir().display());

    // The mock ledger lives for one process: fund every known wallet.
    let ledger = MockLedger::new().with_account(config.treasury.as_str(), 0);
    for record in repo.list()? {
        ledger.fund(record.wallet, config.wallet_funds);
    }

    let settings = ServiceSettings {
        treasury: AccountId::new(config.treasury.clone()),
        session_seed: config.session_seed,
        activity_capacity: config.activity_capacity,
    };
    let service = RaidService::new(
        repo,
        ledger.clone(),
        SystemClock,
        raid_config,
        tables,
        settings,
    );

    Ok((service, ledger))
}
