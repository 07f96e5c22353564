//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use raid_runtime::ActivityLog;

/// Configuration required to bootstrap the raid service.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub data_dir: PathBuf,
    pub content_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub tables_path: Option<PathBuf>,
    pub session_seed: Option<u64>,
    pub log_dir: Option<PathBuf>,
    pub activity_capacity: usize,
    pub treasury: String,
    pub wallet_funds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            content_dir: None,
            config_path: None,
            tables_path: None,
            session_seed: None,
            log_dir: None,
            activity_capacity: ActivityLog::DEFAULT_CAPACITY,
            treasury: "treasury".to_string(),
            wallet_funds: 100,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RAIDERS_DATA_DIR` - Directory for player records (default: platform data dir)
    /// - `RAIDERS_CONTENT_DIR` - Directory holding `config.toml` and `tables.ron`
    /// - `RAIDERS_CONFIG` - Raid config TOML file, overrides the content dir
    /// - `RAIDERS_TABLES` - Unit tables RON file, overrides the content dir
    /// - `RAIDERS_SEED` - Fixed session seed for reproducible raids
    /// - `RAIDERS_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `RAIDERS_ACTIVITY_CAPACITY` - Activity entries kept per player (default: 50)
    /// - `RAIDERS_TREASURY` - Ledger account receiving payments (default: treasury)
    /// - `RAIDERS_WALLET_FUNDS` - Mock ledger funds per stored wallet (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("RAIDERS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.content_dir = env::var("RAIDERS_CONTENT_DIR").ok().map(PathBuf::from);
        config.config_path = env::var("RAIDERS_CONFIG").ok().map(PathBuf::from);
        config.tables_path = env::var("RAIDERS_TABLES").ok().map(PathBuf::from);
        config.session_seed = read_env::<u64>("RAIDERS_SEED");
        config.log_dir = env::var("RAIDERS_LOG_DIR").ok().map(PathBuf::from);

        if let Some(capacity) = read_env::<usize>("RAIDERS_ACTIVITY_CAPACITY") {
            config.activity_capacity = capacity.max(1);
        }
        if let Ok(treasury) = env::var("RAIDERS_TREASURY") {
            config.treasury = treasury;
        }
        if let Some(funds) = read_env::<u64>("RAIDERS_WALLET_FUNDS") {
            config.wallet_funds = funds;
        }

        config
    }
}

/// Platform-specific data directory for player records.
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "raiders")
        .map(|dirs| dirs.data_dir().join("players"))
        .unwrap_or_else(|| PathBuf::from("./save_data/players"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
