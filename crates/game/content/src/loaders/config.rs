//! Raid configuration loader.

use std::path::Path;

use raid_core::RaidConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for raid configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`RaidConfig`] from a TOML file.
    ///
    /// Keys missing from the file keep their default values, so an empty
    /// file yields `RaidConfig::default()`.
    pub fn load(path: &Path) -> LoadResult<RaidConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a [`RaidConfig`] from TOML text.
    pub fn parse(content: &str) -> LoadResult<RaidConfig> {
        let config: RaidConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.raid_cost < 0.0 || config.loss_stamina_penalty < 0.0 {
            anyhow::bail!("raid_cost and loss_stamina_penalty must not be negative");
        }
        if config.regen.rate_per_second < 0.0 {
            anyhow::bail!("regen.rate_per_second must not be negative");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), RaidConfig::default());
    }

    #[test]
    fn partial_document_overrides_listed_keys() {
        let config = ConfigLoader::parse(
            r#"
            raid_cost = 15.0
            fatigue_threshold = 3

            [prices]
            skip_cooldown = 7

            [regen]
            rate_per_second = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.raid_cost, 15.0);
        assert_eq!(config.fatigue_threshold, 3);
        assert_eq!(config.prices.skip_cooldown, 7);
        assert_eq!(config.prices.upgrade_defense, 10);
        assert_eq!(config.regen.rate_per_second, 0.5);
        assert_eq!(config.cooldown_secs, RaidConfig::DEFAULT_COOLDOWN_SECS);
    }

    #[test]
    fn negative_costs_are_rejected() {
        assert!(ConfigLoader::parse("raid_cost = -1.0").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/raiders.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/raiders.toml"));
    }
}
