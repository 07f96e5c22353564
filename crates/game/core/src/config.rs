/// Tunable raid and economy parameters.
///
/// Every field has a default matching the live game balance, and the serde
/// representation accepts partial documents so a TOML file only needs to
/// list the values it overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RaidConfig {
    /// Energy deducted from the attacker as the raid entry fee.
    pub raid_cost: f64,
    /// Extra energy deducted from the attacker when the raid fails.
    ///
    /// Set to 0 to charge the entry fee only.
    pub loss_stamina_penalty: f64,
    /// Defense removed from a defender that loses a raid.
    pub defense_penalty: u32,
    /// Base reward fed into the logarithmic loot curve.
    pub base_reward: u64,
    /// Consecutive wins that trigger a fatigue cooldown. 0 disables fatigue.
    pub fatigue_threshold: u32,
    /// Length of the fatigue cooldown in seconds.
    pub cooldown_secs: u64,
    pub regen: RegenPolicy,
    pub starting: StartingStats,
    pub prices: PriceList,
    /// Defense gained per paid shield upgrade.
    pub defense_upgrade_amount: u32,
}

impl RaidConfig {
    pub const DEFAULT_RAID_COST: f64 = 10.0;
    pub const DEFAULT_LOSS_STAMINA_PENALTY: f64 = 10.0;
    pub const DEFAULT_DEFENSE_PENALTY: u32 = 10;
    pub const DEFAULT_BASE_REWARD: u64 = 10;
    pub const DEFAULT_FATIGUE_THRESHOLD: u32 = 5;
    pub const DEFAULT_COOLDOWN_SECS: u64 = 10;
    pub const DEFAULT_DEFENSE_UPGRADE: u32 = 5;

    pub fn new() -> Self {
        Self {
            raid_cost: Self::DEFAULT_RAID_COST,
            loss_stamina_penalty: Self::DEFAULT_LOSS_STAMINA_PENALTY,
            defense_penalty: Self::DEFAULT_DEFENSE_PENALTY,
            base_reward: Self::DEFAULT_BASE_REWARD,
            fatigue_threshold: Self::DEFAULT_FATIGUE_THRESHOLD,
            cooldown_secs: Self::DEFAULT_COOLDOWN_SECS,
            regen: RegenPolicy::default(),
            starting: StartingStats::default(),
            prices: PriceList::default(),
            defense_upgrade_amount: Self::DEFAULT_DEFENSE_UPGRADE,
        }
    }

    pub fn with_loss_stamina_penalty(mut self, penalty: f64) -> Self {
        self.loss_stamina_penalty = penalty;
        self
    }

    pub fn with_fatigue(mut self, threshold: u32, cooldown_secs: u64) -> Self {
        self.fatigue_threshold = threshold;
        self.cooldown_secs = cooldown_secs;
        self
    }
}

impl Default for RaidConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Energy regeneration policy.
///
/// A single flat rate is used for every player; win-scaled rates are not
/// supported.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegenPolicy {
    /// Energy units restored per elapsed second.
    pub rate_per_second: f64,
}

impl RegenPolicy {
    /// Full refill of a 100-unit meter in 300 seconds.
    pub const DEFAULT_RATE_PER_SECOND: f64 = 1.0 / 3.0;

    pub const fn flat(rate_per_second: f64) -> Self {
        Self { rate_per_second }
    }
}

impl Default for RegenPolicy {
    fn default() -> Self {
        Self::flat(Self::DEFAULT_RATE_PER_SECOND)
    }
}

/// Values assigned to a freshly registered player.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StartingStats {
    pub balance: u64,
    pub capacity: f64,
    pub max_capacity: f64,
    pub defense_power: u32,
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            balance: 1000,
            capacity: 100.0,
            max_capacity: 100.0,
            defense_power: 100,
        }
    }
}

/// Ledger prices for paid actions, in the ledger's smallest unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PriceList {
    pub skip_cooldown: u64,
    pub refill_stamina: u64,
    pub upgrade_defense: u64,
}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            skip_cooldown: 5,
            refill_stamina: 5,
            upgrade_defense: 10,
        }
    }
}
