//! Raid eligibility errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Timestamp;

/// Reasons a raid is rejected before it is fought.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RaidError {
    #[error("army is resting until {until} (now {now})")]
    OnCooldown { until: Timestamp, now: Timestamp },

    #[error("insufficient stamina: need {required}, have {available:.1}")]
    InsufficientStamina { required: f64, available: f64 },
}

impl RaidError {
    /// Whole seconds until the cooldown ends, rounded up. 0 for other errors.
    pub fn remaining_cooldown_secs(&self) -> u64 {
        match self {
            Self::OnCooldown { until, now } => until.millis_since(*now).div_ceil(1000),
            Self::InsufficientStamina { .. } => 0,
        }
    }
}

impl GameError for RaidError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OnCooldown { .. } => "on_cooldown",
            Self::InsufficientStamina { .. } => "insufficient_stamina",
        }
    }
}
