//! Garrison training validation and roster power.

use crate::env::TablesOracle;
use crate::error::{ErrorSeverity, GameError};

use super::{TroopKind, TroopRoster};

/// Reasons a unit cannot be trained.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainError {
    #[error("{kind} limit reached ({limit})")]
    UnitLimitReached { kind: TroopKind, limit: u32 },

    #[error("insufficient garrison capacity: need {required}, {available} free")]
    InsufficientCapacity { required: u32, available: u32 },
}

impl GameError for TrainError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnitLimitReached { .. } => "unit_limit_reached",
            Self::InsufficientCapacity { .. } => "insufficient_capacity",
        }
    }
}

/// Garrison capacity occupied by a roster.
pub fn used_capacity(roster: &TroopRoster, tables: &(impl TablesOracle + ?Sized)) -> u32 {
    roster
        .iter()
        .map(|(kind, count)| count.saturating_mul(tables.unit_profile(kind).capacity_cost))
        .fold(0u32, u32::saturating_add)
}

/// Raid power of a roster: sum of `count * damage_per_unit`.
pub fn total_damage(roster: &TroopRoster, tables: &(impl TablesOracle + ?Sized)) -> u32 {
    roster
        .iter()
        .map(|(kind, count)| count.saturating_mul(tables.unit_profile(kind).damage_per_unit))
        .fold(0u32, u32::saturating_add)
}

/// Validates training one more `kind` unit and returns the grown roster.
///
/// The limit check runs first, then the garrison ceiling. The input roster is
/// never modified; on error the caller still holds it unchanged.
pub fn can_train(
    roster: &TroopRoster,
    kind: TroopKind,
    tables: &(impl TablesOracle + ?Sized),
) -> Result<TroopRoster, TrainError> {
    let profile = tables.unit_profile(kind);
    let owned = roster.count(kind);

    if owned >= profile.limit {
        return Err(TrainError::UnitLimitReached {
            kind,
            limit: profile.limit,
        });
    }

    let used = used_capacity(roster, tables);
    let ceiling = tables.garrison_ceiling();
    if used.saturating_add(profile.capacity_cost) > ceiling {
        return Err(TrainError::InsufficientCapacity {
            required: profile.capacity_cost,
            available: ceiling.saturating_sub(used),
        });
    }

    Ok(roster.with_count(kind, owned + 1))
}
