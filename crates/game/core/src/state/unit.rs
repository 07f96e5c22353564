use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{ErrorSeverity, GameError};

/// Combat affinity of a player's army.
///
/// Advantage is cyclic: Infantry beats Archer, Archer beats Cavalry, and
/// Cavalry beats Infantry.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitType {
    #[default]
    Infantry,
    Archer,
    Cavalry,
}

impl UnitType {
    /// The unit type this one has the advantage over.
    pub const fn counters(self) -> UnitType {
        match self {
            Self::Infantry => Self::Archer,
            Self::Archer => Self::Cavalry,
            Self::Cavalry => Self::Infantry,
        }
    }

    /// Parses a unit name case-insensitively.
    pub fn parse(name: &str) -> Result<Self, UnitParseError> {
        name.trim()
            .parse()
            .map_err(|_| UnitParseError::InvalidUnitType(name.to_string()))
    }
}

/// Raised when a unit or troop identifier is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitParseError {
    #[error("unknown unit type '{0}'")]
    InvalidUnitType(String),
}

impl GameError for UnitParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUnitType(_) => "invalid_unit_type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn counter_cycle_is_closed() {
        for unit in UnitType::iter() {
            assert_ne!(unit.counters(), unit);
            assert_eq!(unit.counters().counters().counters(), unit);
        }
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!(UnitType::parse("archer"), Ok(UnitType::Archer));
        assert_eq!(UnitType::parse("CAVALRY"), Ok(UnitType::Cavalry));
        assert_eq!(UnitType::parse(" Infantry "), Ok(UnitType::Infantry));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = UnitType::parse("dragon").unwrap_err();
        assert_eq!(err, UnitParseError::InvalidUnitType("dragon".into()));
        assert_eq!(err.error_code(), "invalid_unit_type");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
