use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::state::UnitParseError;

/// Kind of trainable garrison unit.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TroopKind {
    Archers,
    Infantry,
    Giants,
}

impl TroopKind {
    /// Parses a troop identifier (`archers`, `infantry`, `giants`).
    pub fn parse(id: &str) -> Result<Self, UnitParseError> {
        id.trim()
            .parse()
            .map_err(|_| UnitParseError::InvalidUnitType(id.to_string()))
    }
}

/// Owned unit counts per troop kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TroopRoster {
    pub archers: u32,
    pub infantry: u32,
    pub giants: u32,
}

impl TroopRoster {
    pub const fn new(archers: u32, infantry: u32, giants: u32) -> Self {
        Self {
            archers,
            infantry,
            giants,
        }
    }

    pub const fn count(&self, kind: TroopKind) -> u32 {
        match kind {
            TroopKind::Archers => self.archers,
            TroopKind::Infantry => self.infantry,
            TroopKind::Giants => self.giants,
        }
    }

    /// Returns a copy with `kind` set to `count`.
    #[must_use]
    pub fn with_count(mut self, kind: TroopKind, count: u32) -> Self {
        match kind {
            TroopKind::Archers => self.archers = count,
            TroopKind::Infantry => self.infantry = count,
            TroopKind::Giants => self.giants = count,
        }
        self
    }

    pub fn total_units(&self) -> u32 {
        TroopKind::iter().map(|kind| self.count(kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_units() == 0
    }

    /// Iterates `(kind, count)` pairs in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (TroopKind, u32)> + '_ {
        TroopKind::iter().map(move |kind| (kind, self.count(kind)))
    }
}
