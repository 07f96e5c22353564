use crate::env::TablesOracle;

use super::TroopKind;

/// Static stats of one troop kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitProfile {
    /// Garrison capacity occupied by each unit.
    pub capacity_cost: u32,
    /// Raid damage contributed by each unit.
    pub damage_per_unit: u32,
    /// Maximum number of units of this kind a roster may hold.
    pub limit: u32,
}

impl UnitProfile {
    pub const fn new(capacity_cost: u32, damage_per_unit: u32, limit: u32) -> Self {
        Self {
            capacity_cost,
            damage_per_unit,
            limit,
        }
    }
}

/// Data-backed troop tables.
///
/// `Default` carries the live balance values; content files may override
/// any of them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTables {
    pub garrison_ceiling: u32,
    pub archers: UnitProfile,
    pub infantry: UnitProfile,
    pub giants: UnitProfile,
}

impl UnitTables {
    pub const DEFAULT_GARRISON_CEILING: u32 = 100;

    pub const fn standard() -> Self {
        Self {
            garrison_ceiling: Self::DEFAULT_GARRISON_CEILING,
            archers: UnitProfile::new(5, 3, 4),
            infantry: UnitProfile::new(10, 5, 3),
            giants: UnitProfile::new(20, 7, 3),
        }
    }
}

impl Default for UnitTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl TablesOracle for UnitTables {
    fn unit_profile(&self, kind: TroopKind) -> UnitProfile {
        match kind {
            TroopKind::Archers => self.archers,
            TroopKind::Infantry => self.infantry,
            TroopKind::Giants => self.giants,
        }
    }

    fn garrison_ceiling(&self) -> u32 {
        self.garrison_ceiling
    }
}
