use crate::troops::{TroopKind, UnitProfile};

/// Static troop tables used by garrison training and roster power.
///
/// The built-in [`crate::troops::UnitTables`] implements this with the live
/// balance values; content loaders can supply alternative tables.
pub trait TablesOracle: Send + Sync {
    /// Cost, damage and per-kind limit for a troop kind.
    fn unit_profile(&self, kind: TroopKind) -> UnitProfile;

    /// Total garrison capacity a roster may occupy.
    fn garrison_ceiling(&self) -> u32;
}
