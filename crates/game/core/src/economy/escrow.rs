/// Platform fee taken from every wager pool, in percent.
pub const ESCROW_FEE_PERCENT: u64 = 2;

/// Below this destruction percentage the defender keeps the whole pool.
pub const MIN_DESTRUCTION_FOR_PAYOUT: f64 = 30.0;

/// How a wagered pool is split once a raid has been resolved.
///
/// `fee + attacker_share + defender_share` always equals the wager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscrowSettlement {
    pub fee: u64,
    pub attacker_share: u64,
    pub defender_share: u64,
}

/// Splits `wager` according to the raid's destruction percentage.
///
/// | destruction | attacker            | defender       |
/// |-------------|---------------------|----------------|
/// | `< 30`      | 0                   | pool           |
/// | `< 100`     | `pool * d / 100`    | the remainder  |
/// | `100`       | pool                | 0              |
///
/// where `pool` is the wager after the 2% fee.
pub fn settle_wager(wager: u64, destruction_percent: f64) -> EscrowSettlement {
    let fee = (u128::from(wager) * u128::from(ESCROW_FEE_PERCENT) / 100) as u64;
    let pool = wager - fee;

    let destruction = if destruction_percent.is_nan() {
        0.0
    } else {
        destruction_percent.clamp(0.0, 100.0)
    };

    let attacker_share = if destruction < MIN_DESTRUCTION_FOR_PAYOUT {
        0
    } else if destruction < 100.0 {
        ((pool as f64) * destruction / 100.0).floor() as u64
    } else {
        pool
    };

    EscrowSettlement {
        fee,
        attacker_share,
        defender_share: pool - attacker_share,
    }
}
