//! Injected collaborators.
//!
//! The engine never touches an ambient random source, the wall clock, or a
//! global unit table. Callers pass implementations of these oracles so every
//! raid is reproducible from its inputs.
mod clock;
mod rng;
mod tables;

pub use clock::{ClockOracle, FixedClock};
pub use rng::{FixedRoll, PcgRng, RngOracle, derive_seed, seed_key_for};
pub use tables::TablesOracle;
