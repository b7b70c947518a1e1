//! Seedable randomness for question generation.
//!
//! Every random choice in the crate takes `&mut impl Rng`, so callers decide
//! whether a drill is reproducible. These helpers create the PCG32 generator
//! used by the session and the drill binary.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a deterministic generator from a 64-bit seed.
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Creates a generator seeded from the operating system.
pub fn from_entropy() -> Pcg32 {
    Pcg32::from_entropy()
}
