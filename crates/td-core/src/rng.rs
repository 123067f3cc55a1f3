//! Seeded simulation RNG.
//!
//! Every dashboard owns one `SimRng`.  Each panel draws from its own child
//! stream (see [`SimRng::child`]) so spawning or resetting one panel never
//! shifts the random sequence seen by the other.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Point, SpawnRange};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic RNG: the same seed always yields the same spawn layout.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream keyed by `offset`.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Draw uniformly from `[range.min, range.max)`.
    ///
    /// A degenerate range (min >= max) yields `range.min` rather than
    /// panicking; callers validate ranges at build time.
    #[inline]
    pub fn sample(&mut self, range: SpawnRange) -> f32 {
        if range.min >= range.max {
            return range.min;
        }
        self.0.gen_range(range.min..range.max)
    }

    /// A point uniformly distributed over `[0, width) × [0, height)`.
    pub fn point_within(&mut self, width: f32, height: f32) -> Point {
        Point::new(
            self.sample(SpawnRange::new(0.0, width)),
            self.sample(SpawnRange::new(0.0, height)),
        )
    }
}
