//! Deterministic random number generation for league simulation.
//!
//! Every league operation that rolls dice builds its own `LeagueRng` from
//! the seed it was given, so the same calls with the same seeds replay the
//! same league.
//!
//! ```
//! use card_league::core::LeagueRng;
//!
//! let mut a = LeagueRng::new(42);
//! let mut b = LeagueRng::new(42);
//! assert_eq!(a.gen_index(100), b.gen_index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream, stable across platforms.
#[derive(Clone, Debug)]
pub struct LeagueRng {
    inner: ChaCha8Rng,
}

impl LeagueRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Integer in the half-open range.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Integer in the inclusive range.
    pub fn gen_range_u32(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Index in `0..len`.
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Float uniformly in `[low, high]`; `low` when the interval is degenerate.
    pub fn gen_f64_range(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..=high)
    }
}
