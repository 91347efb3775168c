//! Injectable randomness for outfit generation.
//!
//! Layer randomization never touches a global generator.  Callers hand in a
//! [`RandomSource`]: production code wraps a `rand` RNG in [`RngSource`],
//! tests use [`ScriptedRandom`] to pin the exact picks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..upper`.
    ///
    /// Callers guarantee `upper > 0`.
    fn index_below(&mut self, upper: usize) -> usize;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Seeds a standard generator from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A reproducible generator: the same seed yields the same outfits.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index_below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed sequence of picks, cycling when exhausted.
///
/// Each pick is reduced modulo `upper`, so the result is always in range
/// regardless of the layer size it is applied to.  An empty script always
/// yields `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    next: usize,
    calls: Vec<usize>,
}

impl ScriptedRandom {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            next: 0,
            calls: Vec::new(),
        }
    }

    /// The `upper` bound of every call so far, in call order.
    pub fn calls(&self) -> &[usize] {
        &self.calls
    }
}

impl RandomSource for ScriptedRandom {
    fn index_below(&mut self, upper: usize) -> usize {
        self.calls.push(upper);
        if self.picks.is_empty() || upper == 0 {
            return 0;
        }
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % upper
    }
}
