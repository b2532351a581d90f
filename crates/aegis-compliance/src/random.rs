//! # Random Sources
//!
//! Route evaluation draws its distance, cost, and (for non-excluded routes)
//! score from a [`RandomSource`] passed in by the caller. Nothing in the
//! engine touches an ambient generator, so tests can pin every output.
//!
//! | Source | Use |
//! |--------|-----|
//! | [`ThreadRandom`] | Production. Backed by `rand::thread_rng()`, one generator per thread. |
//! | [`SeededRandom`] | Reproducible runs (`aegis route --seed`). `StdRng` seeded from a `u64`. |
//! | [`ScriptedRandom`] | Tests. Replays a fixed sequence. |

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed integers over a closed range.
pub trait RandomSource {
    /// Draw one value from `[lo, hi]`.
    ///
    /// Implementations treat a reversed range as `[hi, lo]`.
    fn uniform(&mut self, lo: u32, hi: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, lo: u32, hi: u32) -> u32 {
        (**self).uniform(lo, hi)
    }
}

fn ordered(lo: u32, hi: u32) -> (u32, u32) {
    if lo <= hi {
        (lo, hi)
    } else {
        (hi, lo)
    }
}

/// Thread-local OS-seeded generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&mut self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = ordered(lo, hi);
        rand::thread_rng().gen_range(lo..=hi)
    }
}

/// Deterministic generator seeded from a `u64`.
///
/// The same seed yields the same draw sequence for a given `rand` release.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = ordered(lo, hi);
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays a fixed sequence of values.
///
/// Each value is clamped into the requested range. Once the sequence is
/// exhausted every further draw returns `lo`. [`ScriptedRandom::draws`]
/// reports how many values have been requested so far.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
    draws: usize,
}

impl ScriptedRandom {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of draws made.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = ordered(lo, hi);
        self.draws += 1;
        self.values.pop_front().map_or(lo, |v| v.clamp(lo, hi))
    }
}
