//! The random source every generator draw goes through.
//!
//! Any [`rand::RngCore`] is a [`RandomSource`], so a seeded
//! [`rand::rngs::StdRng`] gives reproducible output. The fixed sources here
//! make the walk fully predictable in tests.

use rand::{Rng, RngCore};

/// Uniform integer draws over an inclusive range.
pub trait RandomSource {
    /// Return an integer in `[lo, hi]`. Callers guarantee `lo <= hi`.
    fn range_inclusive(&mut self, lo: u64, hi: u64) -> u64;
}

impl<R: RngCore> RandomSource for R {
    fn range_inclusive(&mut self, lo: u64, hi: u64) -> u64 {
        self.random_range(lo..=hi)
    }
}

/// Always returns the lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestSource;

impl RandomSource for LowestSource {
    fn range_inclusive(&mut self, lo: u64, _hi: u64) -> u64 {
        lo
    }
}

/// Always returns the upper bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestSource;

impl RandomSource for HighestSource {
    fn range_inclusive(&mut self, _lo: u64, hi: u64) -> u64 {
        hi
    }
}

/// Replays a script of offsets from the lower bound, one per draw.
///
/// Offsets past the upper bound are clamped to it. Once the script is
/// exhausted every draw returns the lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    offsets: Vec<u64>,
    next: usize,
}

impl ScriptedSource {
    /// Create a source that replays `offsets` in order.
    pub fn new(offsets: Vec<u64>) -> Self {
        Self { offsets, next: 0 }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedSource {
    fn range_inclusive(&mut self, lo: u64, hi: u64) -> u64 {
        let offset = self.offsets.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        lo.saturating_add(offset).min(hi)
    }
}

/// Pick an index into a non-empty list of `len` items.
pub(crate) fn pick_index<S: RandomSource + ?Sized>(rng: &mut S, len: usize) -> usize {
    debug_assert!(len > 0);
    // Lossless: the draw never exceeds len - 1.
    rng.range_inclusive(0, len as u64 - 1) as usize
}
