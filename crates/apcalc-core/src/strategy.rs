//! Multiplication strategy traits and implementations.
//!
//! `Multiplier` is the narrow interface for multiply/square operations on
//! magnitudes. Strategies include schoolbook, Karatsuba, and a Karatsuba
//! variant that runs its three sub-products on the rayon pool.

use std::sync::Arc;

use crate::constants::{DEFAULT_KARATSUBA_THRESHOLD, DEFAULT_PARALLEL_THRESHOLD};
use crate::multiply::{karatsuba, schoolbook};
use crate::options::Options;

/// Narrow interface for multiplication operations (ISP).
pub trait Multiplier: Send + Sync {
    /// Multiply two little-endian radix-10^9 magnitudes. Result is trimmed.
    fn multiply(&self, a: &[u32], b: &[u32]) -> Vec<u32>;

    /// Square a magnitude (may be optimized over multiply).
    fn square(&self, a: &[u32]) -> Vec<u32> {
        self.multiply(a, a)
    }

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Quadratic multiplication regardless of operand size.
pub struct SchoolbookStrategy;

impl SchoolbookStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchoolbookStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for SchoolbookStrategy {
    fn multiply(&self, a: &[u32], b: &[u32]) -> Vec<u32> {
        schoolbook(a, b)
    }

    fn name(&self) -> &'static str {
        "Schoolbook"
    }
}

/// Karatsuba above `threshold` limbs, schoolbook at or below it.
pub struct KaratsubaStrategy {
    threshold: usize,
}

impl KaratsubaStrategy {
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold: threshold.max(1),
        }
    }

    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for KaratsubaStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_KARATSUBA_THRESHOLD)
    }
}

impl Multiplier for KaratsubaStrategy {
    fn multiply(&self, a: &[u32], b: &[u32]) -> Vec<u32> {
        karatsuba(a, b, self.threshold, usize::MAX)
    }

    fn name(&self) -> &'static str {
        "Karatsuba"
    }
}

/// Parallel Karatsuba strategy that uses `rayon::join` to run the three
/// independent sub-products when the shorter operand reaches
/// `parallel_threshold` limbs. Results are identical to `KaratsubaStrategy`.
pub struct ParallelKaratsubaStrategy {
    threshold: usize,
    parallel_threshold: usize,
}

impl ParallelKaratsubaStrategy {
    #[must_use]
    pub fn new(threshold: usize, parallel_threshold: usize) -> Self {
        Self {
            threshold: threshold.max(1),
            parallel_threshold: parallel_threshold.max(1),
        }
    }
}

impl Default for ParallelKaratsubaStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_KARATSUBA_THRESHOLD, DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl Multiplier for ParallelKaratsubaStrategy {
    fn multiply(&self, a: &[u32], b: &[u32]) -> Vec<u32> {
        karatsuba(a, b, self.threshold, self.parallel_threshold)
    }

    fn name(&self) -> &'static str {
        "ParallelKaratsuba"
    }
}

/// Pick the strategy described by `opts`.
///
/// A parallel threshold of `usize::MAX` means "never parallel" and yields a
/// plain `KaratsubaStrategy`.
#[must_use]
pub fn strategy_for(opts: &Options) -> Arc<dyn Multiplier> {
    if opts.parallel_threshold == usize::MAX {
        Arc::new(KaratsubaStrategy::new(opts.karatsuba_threshold))
    } else {
        Arc::new(ParallelKaratsubaStrategy::new(
            opts.karatsuba_threshold,
            opts.parallel_threshold,
        ))
    }
}
