//! Calculation options and configuration.

use crate::constants::{
    DEFAULT_KARATSUBA_THRESHOLD, DEFAULT_MAX_EXPONENT, DEFAULT_MAX_FACTORIAL,
    DEFAULT_PARALLEL_THRESHOLD,
};

/// Options for the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Threshold (in limbs) at or below which multiplication is schoolbook.
    pub karatsuba_threshold: usize,
    /// Threshold (in limbs) for parallel Karatsuba sub-products
    /// (`usize::MAX` = never parallel).
    pub parallel_threshold: usize,
    /// Largest exponent the calculator accepts.
    pub max_exponent: u32,
    /// Largest factorial argument the calculator accepts.
    pub max_factorial: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            karatsuba_threshold: DEFAULT_KARATSUBA_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_exponent: DEFAULT_MAX_EXPONENT,
            max_factorial: DEFAULT_MAX_FACTORIAL,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.karatsuba_threshold == 0 {
            self.karatsuba_threshold = DEFAULT_KARATSUBA_THRESHOLD;
        }
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        if self.max_exponent == 0 {
            self.max_exponent = DEFAULT_MAX_EXPONENT;
        }
        if self.max_factorial == 0 {
            self.max_factorial = DEFAULT_MAX_FACTORIAL;
        }
        self
    }
}
