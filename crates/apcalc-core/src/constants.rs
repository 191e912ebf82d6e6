//! Constants for the limb representation, multiplication thresholds and limits.

/// Radix of one limb: each limb holds nine decimal digits.
pub const LIMB_RADIX: u32 = 1_000_000_000;

/// `LIMB_RADIX` widened for carry arithmetic.
pub const LIMB_RADIX_U64: u64 = LIMB_RADIX as u64;

/// Number of decimal digits stored per limb.
pub const LIMB_DIGITS: usize = 9;

/// Default threshold (in limbs) below which multiplication is schoolbook.
///
/// 32 limbs is roughly 288 decimal digits.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 32;

/// Default threshold (in limbs) for running Karatsuba sub-products in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Default ceiling on exponents accepted by the calculator front end.
pub const DEFAULT_MAX_EXPONENT: u32 = 1_000_000;

/// Default ceiling on factorial arguments accepted by the calculator front end.
pub const DEFAULT_MAX_FACTORIAL: u32 = 100_000;

/// Smallest radix accepted by radix conversion.
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by radix conversion (`0-9a-z`).
pub const MAX_RADIX: u32 = 36;

/// Process exit codes used by the `apcalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, unexpected failure).
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed command line or expression.
    pub const ERROR_USAGE: i32 = 2;
    /// The engine rejected the operation (division by zero, negative exponent, ...).
    pub const ERROR_ARITHMETIC: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_matches_digit_count() {
        assert_eq!(u64::from(LIMB_RADIX), 10u64.pow(LIMB_DIGITS as u32));
        assert_eq!(LIMB_RADIX_U64, u64::from(LIMB_RADIX));
    }

    #[test]
    fn limb_products_fit_accumulator() {
        // (R-1)^2 + 2*(R-1) must not overflow the u64 accumulator.
        let max = LIMB_RADIX_U64 - 1;
        assert!(max.checked_mul(max).and_then(|p| p.checked_add(2 * max)).is_some());
    }

    #[test]
    fn radix_bounds() {
        assert!(MIN_RADIX < MAX_RADIX);
        assert_eq!(MAX_RADIX, 36);
    }
}
