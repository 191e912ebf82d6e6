//! Truncating long division.
//!
//! The dividend is consumed one limb at a time from the most significant
//! end. For a divisor of `n >= 2` limbs, each quotient limb is bracketed
//! from the top three remainder limbs and the top two divisor limbs:
//!
//!   r_top = r[n]·R² + r[n−1]·R + r[n−2]
//!   d_top = d[n−1]·R + d[n−2]
//!   r_top / (d_top + 1)  <=  q  <=  min(r_top / d_top, R − 1)
//!
//! The bracket is at most a couple of values wide and is resolved by binary
//! search with a scalar multiply and a compare.

use std::cmp::Ordering;

use crate::constants::{LIMB_RADIX, LIMB_RADIX_U64};
use crate::error::ArithError;
use crate::integer::ArbitraryInt;
use crate::limbs;

impl ArbitraryInt {
    /// Truncating division -> `(quotient, remainder)`.
    ///
    /// The quotient rounds toward zero; the remainder carries the sign of
    /// the dividend and satisfies `self = quotient * divisor + remainder`
    /// with `|remainder| < |divisor|`.
    pub fn divide(&self, divisor: &Self) -> Result<(Self, Self), ArithError> {
        if divisor.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        if self.compare_magnitude(divisor) == Ordering::Less {
            return Ok((Self::zero(), self.clone()));
        }

        let (quotient, remainder) = divide_magnitudes(self.limbs(), divisor.limbs());
        let quotient_negative = self.is_negative() != divisor.is_negative();
        Ok((
            Self::from_limbs(quotient, quotient_negative),
            Self::from_limbs(remainder, self.is_negative()),
        ))
    }

    /// Remainder of truncating division (sign follows the dividend).
    pub fn modulo(&self, divisor: &Self) -> Result<Self, ArithError> {
        self.divide(divisor).map(|(_, remainder)| remainder)
    }
}

/// Divide trimmed magnitudes, `divisor` non-zero.
fn divide_magnitudes(dividend: &[u32], divisor: &[u32]) -> (Vec<u32>, Vec<u32>) {
    if divisor.len() == 1 {
        let (quotient, rem) = limbs::div_small(dividend, divisor[0]);
        return (quotient, vec![rem]);
    }

    let n = divisor.len();
    let d_top = u128::from(divisor[n - 1]) * u128::from(LIMB_RADIX) + u128::from(divisor[n - 2]);

    let mut quotient = vec![0u32; dividend.len()];
    let mut rem: Vec<u32> = vec![0];
    let mut probes = 0usize;

    for (i, &limb) in dividend.iter().enumerate().rev() {
        // rem = rem * R + limb
        rem.insert(0, limb);
        limbs::trim(&mut rem);
        if limbs::compare(&rem, divisor) == Ordering::Less {
            continue;
        }

        let top = |k: usize| u128::from(rem.get(k).copied().unwrap_or(0));
        let radix = u128::from(LIMB_RADIX);
        let r_top = top(n) * radix * radix + top(n - 1) * radix + top(n - 2);

        let mut lo = narrow(r_top / (d_top + 1));
        let mut hi = narrow((r_top / d_top).min(radix - 1));
        // Largest q in [lo, hi] with divisor * q <= rem; lo always qualifies.
        while lo < hi {
            probes += 1;
            let mid = lo + (hi - lo).div_ceil(2);
            if limbs::compare(&limbs::mul_small(divisor, mid), &rem) == Ordering::Greater {
                hi = mid - 1;
            } else {
                lo = mid;
            }
        }

        limbs::sub_assign(&mut rem, &limbs::mul_small(divisor, lo));
        quotient[i] = lo;
    }

    tracing::trace!(
        dividend_limbs = dividend.len(),
        divisor_limbs = n,
        probes,
        "long division"
    );
    limbs::trim(&mut quotient);
    (quotient, rem)
}

/// A bracket bound is always below `R`.
#[allow(clippy::cast_possible_truncation)]
fn narrow(value: u128) -> u32 {
    debug_assert!(value < u128::from(LIMB_RADIX_U64));
    value as u32
}
