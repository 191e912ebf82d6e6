//! Schoolbook and Karatsuba multiplication over limb slices.
//!
//! Karatsuba splits both operands at half the shorter length `m`:
//!
//!   a = aHi·R^m + aLo,  b = bHi·R^m + bLo
//!   z0 = aLo·bLo,  z2 = aHi·bHi,  z1 = (aLo+aHi)(bLo+bHi) − z0 − z2
//!   a·b = z2·R^(2m) + z1·R^m + z0
//!
//! and recurses until either operand is at most `threshold` limbs, where
//! schoolbook multiplication takes over.

use crate::integer::ArbitraryInt;
use crate::limbs;
use crate::strategy::{KaratsubaStrategy, Multiplier};

/// Quadratic multiplication with a u64 accumulator. Result is trimmed.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn schoolbook(a: &[u32], b: &[u32]) -> Vec<u32> {
    let a = &a[..limbs::significant_len(a)];
    let b = &b[..limbs::significant_len(b)];
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }

    let mut result = vec![0u32; a.len() + b.len()];
    for (i, &multiplier) in a.iter().enumerate() {
        if multiplier == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &multiplicand) in b.iter().enumerate() {
            let (low, c) = limbs::mul_add(multiplier, multiplicand, result[i + j], carry);
            result[i + j] = low;
            carry = c;
        }
        // carry < R, and no earlier row has written result[i + b.len()].
        result[i + b.len()] = carry as u32;
    }
    limbs::trim(&mut result);
    result
}

/// Karatsuba multiplication. Result is trimmed.
///
/// The three sub-products run under `rayon::join` once the shorter operand
/// reaches `parallel_threshold` limbs; pass `usize::MAX` to stay sequential.
#[must_use]
pub fn karatsuba(a: &[u32], b: &[u32], threshold: usize, parallel_threshold: usize) -> Vec<u32> {
    let a = &a[..limbs::significant_len(a)];
    let b = &b[..limbs::significant_len(b)];
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }
    let threshold = threshold.max(1);
    let shorter = a.len().min(b.len());
    if shorter <= threshold {
        return schoolbook(a, b);
    }

    let m = shorter / 2;
    let (a_lo, a_hi) = a.split_at(m);
    let (b_lo, b_hi) = b.split_at(m);
    let a_sum = limbs::add(a_lo, a_hi);
    let b_sum = limbs::add(b_lo, b_hi);

    let recurse = |x: &[u32], y: &[u32]| karatsuba(x, y, threshold, parallel_threshold);
    let (z0, (z2, mut z1)) = if shorter >= parallel_threshold {
        rayon::join(
            || recurse(a_lo, b_lo),
            || rayon::join(|| recurse(a_hi, b_hi), || recurse(&a_sum, &b_sum)),
        )
    } else {
        (
            recurse(a_lo, b_lo),
            (recurse(a_hi, b_hi), recurse(&a_sum, &b_sum)),
        )
    };
    limbs::sub_assign(&mut z1, &z0);
    limbs::sub_assign(&mut z1, &z2);

    let mut result = vec![0u32; a.len() + b.len() + 1];
    limbs::add_at(&mut result, &z0, 0);
    limbs::add_at(&mut result, &z1, m);
    limbs::add_at(&mut result, &z2, 2 * m);
    limbs::trim(&mut result);
    result
}

impl ArbitraryInt {
    /// Multiply using the default Karatsuba dispatch.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        self.multiply_with(other, &KaratsubaStrategy::default())
    }

    /// Multiply with an explicit strategy.
    #[must_use]
    pub fn multiply_with(&self, other: &Self, strategy: &dyn Multiplier) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        tracing::debug!(
            strategy = strategy.name(),
            lhs_limbs = self.limb_count(),
            rhs_limbs = other.limb_count(),
            "multiply"
        );
        let negative = self.is_negative() != other.is_negative();
        Self::from_limbs(strategy.multiply(self.limbs(), other.limbs()), negative)
    }

    /// Square (always non-negative).
    #[must_use]
    pub fn square_with(&self, strategy: &dyn Multiplier) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self::from_limbs(strategy.square(self.limbs()), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LIMB_RADIX;

    fn int(s: &str) -> ArbitraryInt {
        s.parse().unwrap()
    }

    /// Deterministic pseudo-random limbs (xorshift).
    fn limbs_of(len: usize, mut seed: u64) -> Vec<u32> {
        (0..len)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                (seed % u64::from(LIMB_RADIX)) as u32
            })
            .collect()
    }

    #[test]
    fn schoolbook_small() {
        assert_eq!(schoolbook(&[123], &[456]), vec![56088]);
        assert_eq!(schoolbook(&[999_999], &[999_999]), vec![998_000_001, 999]);
        assert_eq!(schoolbook(&[0, 0], &[5]), vec![0]);
    }

    #[test]
    fn schoolbook_max_limbs() {
        let max = LIMB_RADIX - 1;
        // (R^2 - 1)^2 = R^4 - 2R^2 + 1
        assert_eq!(schoolbook(&[max, max], &[max, max]), vec![1, 0, max - 1, max]);
    }

    #[test]
    fn karatsuba_matches_schoolbook_straddling_threshold() {
        let threshold = 4;
        for (la, lb) in [(4, 4), (5, 5), (4, 9), (9, 4), (5, 40), (17, 16), (33, 31), (64, 64)] {
            let a = limbs_of(la, 0x9E37_79B9 + la as u64);
            let b = limbs_of(lb, 0x85EB_CA6B + lb as u64);
            assert_eq!(
                karatsuba(&a, &b, threshold, usize::MAX),
                schoolbook(&a, &b),
                "lengths ({la}, {lb})"
            );
        }
    }

    #[test]
    fn parallel_karatsuba_is_bit_identical() {
        let a = limbs_of(120, 7);
        let b = limbs_of(97, 11);
        assert_eq!(karatsuba(&a, &b, 4, 8), karatsuba(&a, &b, 4, usize::MAX));
    }

    #[test]
    fn karatsuba_with_zero_low_half() {
        let mut a = vec![0u32; 40];
        a.push(1);
        let b = limbs_of(41, 3);
        assert_eq!(karatsuba(&a, &b, 2, usize::MAX), schoolbook(&a, &b));
    }

    #[test]
    fn multiply_signs() {
        assert_eq!(int("123").multiply(&int("456")).to_string(), "56088");
        assert_eq!(int("-123").multiply(&int("456")).to_string(), "-56088");
        assert_eq!(int("123").multiply(&int("-456")).to_string(), "-56088");
        assert_eq!(int("-123").multiply(&int("-456")).to_string(), "56088");
        assert_eq!(int("-5").multiply(&int("0")).to_string(), "0");
        assert!(!int("-5").multiply(&int("0")).is_negative());
    }

    #[test]
    fn multiply_aliased_operand() {
        let x = int("-999999");
        assert_eq!(x.multiply(&x).to_string(), "999998000001");
        assert_eq!(x.to_string(), "-999999");
    }

    #[test]
    fn multiply_large_powers_of_ten() {
        let a = int(&format!("1{}", "0".repeat(400)));
        let b = int(&format!("1{}", "0".repeat(350)));
        assert_eq!(a.multiply(&b).to_string(), format!("1{}", "0".repeat(750)));
    }

    #[test]
    fn square_is_non_negative() {
        let s = KaratsubaStrategy::default();
        assert_eq!(int("-12").square_with(&s).to_string(), "144");
        assert_eq!(int("0").square_with(&s), ArbitraryInt::zero());
    }
}
