//! The `ArbitraryInt` type: representation, comparison, addition and subtraction.
//!
//! The magnitude is a little-endian vector of radix-10^9 limbs. Every value
//! handed out by this crate is normalized:
//!
//! - no most-significant zero limb, zero is exactly `[0]`
//! - zero is never negative
//! - every limb is below `LIMB_RADIX`
//!
//! Values are immutable; every operation borrows its operands and returns a
//! new value, so passing the same value on both sides is always safe.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::constants::{LIMB_DIGITS, LIMB_RADIX_U64};
use crate::limbs;

/// Arbitrary-precision signed integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArbitraryInt {
    limbs: Vec<u32>,
    negative: bool,
}

impl ArbitraryInt {
    /// Build a value from raw limbs and a sign, restoring the invariants.
    pub(crate) fn from_limbs(mut limbs: Vec<u32>, negative: bool) -> Self {
        limbs::trim(&mut limbs);
        let negative = negative && !limbs::is_zero(&limbs);
        Self { limbs, negative }
    }

    /// Canonical zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            limbs: vec![0],
            negative: false,
        }
    }

    /// One.
    #[must_use]
    pub fn one() -> Self {
        Self {
            limbs: vec![1],
            negative: false,
        }
    }

    /// Little-endian radix-10^9 limbs of the magnitude.
    #[must_use]
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// Number of limbs in the magnitude.
    #[must_use]
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Number of decimal digits in the magnitude (`0` has one digit).
    #[must_use]
    pub fn digit_count(&self) -> usize {
        let top = self.limbs[self.limbs.len() - 1];
        let top_digits = top.checked_ilog10().map_or(1, |d| d as usize + 1);
        (self.limbs.len() - 1) * LIMB_DIGITS + top_digits
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// -1, 0 or 1.
    #[must_use]
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            limbs: self.limbs.clone(),
            negative: false,
        }
    }

    /// Value with the opposite sign (zero stays non-negative).
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            limbs: self.limbs.clone(),
            negative: !self.negative && !self.is_zero(),
        }
    }

    /// Decode into a `u64` if the value is non-negative and fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        self.limbs.iter().rev().try_fold(0u64, |acc, &limb| {
            acc.checked_mul(LIMB_RADIX_U64)?.checked_add(u64::from(limb))
        })
    }

    /// Decode into a `u32` if the value is non-negative and fits.
    #[must_use]
    pub fn to_u32(&self) -> Option<u32> {
        self.to_u64().and_then(|v| u32::try_from(v).ok())
    }

    /// Compare magnitudes, ignoring signs.
    #[must_use]
    pub fn compare_magnitude(&self, other: &Self) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }
        self.limbs.iter().rev().cmp(other.limbs.iter().rev())
    }

    /// Signed comparison.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.compare_magnitude(other),
            (true, true) => self.compare_magnitude(other).reverse(),
        }
    }

    /// Sign-aware addition.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.add_signed(other, other.negative)
    }

    /// Sign-aware subtraction, `self - other`.
    ///
    /// `other` is only read; its sign is inverted in the local dispatch.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.add_signed(other, !other.negative && !other.is_zero())
    }

    /// `self + (±|other|)` where `other_negative` gives the sign to use.
    fn add_signed(&self, other: &Self, other_negative: bool) -> Self {
        if self.negative == other_negative {
            return Self::from_limbs(limbs::add(&self.limbs, &other.limbs), self.negative);
        }
        match self.compare_magnitude(other) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                Self::from_limbs(limbs::sub(&self.limbs, &other.limbs), self.negative)
            }
            Ordering::Less => {
                Self::from_limbs(limbs::sub(&other.limbs, &self.limbs), other_negative)
            }
        }
    }
}

impl Default for ArbitraryInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for ArbitraryInt {
    #[allow(clippy::cast_possible_truncation)]
    fn from(mut value: u64) -> Self {
        let mut limbs = Vec::with_capacity(3);
        loop {
            limbs.push((value % LIMB_RADIX_U64) as u32);
            value /= LIMB_RADIX_U64;
            if value == 0 {
                break;
            }
        }
        Self {
            limbs,
            negative: false,
        }
    }
}

impl From<u32> for ArbitraryInt {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<i64> for ArbitraryInt {
    fn from(value: i64) -> Self {
        let magnitude = Self::from(value.unsigned_abs());
        if value < 0 {
            magnitude.negate()
        } else {
            magnitude
        }
    }
}

impl Ord for ArbitraryInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for ArbitraryInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ArbitraryInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.limbs.len() * LIMB_DIGITS);
        let mut iter = self.limbs.iter().rev();
        if let Some(top) = iter.next() {
            digits.push_str(&top.to_string());
        }
        for limb in iter {
            digits.push_str(&format!("{limb:09}"));
        }
        f.pad_integral(!self.negative, "", &digits)
    }
}

// Operators are implemented on references only so that method calls such as
// `a.add(&b)` always resolve to the inherent methods.
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait<&ArbitraryInt> for &ArbitraryInt {
            type Output = ArbitraryInt;

            fn $method(self, rhs: &ArbitraryInt) -> ArbitraryInt {
                ArbitraryInt::$inherent(self, rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);

impl Neg for &ArbitraryInt {
    type Output = ArbitraryInt;

    fn neg(self) -> ArbitraryInt {
        self.negate()
    }
}

impl Neg for ArbitraryInt {
    type Output = ArbitraryInt;

    fn neg(self) -> ArbitraryInt {
        self.negate()
    }
}
