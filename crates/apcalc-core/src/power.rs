//! Exponentiation by squaring and iterative factorial.

use crate::error::ArithError;
use crate::integer::ArbitraryInt;
use crate::limbs;
use crate::strategy::{KaratsubaStrategy, Multiplier};

impl ArbitraryInt {
    /// `self ^ exponent`.
    ///
    /// The exponent must be non-negative and fit a `u32`.
    ///
    /// # Example
    /// ```
    /// use apcalc_core::ArbitraryInt;
    ///
    /// let two = ArbitraryInt::from(2u32);
    /// let ten = ArbitraryInt::from(10u32);
    /// assert_eq!(two.power(&ten).unwrap().to_string(), "1024");
    /// ```
    pub fn power(&self, exponent: &Self) -> Result<Self, ArithError> {
        let exponent = native_exponent(exponent)?;
        Ok(self.pow_u32(exponent))
    }

    /// `self ^ exponent` with a native exponent.
    #[must_use]
    pub fn pow_u32(&self, exponent: u32) -> Self {
        self.pow_u32_with(exponent, &KaratsubaStrategy::default())
    }

    /// `self ^ exponent` using `strategy` for every multiply and square.
    #[must_use]
    pub fn pow_u32_with(&self, exponent: u32, strategy: &dyn Multiplier) -> Self {
        match exponent {
            0 => return Self::one(),
            1 => return self.clone(),
            _ => {}
        }
        if self.is_zero() {
            return Self::zero();
        }

        let mut acc = vec![1u32];
        let mut base = self.limbs().to_vec();
        let mut e = exponent;
        loop {
            if e & 1 == 1 {
                acc = strategy.multiply(&acc, &base);
            }
            e >>= 1;
            if e == 0 {
                break;
            }
            base = strategy.square(&base);
        }
        let negative = self.is_negative() && exponent % 2 == 1;
        Self::from_limbs(acc, negative)
    }

    /// `n!` for a non-negative `n` that fits a `u32`.
    pub fn factorial(&self) -> Result<Self, ArithError> {
        if self.is_negative() {
            return Err(ArithError::NegativeArgument);
        }
        let n = self.to_u32().ok_or(ArithError::ArgumentTooLarge)?;
        Ok(Self::factorial_u32(n))
    }

    /// `n!` with a native argument; `0! = 1! = 1`.
    #[must_use]
    pub fn factorial_u32(n: u32) -> Self {
        let mut acc = vec![1u32];
        for k in 2..=n {
            acc = limbs::mul_small(&acc, k);
        }
        tracing::trace!(n, limbs = acc.len(), "factorial");
        Self::from_limbs(acc, false)
    }
}

/// Validate an exponent operand and decode it exactly.
pub(crate) fn native_exponent(exponent: &ArbitraryInt) -> Result<u32, ArithError> {
    if exponent.is_negative() {
        return Err(ArithError::NegativeExponent);
    }
    exponent.to_u32().ok_or(ArithError::ExponentTooLarge)
}
