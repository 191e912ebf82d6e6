//! # apcalc-core
//!
//! Core library for the apcalc arbitrary-precision calculator.
//! Signed integers stored as radix-10^9 limbs, with Karatsuba
//! multiplication, truncating long division, power, factorial and base
//! conversion.

pub mod calculator;
pub mod constants;
pub mod convert;
pub mod division;
pub mod error;
pub mod integer;
pub(crate) mod limbs;
pub mod multiply;
pub mod options;
pub mod parse;
pub mod power;
pub mod strategy;

// Re-exports
pub use calculator::{Calculator, Operation, Outcome, UnknownOperation};
pub use constants::{
    exit_codes, DEFAULT_KARATSUBA_THRESHOLD, DEFAULT_MAX_EXPONENT, DEFAULT_MAX_FACTORIAL,
    DEFAULT_PARALLEL_THRESHOLD, LIMB_RADIX,
};
pub use error::ArithError;
pub use integer::ArbitraryInt;
pub use options::Options;
pub use strategy::{
    strategy_for, KaratsubaStrategy, Multiplier, ParallelKaratsubaStrategy, SchoolbookStrategy,
};

/// Parse two literals, apply `op` with default options, and return the
/// primary result (the quotient for division).
///
/// This is a convenience function for simple use cases. For limits and
/// strategy selection, use `Calculator` directly.
///
/// # Example
/// ```
/// use apcalc_core::Operation;
///
/// assert_eq!(apcalc_core::evaluate("123", Operation::Add, "456").unwrap().to_string(), "579");
/// assert_eq!(apcalc_core::evaluate("0xff", Operation::Multiply, "2").unwrap().to_string(), "510");
/// ```
pub fn evaluate(lhs: &str, op: Operation, rhs: &str) -> Result<ArbitraryInt, ArithError> {
    let lhs = ArbitraryInt::parse(lhs)?;
    let rhs = ArbitraryInt::parse(rhs)?;
    let outcome = Calculator::default().evaluate(op, &lhs, Some(&rhs))?;
    Ok(outcome.value().clone())
}
