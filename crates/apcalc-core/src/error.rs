//! Error type shared by every arithmetic operation.

/// Error type for arbitrary-precision arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// Malformed or empty numeric literal.
    #[error("invalid number format: {0}")]
    InvalidFormat(String),

    /// Divisor magnitude is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// `power` was called with a negative exponent.
    #[error("negative exponents are not supported")]
    NegativeExponent,

    /// `factorial` was called with a negative argument.
    #[error("factorial is not defined for negative numbers")]
    NegativeArgument,

    /// Exponent does not fit a native `u32`.
    #[error("exponent too large (must fit in 32 bits)")]
    ExponentTooLarge,

    /// Factorial argument does not fit a native `u32`.
    #[error("factorial argument too large (must fit in 32 bits)")]
    ArgumentTooLarge,

    /// Radix outside `[2, 36]`.
    #[error("base must be between 2 and 36, got {0}")]
    InvalidBase(u32),

    /// Base conversion could not produce a readable intermediate value.
    #[error("base conversion failed: {0}")]
    ConversionFailure(String),

    /// A binary operation was evaluated without its right-hand operand.
    #[error("operation '{0}' requires two operands")]
    MissingOperand(&'static str),

    /// Operand exceeds a configured ceiling.
    #[error("{what} {value} exceeds the configured limit of {limit}")]
    LimitExceeded {
        /// What was limited ("exponent" or "factorial argument").
        what: &'static str,
        /// The rejected value.
        value: u32,
        /// The configured ceiling.
        limit: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arith_error_display() {
        assert_eq!(ArithError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            ArithError::InvalidBase(1).to_string(),
            "base must be between 2 and 36, got 1"
        );
        assert_eq!(
            ArithError::InvalidFormat("12a".into()).to_string(),
            "invalid number format: 12a"
        );
    }

    #[test]
    fn limit_exceeded_display() {
        let err = ArithError::LimitExceeded {
            what: "exponent",
            value: 10,
            limit: 5,
        };
        assert_eq!(
            err.to_string(),
            "exponent 10 exceeds the configured limit of 5"
        );
    }
}
