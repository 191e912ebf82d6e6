//! Operation dispatch for front ends.
//!
//! `Operation` names what the user asked for, `Calculator` applies it with
//! the configured multiplication strategy and operand limits, and `Outcome`
//! carries either a single value or a quotient/remainder pair.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ArithError;
use crate::integer::ArbitraryInt;
use crate::options::Options;
use crate::power::native_exponent;
use crate::strategy::{strategy_for, Multiplier};

/// Arithmetic operations a front end can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    Factorial,
}

impl Operation {
    /// Canonical operator token.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Modulo => "%",
            Self::Factorial => "!",
        }
    }

    /// `true` for operations that take a single operand.
    #[must_use]
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Factorial)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Token that does not name an operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Self::Add,
            "-" | "sub" => Self::Subtract,
            "*" | "mul" | "mult" => Self::Multiply,
            "/" | "div" => Self::Divide,
            "^" | "pow" => Self::Power,
            "%" | "mod" => Self::Modulo,
            "!" | "factorial" => Self::Factorial,
            _ => return Err(UnknownOperation(s.trim().to_string())),
        };
        Ok(op)
    }
}

/// Result of evaluating an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Value(ArbitraryInt),
    QuotientRemainder {
        quotient: ArbitraryInt,
        remainder: ArbitraryInt,
    },
}

impl Outcome {
    /// The primary value: the result itself, or the quotient.
    #[must_use]
    pub fn value(&self) -> &ArbitraryInt {
        match self {
            Self::Value(v) => v,
            Self::QuotientRemainder { quotient, .. } => quotient,
        }
    }
}

/// Applies operations with a fixed strategy and limits.
pub struct Calculator {
    options: Options,
    multiplier: Arc<dyn Multiplier>,
}

impl Calculator {
    #[must_use]
    pub fn new(options: Options) -> Self {
        let options = options.normalize();
        let multiplier = strategy_for(&options);
        Self {
            options,
            multiplier,
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the multiplication strategy in use.
    #[must_use]
    pub fn strategy_name(&self) -> &str {
        self.multiplier.name()
    }

    /// Evaluate `op`. Binary operations require `rhs`; unary ones ignore it.
    pub fn evaluate(
        &self,
        op: Operation,
        lhs: &ArbitraryInt,
        rhs: Option<&ArbitraryInt>,
    ) -> Result<Outcome, ArithError> {
        tracing::debug!(
            op = op.symbol(),
            lhs_limbs = lhs.limb_count(),
            rhs_limbs = rhs.map(ArbitraryInt::limb_count),
            strategy = self.multiplier.name(),
            "evaluate"
        );

        let value = match (op, rhs) {
            (Operation::Factorial, _) => self.factorial(lhs)?,
            (_, None) => return Err(ArithError::MissingOperand(op.symbol())),
            (Operation::Add, Some(rhs)) => lhs.add(rhs),
            (Operation::Subtract, Some(rhs)) => lhs.subtract(rhs),
            (Operation::Multiply, Some(rhs)) => lhs.multiply_with(rhs, self.multiplier.as_ref()),
            (Operation::Divide, Some(rhs)) => {
                let (quotient, remainder) = lhs.divide(rhs)?;
                return Ok(Outcome::QuotientRemainder {
                    quotient,
                    remainder,
                });
            }
            (Operation::Modulo, Some(rhs)) => lhs.modulo(rhs)?,
            (Operation::Power, Some(rhs)) => self.power(lhs, rhs)?,
        };
        Ok(Outcome::Value(value))
    }

    fn power(&self, base: &ArbitraryInt, exponent: &ArbitraryInt) -> Result<ArbitraryInt, ArithError> {
        let exponent = native_exponent(exponent)?;
        if exponent > self.options.max_exponent {
            return Err(ArithError::LimitExceeded {
                what: "exponent",
                value: exponent,
                limit: self.options.max_exponent,
            });
        }
        Ok(base.pow_u32_with(exponent, self.multiplier.as_ref()))
    }

    fn factorial(&self, n: &ArbitraryInt) -> Result<ArbitraryInt, ArithError> {
        if n.is_negative() {
            return Err(ArithError::NegativeArgument);
        }
        let n = n.to_u32().ok_or(ArithError::ArgumentTooLarge)?;
        if n > self.options.max_factorial {
            return Err(ArithError::LimitExceeded {
                what: "factorial argument",
                value: n,
                limit: self.options.max_factorial,
            });
        }
        Ok(ArbitraryInt::factorial_u32(n))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> ArbitraryInt {
        s.parse().unwrap()
    }

    fn eval(op: Operation, a: &str, b: Option<&str>) -> Result<Outcome, ArithError> {
        let rhs = b.map(int);
        Calculator::default().evaluate(op, &int(a), rhs.as_ref())
    }

    #[test]
    fn operation_tokens() {
        assert_eq!("+".parse(), Ok(Operation::Add));
        assert_eq!("SUB".parse(), Ok(Operation::Subtract));
        assert_eq!("mult".parse(), Ok(Operation::Multiply));
        assert_eq!("Mul".parse(), Ok(Operation::Multiply));
        assert_eq!("div".parse(), Ok(Operation::Divide));
        assert_eq!("^".parse(), Ok(Operation::Power));
        assert_eq!("MOD".parse(), Ok(Operation::Modulo));
        assert_eq!("Factorial".parse(), Ok(Operation::Factorial));
        assert_eq!(
            "&".parse::<Operation>(),
            Err(UnknownOperation("&".into()))
        );
    }

    #[test]
    fn symbols_parse_back() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
            Operation::Power,
            Operation::Modulo,
            Operation::Factorial,
        ] {
            assert_eq!(op.symbol().parse(), Ok(op));
            assert_eq!(op.is_unary(), op == Operation::Factorial);
        }
    }

    #[test]
    fn binary_dispatch() {
        assert_eq!(
            eval(Operation::Add, "123", Some("456")).unwrap(),
            Outcome::Value(int("579"))
        );
        assert_eq!(
            eval(Operation::Multiply, "-123", Some("456")).unwrap(),
            Outcome::Value(int("-56088"))
        );
        assert_eq!(
            eval(Operation::Power, "2", Some("10")).unwrap(),
            Outcome::Value(int("1024"))
        );
        assert_eq!(
            eval(Operation::Modulo, "-17", Some("5")).unwrap(),
            Outcome::Value(int("-2"))
        );
    }

    #[test]
    fn division_outcome() {
        let outcome = eval(Operation::Divide, "1000", Some("3")).unwrap();
        assert_eq!(
            outcome,
            Outcome::QuotientRemainder {
                quotient: int("333"),
                remainder: int("1"),
            }
        );
        assert_eq!(outcome.value(), &int("333"));
        assert_eq!(
            eval(Operation::Divide, "1", Some("0")),
            Err(ArithError::DivisionByZero)
        );
    }

    #[test]
    fn factorial_ignores_rhs() {
        assert_eq!(
            eval(Operation::Factorial, "5", None).unwrap(),
            Outcome::Value(int("120"))
        );
        assert_eq!(
            eval(Operation::Factorial, "5", Some("9")).unwrap(),
            Outcome::Value(int("120"))
        );
    }

    #[test]
    fn missing_operand() {
        assert_eq!(
            eval(Operation::Add, "1", None),
            Err(ArithError::MissingOperand("+"))
        );
    }

    #[test]
    fn limits_are_enforced() {
        let calc = Calculator::new(Options {
            max_exponent: 10,
            max_factorial: 20,
            ..Options::default()
        });
        assert_eq!(
            calc.evaluate(Operation::Power, &int("2"), Some(&int("11"))),
            Err(ArithError::LimitExceeded {
                what: "exponent",
                value: 11,
                limit: 10
            })
        );
        assert_eq!(
            calc.evaluate(Operation::Factorial, &int("21"), None),
            Err(ArithError::LimitExceeded {
                what: "factorial argument",
                value: 21,
                limit: 20
            })
        );
        assert!(calc
            .evaluate(Operation::Factorial, &int("20"), None)
            .is_ok());
    }

    #[test]
    fn engine_errors_take_precedence_over_limits() {
        assert_eq!(
            eval(Operation::Power, "2", Some("-1")),
            Err(ArithError::NegativeExponent)
        );
        assert_eq!(
            eval(Operation::Power, "2", Some("5000000000")),
            Err(ArithError::ExponentTooLarge)
        );
        assert_eq!(
            eval(Operation::Factorial, "-1", None),
            Err(ArithError::NegativeArgument)
        );
    }

    #[test]
    fn normalized_options() {
        let calc = Calculator::new(Options {
            karatsuba_threshold: 0,
            ..Options::default()
        });
        assert_eq!(calc.options().karatsuba_threshold, 32);
        assert_eq!(calc.strategy_name(), "ParallelKaratsuba");
    }
}
