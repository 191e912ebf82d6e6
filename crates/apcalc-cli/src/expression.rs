//! Tokenizing `A op B` and `A !` expressions.

use apcalc_core::{ArbitraryInt, ArithError, Calculator, Operation, Outcome};

/// Error type for expression handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    /// Nothing to evaluate.
    #[error("empty expression")]
    Empty,

    /// Wrong number or arrangement of tokens.
    #[error("invalid expression format: {0}")]
    InvalidFormat(String),

    /// Operator token that names no operation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Operand parsing or evaluation failed.
    #[error(transparent)]
    Arith(#[from] ArithError),
}

/// A parsed expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub lhs: ArbitraryInt,
    pub op: Operation,
    pub rhs: Option<ArbitraryInt>,
}

impl Expression {
    /// Parse a whitespace-separated expression.
    ///
    /// Accepted shapes are `<number> <op> <number>`, `<number> !`,
    /// `<number> factorial` and `<number>!`.
    pub fn parse(line: &str) -> Result<Self, ExpressionError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(ExpressionError::Empty),
            [single] => match single.strip_suffix('!') {
                Some(number) if !number.is_empty() => Self::unary(number, Operation::Factorial),
                _ => Err(ExpressionError::InvalidFormat(
                    "expected <number> <op> <number> or <number> !".into(),
                )),
            },
            [number, op] => {
                let op = parse_operation(op)?;
                if !op.is_unary() {
                    return Err(ExpressionError::InvalidFormat(format!(
                        "'{op}' requires two operands"
                    )));
                }
                Self::unary(number, op)
            }
            [lhs, op, rhs] => {
                let op = parse_operation(op)?;
                if op.is_unary() {
                    return Err(ExpressionError::InvalidFormat(format!(
                        "'{op}' takes a single operand"
                    )));
                }
                Self::from_parts(lhs, op, rhs)
            }
            _ => Err(ExpressionError::InvalidFormat(format!(
                "expected at most 3 tokens, got {}",
                tokens.len()
            ))),
        }
    }

    /// Build a binary expression from already-split tokens.
    pub fn from_parts(lhs: &str, op: Operation, rhs: &str) -> Result<Self, ExpressionError> {
        Ok(Self {
            lhs: ArbitraryInt::parse(lhs)?,
            op,
            rhs: Some(ArbitraryInt::parse(rhs)?),
        })
    }

    fn unary(number: &str, op: Operation) -> Result<Self, ExpressionError> {
        Ok(Self {
            lhs: ArbitraryInt::parse(number)?,
            op,
            rhs: None,
        })
    }

    /// Evaluate with `calculator`.
    pub fn evaluate(&self, calculator: &Calculator) -> Result<Outcome, ExpressionError> {
        Ok(calculator.evaluate(self.op, &self.lhs, self.rhs.as_ref())?)
    }
}

/// Map an operator token to an `Operation`.
pub fn parse_operation(token: &str) -> Result<Operation, ExpressionError> {
    token
        .parse()
        .map_err(|_| ExpressionError::UnsupportedOperation(token.to_string()))
}
