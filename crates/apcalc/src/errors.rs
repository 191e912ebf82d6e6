//! Error handling and exit codes.

use apcalc_cli::ExpressionError;
use apcalc_core::constants::exit_codes;
use apcalc_core::ArithError;

/// Map an expression error to the process exit code.
#[must_use]
pub fn exit_code_for(err: &ExpressionError) -> i32 {
    match err {
        ExpressionError::Empty
        | ExpressionError::InvalidFormat(_)
        | ExpressionError::UnsupportedOperation(_)
        | ExpressionError::Arith(ArithError::InvalidFormat(_) | ArithError::MissingOperand(_)) => {
            exit_codes::ERROR_USAGE
        }
        ExpressionError::Arith(ArithError::InvalidBase(_)) => exit_codes::ERROR_CONFIG,
        ExpressionError::Arith(_) => exit_codes::ERROR_ARITHMETIC,
    }
}

/// `true` when the error means the command line itself was malformed.
#[must_use]
pub fn is_usage_error(err: &ExpressionError) -> bool {
    exit_code_for(err) == exit_codes::ERROR_USAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code_for(&ExpressionError::Empty), 2);
        assert_eq!(exit_code_for(&ExpressionError::InvalidFormat("x".into())), 2);
        assert_eq!(
            exit_code_for(&ExpressionError::UnsupportedOperation("&".into())),
            2
        );
        assert_eq!(
            exit_code_for(&ArithError::InvalidFormat("12a".into()).into()),
            2
        );
        assert_eq!(exit_code_for(&ArithError::DivisionByZero.into()), 3);
        assert_eq!(exit_code_for(&ArithError::NegativeExponent.into()), 3);
        assert_eq!(
            exit_code_for(
                &ArithError::LimitExceeded {
                    what: "exponent",
                    value: 10,
                    limit: 5
                }
                .into()
            ),
            3
        );
        assert_eq!(exit_code_for(&ArithError::InvalidBase(40).into()), 4);
    }

    #[test]
    fn usage_errors() {
        assert!(is_usage_error(&ExpressionError::Empty));
        assert!(!is_usage_error(&ArithError::DivisionByZero.into()));
    }
}
