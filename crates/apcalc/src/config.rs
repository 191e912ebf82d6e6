//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use apcalc_core::constants::{
    DEFAULT_KARATSUBA_THRESHOLD, DEFAULT_MAX_EXPONENT, DEFAULT_MAX_FACTORIAL,
    DEFAULT_PARALLEL_THRESHOLD,
};
use apcalc_core::Options;
use clap::Parser;

const AFTER_HELP: &str = "\
Operations:
  +  add         Addition
  -  sub         Subtraction
  *  mul, mult   Multiplication
  /  div         Division (shows quotient and remainder)
  ^  pow         Exponentiation
  %  mod         Modulo (sign follows the dividend)
  !  factorial   Factorial (single operand)

Number formats:
  123, -123      Decimal
  0xff, -0xff    Hexadecimal
  0b1010         Binary

Examples:
  apcalc 1000000000 + 2000000000
  apcalc 5 ^ 3
  apcalc 0xff + 0x100
  apcalc 20 !
  apcalc add 2 3
  apcalc                      # interactive mode

Options go before the expression.";

/// Arbitrary Precision Calculator: exact integer arithmetic on numbers of any size.
#[derive(Parser, Debug)]
#[command(name = "apcalc", about, disable_version_flag = true, after_help = AFTER_HELP)]
pub struct AppConfig {
    /// First operand, or an operation word (`add 2 3`).
    #[arg(value_name = "NUM1", allow_hyphen_values = true)]
    pub lhs: Option<String>,

    /// Operator token, or the second operand after an operation word.
    #[arg(value_name = "OP", allow_hyphen_values = true)]
    pub op: Option<String>,

    /// Second operand.
    #[arg(value_name = "NUM2", allow_hyphen_values = true)]
    pub rhs: Option<String>,

    /// Print version information.
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Render results in this base (2-36).
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..=36))]
    pub radix: u32,

    /// Show digit count, limb count and elapsed time.
    #[arg(short, long)]
    pub details: bool,

    /// Also write the result to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Operand size in limbs at or below which multiplication is schoolbook.
    #[arg(long, default_value_t = DEFAULT_KARATSUBA_THRESHOLD, env = "APCALC_KARATSUBA_THRESHOLD")]
    pub karatsuba_threshold: usize,

    /// Operand size in limbs from which Karatsuba sub-products run in parallel.
    #[arg(long, default_value_t = DEFAULT_PARALLEL_THRESHOLD, env = "APCALC_PARALLEL_THRESHOLD")]
    pub parallel_threshold: usize,

    /// Largest accepted exponent.
    #[arg(long, default_value_t = DEFAULT_MAX_EXPONENT, env = "APCALC_MAX_EXPONENT")]
    pub max_exponent: u32,

    /// Largest accepted factorial argument.
    #[arg(long, default_value_t = DEFAULT_MAX_FACTORIAL, env = "APCALC_MAX_FACTORIAL")]
    pub max_factorial: u32,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Core options built from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            karatsuba_threshold: self.karatsuba_threshold,
            parallel_threshold: self.parallel_threshold,
            max_exponent: self.max_exponent,
            max_factorial: self.max_factorial,
        }
        .normalize()
    }

    /// Positional tokens in order, or an empty vector for REPL mode.
    #[must_use]
    pub fn expression_tokens(&self) -> Vec<&str> {
        [&self.lhs, &self.op, &self.rhs]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("apcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert!(config.expression_tokens().is_empty());
        assert_eq!(config.radix, 10);
        assert!(!config.details);
        assert!(!config.version);
        assert_eq!(config.options(), Options::default());
    }

    #[test]
    fn binary_expression_tokens() {
        let config = parse(&["123", "+", "456"]);
        assert_eq!(config.expression_tokens(), ["123", "+", "456"]);
    }

    #[test]
    fn negative_and_prefixed_operands() {
        let config = parse(&["-5", "-", "-0xff"]);
        assert_eq!(config.expression_tokens(), ["-5", "-", "-0xff"]);
    }

    #[test]
    fn factorial_tokens() {
        let config = parse(&["5", "!"]);
        assert_eq!(config.expression_tokens(), ["5", "!"]);
    }

    #[test]
    fn short_flags_before_expression() {
        let config = parse(&["-d", "-o", "out.txt", "1", "*", "2"]);
        assert!(config.details);
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
        assert_eq!(config.expression_tokens(), ["1", "*", "2"]);
    }

    #[test]
    fn version_flag() {
        assert!(parse(&["-v"]).version);
        assert!(parse(&["--version"]).version);
    }

    #[test]
    fn radix_range() {
        assert_eq!(parse(&["--radix", "16", "1", "+", "1"]).radix, 16);
        assert!(AppConfig::try_parse_from(["apcalc", "--radix", "1"]).is_err());
        assert!(AppConfig::try_parse_from(["apcalc", "--radix", "37"]).is_err());
    }

    #[test]
    fn zero_thresholds_normalize() {
        let config = parse(&["--karatsuba-threshold", "0", "--max-exponent", "0"]);
        let opts = config.options();
        assert_eq!(opts.karatsuba_threshold, DEFAULT_KARATSUBA_THRESHOLD);
        assert_eq!(opts.max_exponent, DEFAULT_MAX_EXPONENT);
    }

    #[test]
    fn too_many_positionals_rejected() {
        assert!(AppConfig::try_parse_from(["apcalc", "1", "+", "2", "3"]).is_err());
    }
}
