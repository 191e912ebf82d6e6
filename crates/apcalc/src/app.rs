//! Application entry point and dispatch.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};

use apcalc_cli::expression::{parse_operation, Expression};
use apcalc_cli::output::write_to_file;
use apcalc_cli::presenter::{CliPresenter, ResultPresenter};
use apcalc_cli::{ui, ExpressionError, Repl};
use apcalc_core::constants::exit_codes;
use apcalc_core::{ArbitraryInt, Calculator};

use crate::config::AppConfig;
use crate::errors::{exit_code_for, is_usage_error};
use crate::version;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        apcalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    if config.version {
        println!("{}", version::full_version());
        println!("Built for {}", version::build_target());
        return Ok(exit_codes::SUCCESS);
    }

    let presenter = match CliPresenter::new(config.radix, config.details) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&e.to_string());
            return Ok(exit_codes::ERROR_CONFIG);
        }
    };
    let calculator = Calculator::new(config.options());
    tracing::debug!(
        strategy = calculator.strategy_name(),
        radix = config.radix,
        "configured"
    );

    let tokens = config.expression_tokens();
    if tokens.is_empty() {
        return run_repl(calculator, presenter);
    }
    run_single(config, &tokens, &calculator, &presenter)
}

fn run_repl(calculator: Calculator, presenter: CliPresenter) -> Result<i32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), calculator, presenter);
    let evaluated = repl.run().context("REPL I/O failed")?;
    tracing::debug!(evaluated, "REPL finished");
    Ok(exit_codes::SUCCESS)
}

fn run_single(
    config: &AppConfig,
    tokens: &[&str],
    calculator: &Calculator,
    presenter: &CliPresenter,
) -> Result<i32> {
    let start = Instant::now();
    let outcome = match parse_tokens(tokens).and_then(|e| e.evaluate(calculator)) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::print_error(&e.to_string());
            if is_usage_error(&e) {
                eprintln!("Usage: apcalc [OPTIONS] <NUM1> <OP> <NUM2>");
                eprintln!("Run with --help for more information");
            }
            return Ok(exit_code_for(&e));
        }
    };
    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    presenter
        .present_result(&mut out, &outcome, elapsed)
        .context("failed to write result")?;
    out.flush()?;

    if let Some(path) = &config.output {
        let lines = presenter.render(&outcome)?;
        write_to_file(path, &lines)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(exit_codes::SUCCESS)
}

/// Build an expression from positional tokens.
///
/// Three tokens whose first is an operation word (`add 2 3`) are read in
/// prefix order; everything else is read as an infix expression.
fn parse_tokens(tokens: &[&str]) -> Result<Expression, ExpressionError> {
    if let [word, lhs, rhs] = tokens {
        if ArbitraryInt::parse(word).is_err() {
            if let Ok(op) = parse_operation(word) {
                if !op.is_unary() {
                    return Expression::from_parts(lhs, op, rhs);
                }
            }
        }
    }
    Expression::parse(&tokens.join(" "))
}
