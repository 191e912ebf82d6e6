//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use apcalc_core::Calculator;

use crate::expression::Expression;
use crate::presenter::{CliPresenter, ResultPresenter};
use crate::ui;

const PROMPT: &str = "> ";

/// REPL over any line source and sink.
pub struct Repl<R, W> {
    input: R,
    output: W,
    calculator: Calculator,
    presenter: CliPresenter,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    #[must_use]
    pub fn new(input: R, output: W, calculator: Calculator, presenter: CliPresenter) -> Self {
        Self {
            input,
            output,
            calculator,
            presenter: presenter.with_result_label(),
        }
    }

    /// Run until `exit`/`quit` or end of input. Returns the number of
    /// expressions evaluated, successful or not.
    pub fn run(&mut self) -> io::Result<usize> {
        ui::write_banner(&mut self.output)?;
        let mut evaluated = 0;
        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
                writeln!(self.output, "Goodbye!")?;
                break;
            }

            evaluated += 1;
            self.eval_line(trimmed)?;
        }
        Ok(evaluated)
    }

    fn eval_line(&mut self, line: &str) -> io::Result<()> {
        tracing::debug!(line, "repl input");
        let start = Instant::now();
        let result = Expression::parse(line).and_then(|e| e.evaluate(&self.calculator));
        match result {
            Ok(outcome) => self
                .presenter
                .present_result(&mut self.output, &outcome, start.elapsed()),
            Err(e) => self.presenter.present_error(&mut self.output, &e),
        }
    }

    /// Consume the REPL, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
