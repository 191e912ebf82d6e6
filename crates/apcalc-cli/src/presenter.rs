//! CLI result presenter.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use apcalc_core::constants::{MAX_RADIX, MIN_RADIX};
use apcalc_core::{ArithError, Outcome};

use crate::output::{format_duration, format_number, outcome_lines};

/// Presents evaluation results and errors.
pub trait ResultPresenter {
    /// Write an outcome.
    fn present_result(
        &self,
        out: &mut dyn Write,
        outcome: &Outcome,
        elapsed: Duration,
    ) -> io::Result<()>;

    /// Write an error message.
    fn present_error(&self, out: &mut dyn Write, error: &dyn Display) -> io::Result<()>;
}

/// Plain-text presenter shared by the REPL and the single-shot command.
#[derive(Debug, Clone)]
pub struct CliPresenter {
    radix: u32,
    details: bool,
    label: Option<&'static str>,
}

impl CliPresenter {
    /// Presenter rendering in `radix`; `details` adds digit, limb and timing lines.
    pub fn new(radix: u32, details: bool) -> Result<Self, ArithError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(ArithError::InvalidBase(radix));
        }
        Ok(Self {
            radix,
            details,
            label: None,
        })
    }

    /// Prefix single-value results with `Result: `.
    #[must_use]
    pub fn with_result_label(mut self) -> Self {
        self.label = Some("Result: ");
        self
    }

    #[must_use]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Rendered result lines, without detail lines.
    pub fn render(&self, outcome: &Outcome) -> Result<Vec<String>, ArithError> {
        let mut lines = outcome_lines(outcome, self.radix)?;
        if let (Some(label), Outcome::Value(_)) = (self.label, outcome) {
            lines[0] = format!("{label}{}", lines[0]);
        }
        Ok(lines)
    }
}

impl Default for CliPresenter {
    fn default() -> Self {
        Self {
            radix: 10,
            details: false,
            label: None,
        }
    }
}

impl ResultPresenter for CliPresenter {
    fn present_result(
        &self,
        out: &mut dyn Write,
        outcome: &Outcome,
        elapsed: Duration,
    ) -> io::Result<()> {
        let lines = self
            .render(outcome)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        for line in &lines {
            writeln!(out, "{line}")?;
        }

        if self.details {
            let value = outcome.value();
            writeln!(out, "Digits: {}", format_number(value.digit_count()))?;
            writeln!(out, "Limbs: {}", format_number(value.limb_count()))?;
            writeln!(out, "Duration: {}", format_duration(elapsed))?;
        }
        Ok(())
    }

    fn present_error(&self, out: &mut dyn Write, error: &dyn Display) -> io::Result<()> {
        writeln!(out, "Error: {error}")
    }
}
