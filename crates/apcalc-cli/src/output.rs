//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use apcalc_core::{ArbitraryInt, ArithError, Outcome};

/// Render a value in `radix`, with a `0x`/`0b` style marker for 16 and 2.
pub fn format_value(value: &ArbitraryInt, radix: u32) -> Result<String, ArithError> {
    let digits = value.to_str_radix(radix)?;
    let prefix = match radix {
        16 => "0x",
        2 => "0b",
        _ => return Ok(digits),
    };
    Ok(match digits.strip_prefix('-') {
        Some(magnitude) => format!("-{prefix}{magnitude}"),
        None => format!("{prefix}{digits}"),
    })
}

/// Lines for an outcome: one value, or `Quotient:`/`Remainder:` lines.
pub fn outcome_lines(outcome: &Outcome, radix: u32) -> Result<Vec<String>, ArithError> {
    Ok(match outcome {
        Outcome::Value(v) => vec![format_value(v, radix)?],
        Outcome::QuotientRemainder {
            quotient,
            remainder,
        } => vec![
            format!("Quotient: {}", format_value(quotient, radix)?),
            format!("Remainder: {}", format_value(remainder, radix)?),
        ],
    })
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the rendered lines to a file, one per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
