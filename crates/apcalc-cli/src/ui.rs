//! UI helpers for CLI display.

use std::io::{self, Write};

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Write the REPL banner.
pub fn write_banner(out: &mut dyn Write) -> io::Result<()> {
    let title = "Arbitrary Precision Integer Calculator";
    if is_color_disabled() {
        writeln!(out, "{title}")?;
    } else {
        writeln!(out, "{}", style(title).bold().cyan())?;
    }
    writeln!(out, "Enter expressions like: 123 + 456 or 10 ^ 5")?;
    writeln!(out, "Type 'exit' or 'quit' to end the session")
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("Error: {text}");
    } else {
        eprintln!("{} {text}", style("Error:").for_stderr().red().bold());
    }
}
