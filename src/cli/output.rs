//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Write a puzzle result (green label)
pub fn result(out: &mut dyn Write, label: &str, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}: {}", label.green(), msg)
}

/// Write section header (cyan bold)
pub fn header(out: &mut dyn Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg.to_string().cyan().bold())
}

/// Write indented detail (no color)
pub fn detail(out: &mut dyn Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "  {}", msg)
}

/// Write plain output without adding a newline (for multi-line dumps)
pub fn raw(out: &mut dyn Write, msg: &(impl Display + ?Sized)) -> io::Result<()> {
    write!(out, "{}", msg)
}

/// Progress line of the lockstep walk, with a percentage when an estimate is known.
pub fn progress_line(jumps: u64, expected: Option<u64>) -> String {
    match expected {
        Some(total) if total > 0 => {
            let percent = jumps as f64 * 100.0 / total as f64;
            format!("Jumps: {} ({:.2}%)", jumps, percent)
        }
        _ => format!("Jumps: {}", jumps),
    }
}

/// Print progress (dimmed)
pub fn progress(jumps: u64, expected: Option<u64>) {
    println!("{}", progress_line(jumps, expected).dimmed());
}
