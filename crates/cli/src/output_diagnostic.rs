// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning/progress formatting.
//!
//! Everything here goes to stderr so stdout carries only the report.
//! ANSI colour is used only when stderr is a terminal.

use std::io::{self, IsTerminal, Write};

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Write a warning message to a writer with explicit terminal flag.
///
/// Displays in yellow on a terminal, plain text otherwise.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Warn that one report section failed, e.g. `rlm_simulation failed: ...`.
pub fn print_section_failure(section: &str, error: &str) {
    let is_tty = io::stderr().is_terminal();
    write_section_failure(&mut io::stderr(), section, error, is_tty);
}

fn write_section_failure<W: Write>(
    writer: &mut W,
    section: &str,
    error: &str,
    is_terminal: bool,
) {
    write_warning(writer, format_args!("{} failed: {}", section, error), is_terminal);
}

/// Print a progress line for a report section, e.g. `[2/4] Ablation study`.
pub fn print_status(step: usize, total: usize, msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_status(&mut io::stderr(), step, total, msg, is_tty);
}

fn write_status<W: Write>(
    writer: &mut W,
    step: usize,
    total: usize,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[2m[{}/{}]\x1b[0m {}", step, total, msg);
    } else {
        let _ = writeln!(writer, "[{}/{}] {}", step, total, msg);
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
