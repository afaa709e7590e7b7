// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Everything here goes to stderr so the runner's stdout carries only the
//! model's text. ANSI colors are used only when stderr is a terminal.

use std::io::{self, IsTerminal, Write};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Print an unlabeled follow-up line (usage, remediation) to stderr.
pub fn print_hint(msg: impl std::fmt::Display) {
    let _ = writeln!(io::stderr(), "{}", msg);
}

/// Write an `Error:` line to `writer`, red when `is_terminal`.
pub fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    write_labeled(writer, "Error", RED, msg, is_terminal);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    write_labeled(writer, "Warning", YELLOW, msg, is_terminal);
}

fn write_labeled<W: Write>(
    writer: &mut W,
    label: &str,
    color: &str,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "{color}{label}: {msg}{RESET}");
    } else {
        let _ = writeln!(writer, "{label}: {msg}");
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
