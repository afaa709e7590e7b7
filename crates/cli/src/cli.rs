// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments for both binaries.
//!
//! Neither tool takes options beyond `--help` and `--version`; all tuning
//! happens through the environment (see [`crate::env`]). Surplus positional
//! arguments are accepted and ignored, and any other usage error exits with
//! [`exit_codes::ERROR`] instead of clap's default of 2.

use clap::error::ErrorKind;
use clap::Parser;

use crate::exit_codes;

/// Send stdin to Gemini once and print the reply
#[derive(Parser, Debug)]
#[command(
    name = "gemini-runner",
    version,
    about = "Send stdin to Gemini once and print the reply",
    after_help = "Example: echo 'Summarize this' | gemini-runner"
)]
pub struct RunnerCli {
    #[arg(hide = true, trailing_var_arg = true)]
    pub ignored: Vec<String>,
}

/// Chat with Gemini as a persona from .claude/commands/
#[derive(Parser, Debug)]
#[command(
    name = "gemini-interact",
    version,
    about = "Chat with Gemini as a persona from .claude/commands/"
)]
pub struct InteractCli {
    /// Persona to load: `name`, `mc:name` or `mc-name`
    #[arg(value_name = "COMMAND_NAME")]
    pub command_name: Option<String>,

    #[arg(hide = true, trailing_var_arg = true)]
    pub ignored: Vec<String>,
}

/// Shown when `gemini-interact` is started without a usable persona name.
pub const INTERACT_USAGE: &str = "Usage: gemini-interact <command_name>";
pub const INTERACT_EXAMPLE: &str = "Example: gemini-interact interrogate";

/// Parse `std::env::args`, exiting 0 for help/version and 1 for anything else.
pub fn parse_or_exit<C: Parser>() -> C {
    match C::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_codes::ERROR);
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
