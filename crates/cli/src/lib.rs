// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gemini terminal tools
//!
//! Two small front ends to the Gemini `generateContent` API:
//!
//! - `gemini-runner` reads a prompt from stdin, sends it once (retrying only
//!   on HTTP 429) and prints the reply to stdout.
//! - `gemini-interact <name>` loads `.claude/commands/mc-<name>.md` as a
//!   system instruction and runs a line-by-line chat with full history.
//!
//! The API key comes from `GOOGLE_API_KEY`, a `.env` file, or the files the
//! official Gemini CLI leaves in `~/.gemini/`.

// Internal modules - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod config;
pub mod credentials;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod indicator;
#[doc(hidden)]
pub mod logging;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod persona;
pub mod runner;
pub mod session;

#[cfg(test)]
mod test_helpers;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    /// Missing key, bad usage, missing persona, or a failed one-shot request.
    pub const ERROR: i32 = 1;
}
