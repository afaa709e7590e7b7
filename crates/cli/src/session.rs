// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented chat loop for `gemini-interact`.
//!
//! One line of input is one chat turn. `exit` / `quit` (any case) or end of
//! input finish the session; blank lines are ignored. A failed turn is
//! reported on the error stream and the loop keeps going with its history
//! intact.

use std::io::{self, IsTerminal, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use gemini_client::{ApiError, ChatSession, GenerationConfig, GenerativeModel};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::indicator;
use crate::output_diagnostic::write_error;
use crate::persona::Persona;

const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];

/// What to do with one line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineAction<'a> {
    Exit,
    Skip,
    Send(&'a str),
}

impl<'a> LineAction<'a> {
    pub fn classify(line: &'a str) -> Self {
        let text = line.trim();
        if text.is_empty() {
            LineAction::Skip
        } else if EXIT_KEYWORDS
            .iter()
            .any(|keyword| text.eq_ignore_ascii_case(keyword))
        {
            LineAction::Exit
        } else {
            LineAction::Send(text)
        }
    }
}

/// Why the loop stopped. Both are a normal, successful end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,
    EndOfInput,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines forwarded to the model.
    pub turns_sent: usize,
    /// Of those, turns that came back with an error.
    pub turns_failed: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub stats: SessionStats,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Terminal decoration for the session's stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStyle {
    /// Colors and the transient working indicator.
    pub decorate: bool,
    /// Red error reports.
    pub color_errors: bool,
}

impl SessionStyle {
    pub fn detect() -> Self {
        Self {
            decorate: io::stdout().is_terminal(),
            color_errors: io::stderr().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self {
            decorate: false,
            color_errors: false,
        }
    }
}

/// Chat loop reading lines from `R`, writing the transcript to `W` and
/// per-turn error reports to `E`.
pub struct InteractiveSession<'m, M, R, W, E> {
    chat: ChatSession<'m, M>,
    persona_name: String,
    input: R,
    output: W,
    errors: E,
    style: SessionStyle,
    stats: SessionStats,
}

impl<'m, M, R, W, E> InteractiveSession<'m, M, R, W, E>
where
    M: GenerativeModel,
    R: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
{
    pub fn new(
        model: &'m M,
        persona: &Persona,
        generation: GenerationConfig,
        input: R,
        output: W,
        errors: E,
        style: SessionStyle,
    ) -> Self {
        Self {
            chat: ChatSession::new(model, persona.instruction.clone(), generation),
            persona_name: persona.name.to_string(),
            input,
            output,
            errors,
            style,
            stats: SessionStats::default(),
        }
    }

    /// Run until `exit`/`quit` or end of input.
    pub async fn run(mut self) -> Result<SessionSummary, SessionError> {
        self.banner().map_err(SessionError::Output)?;

        let mut line = String::new();
        let end = loop {
            self.prompt().map_err(SessionError::Output)?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .await
                .map_err(SessionError::Input)?;
            if read == 0 {
                break SessionEnd::EndOfInput;
            }

            match LineAction::classify(&line) {
                LineAction::Exit => break SessionEnd::Exit,
                LineAction::Skip => {}
                LineAction::Send(text) => self.turn(text).await?,
            }
        };

        writeln!(self.output, "\nSession ended.").map_err(SessionError::Output)?;
        self.output.flush().map_err(SessionError::Output)?;

        tracing::debug!(?end, turns = self.stats.turns_sent, "session finished");
        Ok(SessionSummary {
            end,
            stats: self.stats,
        })
    }

    async fn turn(&mut self, text: &str) -> Result<(), SessionError> {
        self.stats.turns_sent += 1;
        self.show_indicator().map_err(SessionError::Output)?;

        let result = self.chat.send_message(text).await;
        self.clear_indicator().map_err(SessionError::Output)?;

        match result {
            Ok(reply) => self.reply(&reply).map_err(SessionError::Output),
            Err(e) => {
                self.stats.turns_failed += 1;
                tracing::debug!(error = ?e, "chat turn failed");
                self.report(&e).map_err(SessionError::Output)
            }
        }
    }

    /// `\nError: <message>\n`
    fn report(&mut self, error: &ApiError) -> io::Result<()> {
        writeln!(self.errors)?;
        write_error(&mut self.errors, error, self.style.color_errors);
        writeln!(self.errors)?;
        self.errors.flush()
    }

    fn banner(&mut self) -> io::Result<()> {
        let title = format!("Starting interactive session for: {}", self.persona_name);
        self.colored_line(Color::Cyan, &title)?;
        self.colored_line(Color::DarkGrey, "(Type 'exit' or 'quit' to stop)")?;
        writeln!(self.output)
    }

    fn prompt(&mut self) -> io::Result<()> {
        self.colored(Color::Green, "You: ")?;
        self.output.flush()
    }

    fn show_indicator(&mut self) -> io::Result<()> {
        if !self.style.decorate {
            return Ok(());
        }
        self.colored(Color::Yellow, "Gemini: ")?;
        queue!(
            self.output,
            Print(indicator::indicator_text(indicator::random_verb()))
        )?;
        self.output.flush()
    }

    fn clear_indicator(&mut self) -> io::Result<()> {
        if !self.style.decorate {
            return Ok(());
        }
        queue!(self.output, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        self.output.flush()
    }

    fn reply(&mut self, text: &str) -> io::Result<()> {
        self.colored(Color::Yellow, "Gemini: ")?;
        writeln!(self.output, "{text}\n")?;
        self.output.flush()
    }

    fn colored_line(&mut self, color: Color, text: &str) -> io::Result<()> {
        self.colored(color, text)?;
        writeln!(self.output)
    }

    fn colored(&mut self, color: Color, text: &str) -> io::Result<()> {
        if self.style.decorate {
            queue!(
                self.output,
                SetForegroundColor(color),
                Print(text),
                ResetColor
            )
        } else {
            write!(self.output, "{text}")
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
