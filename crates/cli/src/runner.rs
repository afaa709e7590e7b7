// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot prompt execution for `gemini-runner`.
//!
//! Reads the whole of stdin, sends it as a single request, retries only on
//! rate limiting, and writes the reply to stdout. Diagnostics go to stderr.

use std::io::{self, Write};
use std::time::Duration;

use gemini_client::{ApiError, GenerateContentRequest, GenerativeModel};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::output_diagnostic::print_warning;

/// Bounded linear backoff for rate-limited requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total calls allowed, including the first.
    pub max_attempts: u32,
    /// Wait after the n-th rate-limited call is `n × backoff_unit`.
    pub backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_unit: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.backoff_unit.saturating_mul(attempt)
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Empty prompt received from stdin.")]
    EmptyPrompt,

    #[error("Failed to read prompt from stdin: {0}")]
    Input(#[source] io::Error),

    #[error("Failed after max retries due to rate limits.")]
    RetriesExhausted { attempts: u32 },

    #[error("Error generating content: {0}")]
    Api(#[from] ApiError),

    #[error("Failed to write response: {0}")]
    Output(#[source] io::Error),
}

/// Read the entire prompt. Whitespace-only input is rejected.
pub async fn read_prompt<R: AsyncRead + Unpin>(reader: &mut R) -> Result<String, RunError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .map_err(RunError::Input)?;
    let prompt = String::from_utf8(bytes)
        .map_err(|e| RunError::Input(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    if prompt.trim().is_empty() {
        return Err(RunError::EmptyPrompt);
    }
    Ok(prompt)
}

/// Send `prompt`, retrying rate-limited calls up to `policy.max_attempts` in total.
///
/// Every 429, including the last, is followed by its backoff wait.
pub async fn generate_with_retry<M: GenerativeModel>(
    model: &M,
    prompt: &str,
    policy: RetryPolicy,
) -> Result<String, RunError> {
    let request = GenerateContentRequest::from_prompt(prompt);
    let mut attempts = 0;

    while attempts < policy.max_attempts {
        match model.generate(&request).await.and_then(|r| r.text()) {
            Ok(text) => return Ok(text),
            Err(e) if e.is_rate_limited() => {
                attempts += 1;
                tracing::debug!(attempts, error = %e, "rate limited");
                let delay = policy.delay_for(attempts);
                print_warning(format_args!(
                    "Rate limit hit (429). Retrying in {}...",
                    format_delay(delay)
                ));
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(RunError::RetriesExhausted { attempts })
}

/// Full runner flow: read stdin, generate, write the reply and a newline.
pub async fn run<M, R, W>(
    model: &M,
    input: &mut R,
    output: &mut W,
    policy: RetryPolicy,
) -> Result<(), RunError>
where
    M: GenerativeModel,
    R: AsyncRead + Unpin,
    W: Write,
{
    let prompt = read_prompt(input).await?;
    let text = generate_with_retry(model, &prompt, policy).await?;
    writeln!(output, "{text}").map_err(RunError::Output)?;
    output.flush().map_err(RunError::Output)
}

fn format_delay(delay: Duration) -> String {
    if delay.subsec_millis() == 0 {
        format!("{}s", delay.as_secs())
    } else {
        format!("{}ms", delay.as_millis())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
