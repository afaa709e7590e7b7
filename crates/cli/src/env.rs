// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the tools are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.
//! Empty values are treated the same as unset ones.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `GOOGLE_API_KEY`: The API credential.
pub fn google_api_key() -> Option<String> {
    var_non_empty(names::GOOGLE_API_KEY)
}

/// `HOME`: User's home directory.
pub fn home() -> Option<PathBuf> {
    var_non_empty(names::HOME).map(PathBuf::from)
}

/// `GEMINI_TOOLS_BASE_URL`: Override of the API base URL.
pub fn base_url() -> Option<String> {
    var_non_empty(names::GEMINI_TOOLS_BASE_URL)
}

/// `GEMINI_RUNNER_MODEL`: Model used by `gemini-runner`.
pub fn runner_model() -> Option<String> {
    var_non_empty(names::GEMINI_RUNNER_MODEL)
}

/// `GEMINI_INTERACT_MODEL`: Model used by `gemini-interact`.
pub fn interact_model() -> Option<String> {
    var_non_empty(names::GEMINI_INTERACT_MODEL)
}

/// `GEMINI_TOOLS_RETRY_UNIT_MS`: Backoff unit for rate-limit retries.
pub fn retry_unit_ms() -> Option<u64> {
    var_non_empty(names::GEMINI_TOOLS_RETRY_UNIT_MS).and_then(|v| v.trim().parse().ok())
}

/// `GEMINI_TOOLS_LOG`: `tracing` filter directive.
pub fn log_filter() -> Option<String> {
    var_non_empty(names::GEMINI_TOOLS_LOG)
}

fn var_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
