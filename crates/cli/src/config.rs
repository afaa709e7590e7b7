// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-process configuration, resolved once in `main` and passed down.

use std::time::Duration;

use gemini_client::{ApiError, GeminiClient, GenerationConfig, DEFAULT_BASE_URL};

use crate::credentials::Credential;
use crate::env;
use crate::runner::RetryPolicy;

/// Model used by `gemini-runner` unless `GEMINI_RUNNER_MODEL` is set.
pub const DEFAULT_RUNNER_MODEL: &str = "gemini-2.0-flash";

/// Model used by `gemini-interact` unless `GEMINI_INTERACT_MODEL` is set.
pub const DEFAULT_INTERACT_MODEL: &str = "gemini-1.5-pro";

/// Reply length cap for interactive sessions.
pub const MAX_OUTPUT_TOKENS: u32 = 8000;

/// Where and as whom to call the API.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub credential: Credential,
    pub model: String,
    pub base_url: String,
}

impl ApiConfig {
    fn new(credential: Credential, model: Option<String>, default_model: &str) -> Self {
        Self {
            credential,
            model: model.unwrap_or_else(|| default_model.to_string()),
            base_url: env::base_url().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn client(&self) -> Result<GeminiClient, ApiError> {
        GeminiClient::with_base_url(self.credential.expose(), &self.model, &self.base_url)
    }
}

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    pub api: ApiConfig,
    pub retry: RetryPolicy,
}

impl RunnerConfig {
    pub fn from_env(credential: Credential) -> Self {
        let mut retry = RetryPolicy::default();
        if let Some(ms) = env::retry_unit_ms() {
            retry.backoff_unit = Duration::from_millis(ms);
        }
        Self {
            api: ApiConfig::new(credential, env::runner_model(), DEFAULT_RUNNER_MODEL),
            retry,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InteractConfig {
    pub api: ApiConfig,
    pub generation: GenerationConfig,
}

impl InteractConfig {
    pub fn from_env(credential: Credential) -> Self {
        Self {
            api: ApiConfig::new(credential, env::interact_model(), DEFAULT_INTERACT_MODEL),
            generation: GenerationConfig::with_max_output_tokens(MAX_OUTPUT_TOKENS),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
