// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors returned by the model API.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 429: the caller exceeded its request-rate quota.
    #[error("[429 Too Many Requests] {message}")]
    RateLimited { message: String },

    /// Any other non-success HTTP status.
    #[error("[{code}] {message}")]
    Status { code: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response was blocked: {reason}")]
    Blocked { reason: String },

    #[error("response contained no text")]
    EmptyResponse,

    #[error("API key contains characters that cannot be sent in a header")]
    InvalidApiKey,
}

impl ApiError {
    /// Whether this is the rate-limit signal (the only transient error).
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RateLimited { .. })
    }

    /// Classify a non-success response by status code and body.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = error_message(status, body);
        if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimited { message }
        } else {
            ApiError::Status {
                code: status.as_u16(),
                message,
            }
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Prefer Google's `{"error": {"message": ...}}`, then the raw body, then the reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
