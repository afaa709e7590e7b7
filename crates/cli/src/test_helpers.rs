// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Scripted model for driving the runner and session in unit tests.

use std::collections::VecDeque;

use gemini_client::{ApiError, GenerateContentRequest, GenerateContentResponse, GenerativeModel};
use parking_lot::Mutex;

/// One scripted outcome.
pub enum Step {
    Reply(&'static str),
    RateLimited,
    ServerError(&'static str),
}

impl Step {
    fn into_result(self) -> Result<GenerateContentResponse, ApiError> {
        match self {
            Step::Reply(text) => Ok(GenerateContentResponse::from_text(text)),
            Step::RateLimited => Err(ApiError::RateLimited {
                message: "Resource has been exhausted".to_string(),
            }),
            Step::ServerError(message) => Err(ApiError::Status {
                code: 500,
                message: message.to_string(),
            }),
        }
    }
}

/// Plays back steps in order and records each request.
///
/// Running past the end of the script is a test bug and panics.
#[derive(Default)]
pub struct ScriptedModel {
    steps: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<GenerateContentRequest>>,
}

impl ScriptedModel {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
            requests: Mutex::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().clone()
    }
}

impl GenerativeModel for ScriptedModel {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiError> {
        self.requests.lock().push(request.clone());
        let step = self
            .steps
            .lock()
            .pop_front()
            .expect("scripted model called more times than scripted");
        step.into_result()
    }
}
