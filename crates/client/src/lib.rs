// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal client for the Gemini `generateContent` endpoint.
//!
//! Provides the request/response wire types, the [`GenerativeModel`] seam the
//! command-line tools are written against, an HTTP implementation of it, and a
//! multi-turn [`ChatSession`] that keeps the turn history on the caller's side.

mod chat;
mod error;
mod model;
mod types;

pub use chat::ChatSession;
pub use error::ApiError;
pub use model::{GeminiClient, GenerativeModel, DEFAULT_BASE_URL};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback, Role,
};
