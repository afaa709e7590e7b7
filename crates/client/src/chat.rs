// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-turn chat on top of a [`GenerativeModel`].

use crate::error::ApiError;
use crate::model::GenerativeModel;
use crate::types::{Content, GenerateContentRequest, GenerationConfig};

/// A conversation with a fixed system instruction.
///
/// Every request carries the full history; a turn is only recorded once the
/// model has answered it, so a failed call leaves the history unchanged.
pub struct ChatSession<'m, M> {
    model: &'m M,
    system_instruction: Option<Content>,
    generation_config: Option<GenerationConfig>,
    history: Vec<Content>,
}

impl<'m, M: GenerativeModel> ChatSession<'m, M> {
    pub fn new(
        model: &'m M,
        system_instruction: impl Into<String>,
        generation_config: GenerationConfig,
    ) -> Self {
        let system_instruction = system_instruction.into();
        Self {
            model,
            system_instruction: (!system_instruction.trim().is_empty())
                .then(|| Content::system(system_instruction)),
            generation_config: Some(generation_config),
            history: Vec::new(),
        }
    }

    /// Turns exchanged so far, oldest first.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Send one user turn and return the model's reply.
    pub async fn send_message(&mut self, text: impl Into<String>) -> Result<String, ApiError> {
        let turn = Content::user(text);

        let mut contents = Vec::with_capacity(self.history.len() + 1);
        contents.extend(self.history.iter().cloned());
        contents.push(turn.clone());

        let request = GenerateContentRequest {
            contents,
            system_instruction: self.system_instruction.clone(),
            generation_config: self.generation_config.clone(),
        };

        let reply = self.model.generate(&request).await?.text()?;

        self.history.push(turn);
        self.history.push(Content::model(reply.clone()));
        Ok(reply)
    }
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod tests;
