// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for binary-level tests.
//!
//! Each test gets an isolated HOME and working directory, and points the
//! binaries at a local mock of the Generative Language API.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{MockServer, ResponseTemplate};

pub const RUNNER_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";
pub const INTERACT_PATH: &str = "/v1beta/models/gemini-1.5-pro:generateContent";

pub const API_KEY: &str = "test-api-key";

const SCRUBBED_VARS: &[&str] = &[
    "GOOGLE_API_KEY",
    "GEMINI_TOOLS_BASE_URL",
    "GEMINI_RUNNER_MODEL",
    "GEMINI_INTERACT_MODEL",
    "GEMINI_TOOLS_RETRY_UNIT_MS",
    "GEMINI_TOOLS_LOG",
];

/// Separate HOME and working directories for one invocation.
pub struct Sandbox {
    pub home: TempDir,
    pub work: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            work: TempDir::new().unwrap(),
        }
    }

    pub fn write_home(&self, relative: &str, content: &str) {
        write(self.home.path(), relative, content);
    }

    pub fn write_work(&self, relative: &str, content: &str) {
        write(self.work.path(), relative, content);
    }

    /// `.claude/commands/mc-<name>.md` in the working directory.
    pub fn write_persona(&self, name: &str, instruction: &str) {
        self.write_work(&format!(".claude/commands/mc-{name}.md"), instruction);
    }

    /// A command with a clean environment, no API key, and fast retries.
    pub fn command(&self, bin: &str, server: Option<&MockServer>) -> Command {
        let mut cmd = Command::new(bin);
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path())
            .env("GEMINI_TOOLS_RETRY_UNIT_MS", "1")
            .current_dir(self.work.path());
        if let Some(server) = server {
            cmd.env("GEMINI_TOOLS_BASE_URL", format!("{}/v1beta/", server.uri()));
        }
        cmd
    }

    pub fn runner(&self, server: Option<&MockServer>) -> Command {
        self.command(env!("CARGO_BIN_EXE_gemini-runner"), server)
    }

    pub fn interact(&self, server: Option<&MockServer>) -> Command {
        self.command(env!("CARGO_BIN_EXE_gemini-interact"), server)
    }
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A successful `generateContent` response with one text candidate.
pub fn reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    }))
}

pub fn rate_limited() -> ResponseTemplate {
    ResponseTemplate::new(429).set_body_json(json!({
        "error": {
            "code": 429,
            "message": "Resource has been exhausted (e.g. check quota).",
            "status": "RESOURCE_EXHAUSTED"
        }
    }))
}

pub fn server_error(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_json(json!({
        "error": { "code": 500, "message": message, "status": "INTERNAL" }
    }))
}
