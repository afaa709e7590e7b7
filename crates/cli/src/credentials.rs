// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! API credential lookup.
//!
//! Sources are probed in order and the first non-empty value wins:
//! 1. `GOOGLE_API_KEY` in the process environment
//! 2. `GOOGLE_API_KEY` in a project `.env` (current directory)
//! 3. `apiKey` in `~/.gemini/settings.json`
//! 4. `GOOGLE_API_KEY=...` in `~/.gemini/.env` (interactive tool only)
//!
//! A source that cannot be read or parsed counts as absent.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::env;

static KEY_LINE_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:export[ \t]+)?GOOGLE_API_KEY[ \t]*=(.*)$").ok()
});

/// Directory of the official Gemini CLI's user settings.
pub const GEMINI_DIR: &str = ".gemini";

const SETTINGS_API_KEY_FIELD: &str = "apiKey";

/// An opaque API token. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Where a credential may come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialSource {
    /// The `GOOGLE_API_KEY` environment variable.
    Environment,
    /// A dotenv file parsed with `dotenvy` (project `.env`).
    DotEnv(PathBuf),
    /// A JSON settings file with an `apiKey` field.
    SettingsJson(PathBuf),
    /// A text file searched for a `GOOGLE_API_KEY=value` line.
    KeyValueFile(PathBuf),
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => write!(f, "${}", env::GOOGLE_API_KEY),
            Self::DotEnv(path) | Self::SettingsJson(path) | Self::KeyValueFile(path) => {
                write!(f, "{}", path.display())
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{} not found.", env::GOOGLE_API_KEY)]
    NotFound,
}

impl CredentialError {
    /// Guidance printed after the error.
    pub fn remediation(&self) -> &'static str {
        match self {
            Self::NotFound => {
                "Please set it in the environment or a .env file, or run 'gemini auth' using the official CLI."
            }
        }
    }
}

/// A credential and the source that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub credential: Credential,
    pub source: CredentialSource,
}

/// Ordered list of credential sources.
#[derive(Clone, Debug)]
pub struct CredentialResolver {
    sources: Vec<CredentialSource>,
}

impl CredentialResolver {
    pub fn new(sources: Vec<CredentialSource>) -> Self {
        Self { sources }
    }

    /// Sources consulted by `gemini-runner`.
    pub fn for_runner(home: Option<&Path>, cwd: &Path) -> Self {
        let mut sources = vec![
            CredentialSource::Environment,
            CredentialSource::DotEnv(cwd.join(".env")),
        ];
        if let Some(home) = home {
            sources.push(CredentialSource::SettingsJson(
                home.join(GEMINI_DIR).join("settings.json"),
            ));
        }
        Self::new(sources)
    }

    /// Sources consulted by `gemini-interact`: the runner's plus `~/.gemini/.env`.
    pub fn for_interactive(home: Option<&Path>, cwd: &Path) -> Self {
        let mut resolver = Self::for_runner(home, cwd);
        if let Some(home) = home {
            resolver
                .sources
                .push(CredentialSource::KeyValueFile(home.join(GEMINI_DIR).join(".env")));
        }
        resolver
    }

    pub fn sources(&self) -> &[CredentialSource] {
        &self.sources
    }

    /// Resolve against the process environment.
    pub fn resolve_from_env(&self) -> Result<Resolved, CredentialError> {
        self.resolve(env::google_api_key().as_deref())
    }

    /// Resolve with an explicit value standing in for the environment variable.
    pub fn resolve(&self, env_value: Option<&str>) -> Result<Resolved, CredentialError> {
        for source in &self.sources {
            match probe(source, env_value) {
                Some(value) => {
                    tracing::debug!(%source, "credential found");
                    return Ok(Resolved {
                        credential: Credential::new(value),
                        source: source.clone(),
                    });
                }
                None => tracing::trace!(%source, "no credential"),
            }
        }
        Err(CredentialError::NotFound)
    }
}

fn probe(source: &CredentialSource, env_value: Option<&str>) -> Option<String> {
    let value = match source {
        CredentialSource::Environment => env_value.map(str::to_string),
        CredentialSource::DotEnv(path) => {
            if !is_dotenv(path) {
                return None;
            }
            read_dotenv(path)
        }
        CredentialSource::SettingsJson(path) => {
            if !is_json(path) {
                return None;
            }
            read_settings_json(path)
        }
        CredentialSource::KeyValueFile(path) => {
            if !is_dotenv(path) {
                return None;
            }
            read_key_line(path)
        }
    }?;
    non_empty(&value)
}

fn read_dotenv(path: &Path) -> Option<String> {
    dotenvy::from_path_iter(path)
        .ok()?
        .filter_map(Result::ok)
        .find(|(key, value)| key == env::GOOGLE_API_KEY && !value.trim().is_empty())
        .map(|(_, value)| value)
}

fn read_settings_json(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let settings: serde_json::Value = serde_json::from_str(&content).ok()?;
    settings
        .get(SETTINGS_API_KEY_FIELD)?
        .as_str()
        .map(str::to_string)
}

fn read_key_line(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    find_key_line(&content)
}

/// First non-empty `GOOGLE_API_KEY=value` in `content`, trimmed and unquoted.
///
/// A blank assignment is skipped in favor of a later one rather than ending
/// the search.
pub fn find_key_line(content: &str) -> Option<String> {
    let re = KEY_LINE_REGEX.as_ref()?;
    re.captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| unquote(m.as_str().trim()))
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    value
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

// `Path::extension` is `None` for a bare `.env`, so match on the name.
fn is_dotenv(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(".env"))
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
