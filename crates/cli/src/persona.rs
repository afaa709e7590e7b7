// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persona prompt files under `.claude/commands/`.
//!
//! A persona named `interrogate` lives at `.claude/commands/mc-interrogate.md`
//! and may be requested as `interrogate`, `mc:interrogate` or `mc-interrogate`.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

const PREFIXES: [&str; 2] = ["mc:", "mc-"];
const FILE_PREFIX: &str = "mc-";
const FILE_SUFFIX: &str = ".md";

#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("persona name is empty")]
    EmptyName,

    #[error("Command file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read command file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Command file is empty: {}", path.display())]
    Empty { path: PathBuf },
}

/// A persona name with any `mc:` / `mc-` prefix removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonaName(String);

impl PersonaName {
    /// Normalize a command-line argument.
    pub fn parse(arg: &str) -> Result<Self, PersonaError> {
        let arg = arg.trim();
        let name = PREFIXES
            .iter()
            .find_map(|prefix| arg.strip_prefix(prefix))
            .unwrap_or(arg);
        if name.is_empty() {
            return Err(PersonaError::EmptyName);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `mc-<name>.md`
    pub fn file_name(&self) -> String {
        format!("{FILE_PREFIX}{}{FILE_SUFFIX}", self.0)
    }
}

impl fmt::Display for PersonaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<cwd>/.claude/commands`
pub fn commands_dir(cwd: &Path) -> PathBuf {
    cwd.join(".claude").join("commands")
}

/// `<cwd>/.claude/commands/mc-<name>.md`
pub fn persona_path(cwd: &Path, name: &PersonaName) -> PathBuf {
    commands_dir(cwd).join(name.file_name())
}

/// A loaded persona; its text is the chat's system instruction.
#[derive(Clone, Debug)]
pub struct Persona {
    pub name: PersonaName,
    pub path: PathBuf,
    pub instruction: String,
}

impl Persona {
    /// Read the persona file once. Missing or blank files are fatal.
    pub fn load(cwd: &Path, name: PersonaName) -> Result<Self, PersonaError> {
        let path = persona_path(cwd, &name);
        let instruction = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PersonaError::NotFound { path });
            }
            Err(source) => return Err(PersonaError::Read { path, source }),
        };
        if instruction.trim().is_empty() {
            return Err(PersonaError::Empty { path });
        }
        Ok(Self {
            name,
            path,
            instruction,
        })
    }
}

#[cfg(test)]
#[path = "persona_tests.rs"]
mod tests;
