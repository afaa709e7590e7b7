// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `gemini-interact` entry point.

use tokio::io::BufReader;

use gemini_tools::cli::{parse_or_exit, InteractCli, INTERACT_EXAMPLE, INTERACT_USAGE};
use gemini_tools::config::InteractConfig;
use gemini_tools::credentials::CredentialResolver;
use gemini_tools::exit_codes;
use gemini_tools::output_diagnostic::{print_error, print_hint};
use gemini_tools::persona::{Persona, PersonaName};
use gemini_tools::session::{InteractiveSession, SessionStyle};
use gemini_tools::{env, logging};

#[tokio::main]
async fn main() {
    let cli: InteractCli = parse_or_exit();
    logging::init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let home = env::home();

    // The key is checked before the arguments.
    let resolver = CredentialResolver::for_interactive(home.as_deref(), &cwd);
    let resolved = match resolver.resolve_from_env() {
        Ok(resolved) => resolved,
        Err(e) => {
            print_error(&e);
            print_hint(e.remediation());
            std::process::exit(exit_codes::ERROR);
        }
    };
    tracing::debug!(source = %resolved.source, "using API key");

    let Some(name) = cli
        .command_name
        .as_deref()
        .and_then(|arg| PersonaName::parse(arg).ok())
    else {
        print_hint(INTERACT_USAGE);
        print_hint(INTERACT_EXAMPLE);
        std::process::exit(exit_codes::ERROR);
    };

    let persona = match Persona::load(&cwd, name) {
        Ok(persona) => persona,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    };

    let config = InteractConfig::from_env(resolved.credential);
    let client = match config.api.client() {
        Ok(client) => client,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    };

    let session = InteractiveSession::new(
        &client,
        &persona,
        config.generation,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        std::io::stderr(),
        SessionStyle::detect(),
    );
    match session.run().await {
        Ok(summary) => {
            tracing::debug!(?summary, "session complete");
            std::process::exit(exit_codes::SUCCESS);
        }
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}
