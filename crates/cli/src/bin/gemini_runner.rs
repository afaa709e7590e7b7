// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `gemini-runner` entry point.

use gemini_tools::cli::{parse_or_exit, RunnerCli};
use gemini_tools::config::RunnerConfig;
use gemini_tools::credentials::CredentialResolver;
use gemini_tools::exit_codes;
use gemini_tools::output_diagnostic::{print_error, print_hint};
use gemini_tools::{env, logging, runner};

#[tokio::main]
async fn main() {
    let _cli: RunnerCli = parse_or_exit();
    logging::init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let home = env::home();
    let resolver = CredentialResolver::for_runner(home.as_deref(), &cwd);

    let resolved = match resolver.resolve_from_env() {
        Ok(resolved) => resolved,
        Err(e) => {
            print_error(&e);
            print_hint(e.remediation());
            std::process::exit(exit_codes::ERROR);
        }
    };
    tracing::debug!(source = %resolved.source, "using API key");

    let config = RunnerConfig::from_env(resolved.credential);
    let client = match config.api.client() {
        Ok(client) => client,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    };

    let mut stdin = tokio::io::stdin();
    let mut stdout = std::io::stdout();
    if let Err(e) = runner::run(&client, &mut stdin, &mut stdout, config.retry).await {
        print_error(e);
        std::process::exit(exit_codes::ERROR);
    }
}
