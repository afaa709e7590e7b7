// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tracing` subscriber setup shared by both binaries.

use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::env;

/// Filter used when `GEMINI_TOOLS_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber filtered by `GEMINI_TOOLS_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init();
}
