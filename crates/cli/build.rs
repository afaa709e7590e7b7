// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Build scripts are expected to panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let path = std::path::Path::new(&out_dir).join("env_names.rs");
    let mut f = std::fs::File::create(path).unwrap();

    let vars = [
        ("GOOGLE_API_KEY", "GOOGLE_API_KEY"),
        ("HOME", "HOME"),
        ("GEMINI_TOOLS_BASE_URL", "GEMINI_TOOLS_BASE_URL"),
        ("GEMINI_RUNNER_MODEL", "GEMINI_RUNNER_MODEL"),
        ("GEMINI_INTERACT_MODEL", "GEMINI_INTERACT_MODEL"),
        ("GEMINI_TOOLS_RETRY_UNIT_MS", "GEMINI_TOOLS_RETRY_UNIT_MS"),
        ("GEMINI_TOOLS_LOG", "GEMINI_TOOLS_LOG"),
    ];

    for (const_name, env_name) in vars {
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";").unwrap();
    }
}
