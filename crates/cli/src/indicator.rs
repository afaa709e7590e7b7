// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text of the transient "working" indicator shown while a turn is in flight.

/// Whimsical verbs for the indicator
pub const WORKING_VERBS: &[&str] = &[
    "Thinking",
    "Computing",
    "Pondering",
    "Processing",
    "Contemplating",
    "Cogitating",
    "Deliberating",
    "Musing",
];

/// Get a random working verb
pub fn random_verb() -> &'static str {
    let idx = fastrand::usize(..WORKING_VERBS.len());
    WORKING_VERBS[idx]
}

pub fn indicator_text(verb: &str) -> String {
    format!("{verb}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_verb_comes_from_list() {
        for _ in 0..32 {
            assert!(WORKING_VERBS.contains(&random_verb()));
        }
    }

    #[test]
    fn indicator_has_ellipsis() {
        assert_eq!(indicator_text("Thinking"), "Thinking...");
    }
}
