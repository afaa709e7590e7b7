// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_helpers::{ScriptedModel, Step};
use gemini_client::Content;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn success_on_first_attempt_does_not_wait() {
    let model = ScriptedModel::new([Step::Reply("done")]);
    let start = Instant::now();

    let text = generate_with_retry(&model, "prompt", RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(text, "done");
    assert_eq!(model.calls(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn two_rate_limits_then_success_waits_two_then_four_seconds() {
    let model = ScriptedModel::new([Step::RateLimited, Step::RateLimited, Step::Reply("finally")]);
    let start = Instant::now();

    let text = generate_with_retry(&model, "prompt", RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(text, "finally");
    assert_eq!(model.calls(), 3);
    assert_eq!(start.elapsed(), Duration::from_secs(2 + 4));
}

#[tokio::test(start_paused = true)]
async fn three_rate_limits_exhaust_retries() {
    let model = ScriptedModel::new([Step::RateLimited, Step::RateLimited, Step::RateLimited]);
    let start = Instant::now();

    let err = generate_with_retry(&model, "prompt", RetryPolicy::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::RetriesExhausted { attempts: 3 }));
    assert_eq!(
        err.to_string(),
        "Failed after max retries due to rate limits."
    );
    assert_eq!(model.calls(), 3);
    assert_eq!(start.elapsed(), Duration::from_secs(2 + 4 + 6));
}

#[tokio::test(start_paused = true)]
async fn other_errors_are_not_retried() {
    let model = ScriptedModel::new([Step::ServerError("backend exploded")]);
    let start = Instant::now();

    let err = generate_with_retry(&model, "prompt", RetryPolicy::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::Api(ApiError::Status { code: 500, .. })));
    assert!(err.to_string().contains("backend exploded"));
    assert_eq!(model.calls(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn rate_limit_then_other_error_stops_immediately() {
    let model = ScriptedModel::new([Step::RateLimited, Step::ServerError("nope")]);

    let err = generate_with_retry(&model, "prompt", RetryPolicy::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::Api(_)));
    assert_eq!(model.calls(), 2);
}

#[test]
fn delay_scales_linearly() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.delay_for(1), Duration::from_secs(2));
    assert_eq!(policy.delay_for(2), Duration::from_secs(4));
    assert_eq!(policy.delay_for(3), Duration::from_secs(6));
}

#[test]
fn delay_formatting() {
    assert_eq!(format_delay(Duration::from_secs(4)), "4s");
    assert_eq!(format_delay(Duration::from_millis(20)), "20ms");
}

#[tokio::test]
async fn whitespace_prompt_is_rejected_without_calling_model() {
    let model = ScriptedModel::default();
    let mut input: &[u8] = b"  \n\t \n";
    let mut output = Vec::new();

    let err = run(&model, &mut input, &mut output, RetryPolicy::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::EmptyPrompt));
    assert_eq!(model.calls(), 0);
    assert!(output.is_empty());
}

#[tokio::test]
async fn invalid_utf8_is_an_input_error() {
    let mut input: &[u8] = &[0xff, 0xfe, b'h', b'i'];
    assert!(matches!(
        read_prompt(&mut input).await,
        Err(RunError::Input(_))
    ));
}

#[tokio::test]
async fn whole_stdin_is_sent_and_reply_written_verbatim() {
    let model = ScriptedModel::new([Step::Reply("  raw *markdown*\nreply")]);
    let mut input: &[u8] = b"line one\nline two\n";
    let mut output = Vec::new();

    run(&model, &mut input, &mut output, RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "  raw *markdown*\nreply\n");
    let requests = model.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].contents,
        vec![Content::user("line one\nline two\n")]
    );
    assert_eq!(requests[0].system_instruction, None);
}
