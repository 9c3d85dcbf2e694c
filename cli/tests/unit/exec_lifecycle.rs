//! One-shot exec: the transient instance is always stopped and deleted.

#![allow(clippy::expect_used)]

use std::time::Duration;

use rlc_cli::application::ports::ModifyOptions;
use rlc_cli::application::services::console::AttachOutcome;
use rlc_cli::application::services::exec::exec;
use rlc_cli::domain::error::{ErrorClass, RemoteServiceError};
use rlc_common::{InstanceParams, InstanceState};
use tokio_util::sync::CancellationToken;

use crate::mocks::{Call, RecordingLauncher, ScriptedInput, app_path, instance_path};

const POLL: Duration = Duration::from_millis(200);

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}

/// The two calls every exec must end with once the instance exists.
fn teardown_calls(num: u32) -> [Call; 2] {
    [
        Call::Modify(
            instance_path(num),
            InstanceParams::stopped(),
            ModifyOptions { sync: true },
        ),
        Call::Delete(instance_path(num)),
    ]
}

#[tokio::test(start_paused = true)]
async fn test_exec_streams_stdout_then_stops_and_deletes() {
    let api = RecordingLauncher::new()
        .with_chunks(["hello\n", ""])
        .with_states([InstanceState::Running, InstanceState::Stopped]);
    let mut out: Vec<u8> = Vec::new();

    let outcome = exec(
        &api,
        &app_path(),
        &args(&["-domain", "5"]),
        POLL,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect("exec");

    assert_eq!(outcome, AttachOutcome::Finished);
    assert_eq!(out, b"hello\n");

    let mutations = api.mutations();
    let Call::Create(app, params) = &mutations[0] else {
        panic!("first mutation must be create, got {mutations:?}");
    };
    assert_eq!(app, &app_path());
    assert_eq!(params.state, Some(InstanceState::Running));
    assert_eq!(params.persistent, Some(false));
    assert_eq!(params.unifystdout, Some(true));
    assert_eq!(params.cmdline.as_deref(), Some("-domain 5"));
    assert_eq!(mutations[1..], teardown_calls(7));
}

#[tokio::test(start_paused = true)]
async fn test_exec_without_args_sends_no_cmdline() {
    let api = RecordingLauncher::new().with_states([InstanceState::Stopped]);
    let mut out: Vec<u8> = Vec::new();

    exec(
        &api,
        &app_path(),
        &[],
        POLL,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect("exec");

    let Call::Create(_, params) = &api.mutations()[0] else {
        panic!("expected create");
    };
    assert_eq!(params.cmdline, None);
}

#[tokio::test(start_paused = true)]
async fn test_exec_interrupted_still_cleans_up() {
    let api = RecordingLauncher::new().with_current(InstanceState::Running);
    let mut out: Vec<u8> = Vec::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = exec(
        &api,
        &app_path(),
        &args(&["x"]),
        POLL,
        ScriptedInput::silent(),
        &mut out,
        &cancel,
    )
    .await
    .expect("exec");

    assert_eq!(outcome, AttachOutcome::Interrupted);
    assert_eq!(api.mutations()[1..], teardown_calls(7));
}

#[tokio::test(start_paused = true)]
async fn test_exec_interrupted_mid_poll_still_cleans_up() {
    let api = RecordingLauncher::new()
        .with_chunks(["partial\n"])
        .with_current(InstanceState::Running);
    let mut out: Vec<u8> = Vec::new();
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(2500)).await;
        trigger.cancel();
    });

    let outcome = exec(
        &api,
        &app_path(),
        &args(&["x"]),
        POLL,
        ScriptedInput::silent(),
        &mut out,
        &cancel,
    )
    .await
    .expect("exec");

    assert_eq!(outcome, AttachOutcome::Interrupted);
    assert_eq!(out, b"partial\n");
    assert!(api.requested_offsets().len() > 1);
    assert_eq!(api.mutations()[1..], teardown_calls(7));
}

#[tokio::test(start_paused = true)]
async fn test_exec_input_closed_still_cleans_up() {
    let api = RecordingLauncher::new().with_current(InstanceState::Running);
    let mut out: Vec<u8> = Vec::new();

    let outcome = exec(
        &api,
        &app_path(),
        &args(&["x"]),
        POLL,
        ScriptedInput::closing(["y\n"]),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect("exec");

    assert_eq!(outcome, AttachOutcome::InputClosed);
    assert_eq!(api.stdin_lines(), vec!["y\n"]);
    assert_eq!(api.mutations()[1..], teardown_calls(7));
}

#[tokio::test(start_paused = true)]
async fn test_exec_stream_error_is_returned_after_cleanup() {
    let api = RecordingLauncher::new().failing_output("stream broke");
    let mut out: Vec<u8> = Vec::new();

    let err = exec(
        &api,
        &app_path(),
        &args(&["x"]),
        POLL,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect_err("stream fails");

    assert!(err.to_string().contains("stream broke"));
    assert_eq!(api.mutations()[1..], teardown_calls(7));
}

#[tokio::test(start_paused = true)]
async fn test_exec_stream_error_wins_over_cleanup_error() {
    let api = RecordingLauncher::new()
        .failing_output("stream broke")
        .failing_modify();
    let mut out: Vec<u8> = Vec::new();

    let err = exec(
        &api,
        &app_path(),
        &args(&["x"]),
        POLL,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect_err("stream fails");

    assert!(err.to_string().contains("stream broke"));
    assert!(api.calls().contains(&Call::Delete(instance_path(7))));
}

#[tokio::test(start_paused = true)]
async fn test_exec_failed_stop_still_deletes_and_reports() {
    let api = RecordingLauncher::new()
        .with_states([InstanceState::Stopped])
        .failing_modify();
    let mut out: Vec<u8> = Vec::new();

    let err = exec(
        &api,
        &app_path(),
        &args(&["x"]),
        POLL,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect_err("stop fails");

    assert_eq!(ErrorClass::of(&err), ErrorClass::RemoteService);
    assert!(err.downcast_ref::<RemoteServiceError>().is_some());
    assert_eq!(api.mutations()[1..], teardown_calls(7));
}

#[tokio::test(start_paused = true)]
async fn test_exec_create_failure_sends_nothing_else() {
    let api = RecordingLauncher::new().failing_create();
    let mut out: Vec<u8> = Vec::new();

    let result = exec(
        &api,
        &app_path(),
        &args(&["x"]),
        POLL,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(api.calls().len(), 1);
}
