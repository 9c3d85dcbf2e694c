//! Console attachment: output tailing, stdin forwarding, and termination.
//!
//! Uses a paused clock so poll intervals elapse instantly.

#![allow(clippy::expect_used)]

use std::time::Duration;

use rlc_cli::application::services::console::{
    self, AttachOutcome, ConsoleSession, poll_once, reattach_session,
};
use rlc_common::{InstanceState, OutputStream};
use tokio_util::sync::CancellationToken;

use crate::mocks::{Call, RecordingLauncher, ScriptedInput, capture_file, instance_path};

const POLL: Duration = Duration::from_millis(1000);

fn session_at(offset: u64) -> ConsoleSession {
    ConsoleSession::new(instance_path(3), OutputStream::Stdout, offset, POLL)
}

// ── Output tailing ────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_attach_emits_chunks_in_order_until_instance_stops() {
    let api = RecordingLauncher::new()
        .with_chunks(["hello ", "world", ""])
        .with_states([
            InstanceState::Running,
            InstanceState::Running,
            InstanceState::Stopped,
        ]);
    let mut session = session_at(0);
    let mut out: Vec<u8> = Vec::new();

    let outcome = console::attach(
        &api,
        &mut session,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect("attach");

    assert_eq!(outcome, AttachOutcome::Finished);
    assert_eq!(out, b"hello world");
    assert_eq!(session.offset, 11);
    assert_eq!(
        api.requested_offsets(),
        vec![Some(0), Some(6), Some(11), Some(11)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_attach_drains_output_written_before_exit() {
    // The final cycle still returns data; it must be written before Finished.
    let api = RecordingLauncher::new()
        .with_chunks(["last words"])
        .with_states([InstanceState::Stopped]);
    let mut session = session_at(0);
    let mut out: Vec<u8> = Vec::new();

    let outcome = console::attach(
        &api,
        &mut session,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect("attach");

    assert_eq!(outcome, AttachOutcome::Finished);
    assert_eq!(out, b"last words");
}

#[tokio::test(start_paused = true)]
async fn test_attach_reads_tail_written_after_last_fetch() {
    // First read is empty; output lands just before the state query says stopped.
    let api = RecordingLauncher::new()
        .with_chunks(["", "goodbye\n"])
        .with_states([InstanceState::Stopped]);
    let mut session = session_at(0);
    let mut out: Vec<u8> = Vec::new();

    let outcome = console::attach(
        &api,
        &mut session,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect("attach");

    assert_eq!(outcome, AttachOutcome::Finished);
    assert_eq!(out, b"goodbye\n");
    assert_eq!(session.offset, 8);
    assert_eq!(api.requested_offsets(), vec![Some(0), Some(0)]);
}

#[tokio::test(start_paused = true)]
async fn test_attach_to_never_started_instance_finishes_without_output() {
    let api = RecordingLauncher::new().with_current(InstanceState::Created);
    let mut session = session_at(0);
    let mut out: Vec<u8> = Vec::new();

    let outcome = console::attach(
        &api,
        &mut session,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect("attach");

    assert_eq!(outcome, AttachOutcome::Finished);
    assert!(out.is_empty());
    assert_eq!(session.offset, 0);
}

#[tokio::test]
async fn test_poll_once_keeps_offset_when_fetch_fails() {
    let api = RecordingLauncher::new().failing_output("connection reset");
    let mut session = session_at(42);
    let mut out: Vec<u8> = Vec::new();

    let err = poll_once(&api, &mut session, &mut out)
        .await
        .expect_err("fetch fails");

    assert!(err.to_string().contains("connection reset"));
    assert_eq!(session.offset, 42);
    assert!(out.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_attach_surfaces_launcher_error() {
    let api = RecordingLauncher::new().failing_output("boom");
    let mut session = session_at(0);
    let mut out: Vec<u8> = Vec::new();

    let result = console::attach(
        &api,
        &mut session,
        ScriptedInput::silent(),
        &mut out,
        &CancellationToken::new(),
    )
    .await;

    assert!(result.is_err());
}

// ── Stdin forwarding ──────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_attach_forwards_input_lines_verbatim() {
    let api = RecordingLauncher::new()
        .with_chunks(["", ""])
        .with_states([InstanceState::Running, InstanceState::Stopped]);
    let mut session = session_at(0);
    let mut out: Vec<u8> = Vec::new();

    let outcome = console::attach(
        &api,
        &mut session,
        ScriptedInput::open(["status\n", "quit\n"]),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect("attach");

    assert_eq!(outcome, AttachOutcome::Finished);
    assert_eq!(api.stdin_lines(), vec!["status\n", "quit\n"]);
    assert!(
        api.calls()
            .contains(&Call::WriteStdin(instance_path(3), "quit\n".to_string()))
    );
}

#[tokio::test(start_paused = true)]
async fn test_attach_returns_input_closed_on_eof() {
    let api = RecordingLauncher::new()
        .with_chunks(["partial"])
        .with_current(InstanceState::Running);
    let mut session = session_at(0);
    let mut out: Vec<u8> = Vec::new();

    let outcome = console::attach(
        &api,
        &mut session,
        ScriptedInput::closing(["bye\n"]),
        &mut out,
        &CancellationToken::new(),
    )
    .await
    .expect("attach");

    assert_eq!(outcome, AttachOutcome::InputClosed);
    assert_eq!(api.stdin_lines(), vec!["bye\n"]);
    assert_eq!(out, b"partial");
}

// ── Interruption ──────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_attach_interrupted_before_first_poll_sends_nothing() {
    let api = RecordingLauncher::new().with_current(InstanceState::Running);
    let mut session = session_at(0);
    let mut out: Vec<u8> = Vec::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = console::attach(&api, &mut session, ScriptedInput::silent(), &mut out, &cancel)
        .await
        .expect("attach");

    assert_eq!(outcome, AttachOutcome::Interrupted);
    assert!(api.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_attach_interrupted_while_waiting_between_polls() {
    let api = RecordingLauncher::new()
        .with_chunks(["tick\n"])
        .with_current(InstanceState::Running);
    let mut session = session_at(0);
    let mut out: Vec<u8> = Vec::new();
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(2500)).await;
        trigger.cancel();
    });

    let outcome = console::attach(&api, &mut session, ScriptedInput::silent(), &mut out, &cancel)
        .await
        .expect("attach");

    assert_eq!(outcome, AttachOutcome::Interrupted);
    assert_eq!(out, b"tick\n");
    // Polls at t=0, 1000 and 2000 ms; the third sleep is cut short.
    assert_eq!(api.requested_offsets(), vec![Some(0), Some(5), Some(5)]);
}

// ── Re-attachment ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_reattach_starts_lookback_window_before_end() {
    let api = RecordingLauncher::new().with_files(vec![
        capture_file(OutputStream::Stdout, 1200),
        capture_file(OutputStream::Stderr, 80),
    ]);

    let stdout = reattach_session(&api, instance_path(3), OutputStream::Stdout, POLL)
        .await
        .expect("session");
    let stderr = reattach_session(&api, instance_path(3), OutputStream::Stderr, POLL)
        .await
        .expect("session");

    assert_eq!(stdout.offset, 700);
    assert_eq!(stderr.offset, 0);
    assert_eq!(stderr.stream, OutputStream::Stderr);
}

#[tokio::test]
async fn test_reattach_without_capture_file_fails() {
    let api = RecordingLauncher::new().with_files(vec![capture_file(OutputStream::Stdout, 10)]);

    let err = reattach_session(&api, instance_path(3), OutputStream::Stderr, POLL)
        .await
        .expect_err("no stderr file");

    assert!(err.to_string().contains("cannot determine current file size"));
}
