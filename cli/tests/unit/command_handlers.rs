//! Command handlers against the recording launcher.
//!
//! Checks that each handler validates its address before any request and
//! maps its flags onto the right launcher call.

#![allow(clippy::expect_used)]

use std::time::Duration;

use rlc_cli::app::{AppContext, OutputMode, Settings};
use rlc_cli::application::ports::ModifyOptions;
use rlc_cli::commands::attach::AttachArgs;
use rlc_cli::commands::delete::DeleteArgs;
use rlc_cli::commands::exec::ExecArgs;
use rlc_cli::commands::log::LogArgs;
use rlc_cli::commands::modify::ModifyArgs;
use rlc_cli::commands::new::NewArgs;
use rlc_cli::commands::resdel::ResDelArgs;
use rlc_cli::commands::resput::ResPutArgs;
use rlc_cli::commands::run::RunArgs;
use rlc_cli::commands::stop::StopArgs;
use rlc_cli::commands::{
    InstanceParamArgs, OutputFileArgs, StreamArgs, attach, delete, exec, log, modify, new,
    resdel, resput, run, stop,
};
use rlc_cli::domain::address::ResourcePath;
use rlc_cli::infra::config::YamlConfigStore;
use rlc_cli::output::OutputContext;
use rlc_common::{InstanceParams, InstanceState, OutputStream};
use tokio_util::sync::CancellationToken;

use crate::mocks::{
    Call, RecordingLauncher, ScriptedInput, app_path, capture_file, instance_path,
};

fn app_context() -> AppContext {
    AppContext {
        output: OutputContext::new(true, true),
        mode: OutputMode::Human,
        config_store: YamlConfigStore::new(),
        settings: Settings {
            url: "http://127.0.0.1:9".to_string(),
            poll_interval: Duration::from_millis(10),
            verbose: false,
        },
    }
}

fn stdout_stream() -> StreamArgs {
    StreamArgs {
        stdout: true,
        stderr: false,
    }
}

// ── new / modify ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_new_sends_only_given_params() {
    let api = RecordingLauncher::new();
    let args = NewArgs {
        params: InstanceParamArgs {
            run: true,
            cmdline: Some("-domain 5".to_string()),
            ..InstanceParamArgs::default()
        },
        app: "srv/spy".to_string(),
    };

    new::run(&app_context(), &api, &args).await.expect("new");

    let expected = InstanceParams {
        state: Some(InstanceState::Running),
        cmdline: Some("-domain 5".to_string()),
        ..InstanceParams::default()
    };
    assert_eq!(api.calls(), vec![Call::Create(app_path(), expected)]);
}

#[tokio::test]
async fn test_new_with_malformed_address_sends_nothing() {
    let api = RecordingLauncher::new();
    let args = NewArgs {
        params: InstanceParamArgs::default(),
        app: "srv/spy/1".to_string(),
    };

    let result = new::run(&app_context(), &api, &args).await;

    assert!(result.is_err());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_modify_is_not_synchronous() {
    let api = RecordingLauncher::new();
    let args = ModifyArgs {
        params: InstanceParamArgs {
            persistent: Some(false),
            ..InstanceParamArgs::default()
        },
        instance: "srv/spy/2".to_string(),
    };

    modify::run(&app_context(), &api, &args).await.expect("modify");

    let expected = InstanceParams {
        persistent: Some(false),
        ..InstanceParams::default()
    };
    assert_eq!(
        api.calls(),
        vec![Call::Modify(instance_path(2), expected, ModifyOptions::default())]
    );
}

// ── run / stop / delete ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_stop_waits_for_completion() {
    let api = RecordingLauncher::new().with_current(InstanceState::Running);
    let args = StopArgs {
        instance: "srv/spy/3".to_string(),
    };

    stop::run(&app_context(), &api, &args).await.expect("stop");

    assert_eq!(
        api.calls(),
        vec![Call::Modify(
            instance_path(3),
            InstanceParams::stopped(),
            ModifyOptions { sync: true }
        )]
    );
}

#[tokio::test]
async fn test_run_without_stream_does_not_attach() {
    let api = RecordingLauncher::new();
    let args = RunArgs {
        stream: StreamArgs::default(),
        poll: None,
        instance: "srv/spy/3".to_string(),
    };
    assert!(!args.attaches());

    run::run(
        &app_context(),
        &api,
        &args,
        ScriptedInput::silent(),
        &CancellationToken::new(),
    )
    .await
    .expect("run");

    assert_eq!(
        api.calls(),
        vec![Call::Modify(
            instance_path(3),
            InstanceParams::running(),
            ModifyOptions::default()
        )]
    );
}

#[tokio::test(start_paused = true)]
async fn test_run_with_stream_attaches_from_start() {
    let api = RecordingLauncher::new()
        .with_chunks(["ready\n"])
        .with_states([InstanceState::Stopped]);
    let args = RunArgs {
        stream: stdout_stream(),
        poll: Some(5),
        instance: "srv/spy/3".to_string(),
    };

    run::run(
        &app_context(),
        &api,
        &args,
        ScriptedInput::silent(),
        &CancellationToken::new(),
    )
    .await
    .expect("run");

    assert_eq!(api.requested_offsets(), vec![Some(0), Some(6)]);
}

#[tokio::test]
async fn test_delete_targets_instance() {
    let api = RecordingLauncher::new();
    let args = DeleteArgs {
        instance: "srv/spy/4".to_string(),
    };

    delete::run(&app_context(), &api, &args).await.expect("delete");

    assert_eq!(api.calls(), vec![Call::Delete(instance_path(4))]);
}

// ── attach / exec ─────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_attach_defaults_to_stdout_tail() {
    let api = RecordingLauncher::new()
        .with_files(vec![
            capture_file(OutputStream::Stdout, 2000),
            capture_file(OutputStream::Stderr, 10),
        ])
        .with_states([InstanceState::Stopped]);
    let args = AttachArgs {
        stream: StreamArgs::default(),
        poll: None,
        instance: "srv/spy/3".to_string(),
    };

    attach::run(
        &app_context(),
        &api,
        &args,
        ScriptedInput::silent(),
        &CancellationToken::new(),
    )
    .await
    .expect("attach");

    assert_eq!(api.calls()[0], Call::FileInfo(instance_path(3)));
    assert_eq!(api.requested_offsets(), vec![Some(1500), Some(1500)]);
}

#[tokio::test(start_paused = true)]
async fn test_exec_joins_trailing_args() {
    let api = RecordingLauncher::new().with_states([InstanceState::Stopped]);
    let args = ExecArgs {
        poll: None,
        app: "srv/spy".to_string(),
        args: vec!["-v".to_string(), "--count".to_string(), "3".to_string()],
    };

    exec::run(
        &app_context(),
        &api,
        &args,
        ScriptedInput::silent(),
        &CancellationToken::new(),
    )
    .await
    .expect("exec");

    let Call::Create(_, params) = &api.mutations()[0] else {
        panic!("expected create first");
    };
    assert_eq!(params.cmdline.as_deref(), Some("-v --count 3"));
    assert_eq!(api.mutations().last(), Some(&Call::Delete(instance_path(7))));
}

// ── resources ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_resput_uploads_file_content() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let file = dir.path().join("input.cfg");
    std::fs::write(&file, b"threshold=3\n").expect("write");
    let api = RecordingLauncher::new();
    let args = ResPutArgs {
        file,
        resource: "srv/spy/3/input.cfg".to_string(),
    };

    resput::run(&app_context(), &api, &args).await.expect("resput");

    let path: ResourcePath = "srv/spy/3/input.cfg".parse().expect("valid");
    assert_eq!(
        api.calls(),
        vec![Call::Upload(path, b"threshold=3\n".to_vec())]
    );
}

#[tokio::test]
async fn test_resput_missing_file_sends_nothing() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let api = RecordingLauncher::new();
    let args = ResPutArgs {
        file: dir.path().join("absent.bin"),
        resource: "srv/spy/3/absent.bin".to_string(),
    };

    let err = resput::run(&app_context(), &api, &args)
        .await
        .expect_err("missing file");

    assert!(err.to_string().contains("cannot read"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_resdel_rejects_pattern_in_resource_name() {
    let api = RecordingLauncher::new();
    let args = ResDelArgs {
        resource: "srv/spy/3/*.log".to_string(),
    };

    assert!(resdel::run(&app_context(), &api, &args).await.is_err());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_log_saved_to_file() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let file = dir.path().join("launcher.log");
    let api = RecordingLauncher::new();
    let args = LogArgs {
        output: OutputFileArgs {
            file: Some(file.clone()),
        },
        instance: "srv/spy/3".to_string(),
    };

    log::run(&app_context(), &api, &args).await.expect("log");

    assert!(file.exists());
    assert_eq!(api.calls(), vec![Call::ReadLog(instance_path(3))]);
}
