// tests/command_runner.rs

mod common;
use crate::common::{init_tracing, RecordingSink, Scripted, ScriptedSpawner, TestResult};

use std::path::Path;
use std::sync::Arc;

use wsrun::errors::WsrunError;
use wsrun::exec::{CommandRunner, CommandSpec, CompletionRecord, ExecOptions};
use wsrun::report::Tone;
use wsrun::types::StdioMode;

fn make_runner(spawner: Arc<ScriptedSpawner>) -> (CommandRunner, RecordingSink) {
    let sink = RecordingSink::new();
    let runner = CommandRunner::new(spawner, Arc::new(sink.clone()));
    (runner, sink)
}

#[tokio::test]
async fn invoke_announces_then_spawns_with_inherited_stdio() {
    init_tracing();

    let spawner = Arc::new(ScriptedSpawner::new());
    let (runner, sink) = make_runner(spawner.clone());

    let spec = CommandSpec::new("npm").args(["run", "build"]);
    let record = runner.invoke(&spec, Path::new("/work/dev-portal")).await;

    assert!(matches!(record, CompletionRecord::Exited { code: 0 }));
    assert_eq!(sink.texts_with(Tone::Command), vec!["[ run cmd ]  npm run build"]);

    let calls = spawner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].executable, "npm");
    assert_eq!(calls[0].args, vec!["run", "build"]);
    assert_eq!(calls[0].cwd, Path::new("/work/dev-portal"));
    assert_eq!(calls[0].stdin, StdioMode::Inherit);
    assert_eq!(calls[0].stdout, StdioMode::Inherit);
    assert_eq!(calls[0].stderr, StdioMode::Inherit);
}

#[tokio::test]
async fn ordinary_failures_are_records_not_errors() {
    let spawner = Arc::new(
        ScriptedSpawner::new()
            .on_dir("/a", Scripted::code(3))
            .on_dir("/b", Scripted::signal("SIGTERM")),
    );
    let (runner, _sink) = make_runner(spawner);
    let spec = CommandSpec::new("make");

    match runner.invoke(&spec, Path::new("/a")).await {
        CompletionRecord::Exited { code } => assert_eq!(code, 3),
        other => panic!("expected Exited, got {:?}", other),
    }

    match runner.invoke(&spec, Path::new("/b")).await {
        CompletionRecord::Signaled { code, signal } => {
            assert_eq!(code, None);
            assert_eq!(signal, "SIGTERM");
        }
        other => panic!("expected Signaled, got {:?}", other),
    }
}

#[tokio::test]
async fn launch_failure_maps_to_launch_error() {
    let spawner = Arc::new(ScriptedSpawner::new().with_default(Scripted::not_found()));
    let (runner, sink) = make_runner(spawner);

    let record = runner
        .invoke(&CommandSpec::new("no-such-tool"), Path::new("/work"))
        .await;

    match record {
        CompletionRecord::LaunchError(err) => {
            assert_eq!(err.executable, "no-such-tool");
            assert_eq!(err.cwd, Path::new("/work"));
            assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected LaunchError, got {:?}", other),
    }

    // Still announced before the attempt.
    assert_eq!(sink.texts(), vec!["[ run cmd ]  no-such-tool"]);
}

#[tokio::test]
async fn caller_options_win_over_runner_defaults() {
    let spawner = Arc::new(ScriptedSpawner::new());
    let (runner, _sink) = make_runner(spawner.clone());
    let runner = runner.with_defaults(
        ExecOptions::default()
            .with_stdout(StdioMode::Null)
            .with_stderr(StdioMode::Null),
    );

    let spec = CommandSpec::new("sam")
        .arg("deploy")
        .options(ExecOptions::default().with_stdout(StdioMode::Inherit).with_cwd("sub"));
    runner.invoke(&spec, Path::new("/work")).await;

    let call = &spawner.calls()[0];
    assert_eq!(call.stdout, StdioMode::Inherit);
    assert_eq!(call.stderr, StdioMode::Null);
    assert_eq!(call.stdin, StdioMode::Inherit);
    assert_eq!(call.cwd, Path::new("/work/sub"));
}

#[tokio::test]
async fn invoke_never_swallows_output_into_a_pipe() {
    let spawner = Arc::new(ScriptedSpawner::new());
    let (runner, _sink) = make_runner(spawner.clone());
    let runner = runner.with_defaults(ExecOptions::default().with_stderr(StdioMode::Piped));

    let spec = CommandSpec::new("sh")
        .args(["-c", "echo VISIBLE"])
        .options(ExecOptions::default().with_stdout(StdioMode::Piped));
    let record = runner.invoke(&spec, Path::new("/work")).await;

    assert!(matches!(record, CompletionRecord::Exited { code: 0 }));
    let calls = spawner.calls();
    assert_eq!(calls[0].stdout, StdioMode::Inherit);
    assert_eq!(calls[0].stderr, StdioMode::Inherit);
}

#[tokio::test]
async fn capture_returns_stdout_and_pipes_only_stdout() -> TestResult {
    let spawner = Arc::new(ScriptedSpawner::new().with_default(Scripted::stdout("v1.2.3\n")));
    let (runner, sink) = make_runner(spawner.clone());

    let out = runner
        .capture(&CommandSpec::new("git").args(["describe", "--tags"]), Path::new("/repo"))
        .await?;

    assert_eq!(out, "v1.2.3\n");
    assert_eq!(sink.texts(), vec!["[ run cmd ]  git describe --tags"]);

    let call = &spawner.calls()[0];
    assert_eq!(call.stdout, StdioMode::Piped);
    assert_eq!(call.stdin, StdioMode::Inherit);
    assert_eq!(call.stderr, StdioMode::Inherit);
    Ok(())
}

#[tokio::test]
async fn capture_fails_on_non_zero_exit_and_launch_error() {
    let spawner = Arc::new(
        ScriptedSpawner::new()
            .on_dir("/fail", Scripted::code(128))
            .on_dir("/missing", Scripted::not_found()),
    );
    let (runner, _sink) = make_runner(spawner);
    let spec = CommandSpec::new("aws").args(["cloudformation", "describe-stacks"]);

    match runner.capture(&spec, Path::new("/fail")).await {
        Err(WsrunError::CommandFailed { command, reason }) => {
            assert_eq!(command, "aws cloudformation describe-stacks");
            assert!(reason.contains("128"));
        }
        other => panic!("expected CommandFailed, got {:?}", other),
    }

    match runner.capture(&spec, Path::new("/missing")).await {
        Err(WsrunError::CommandFailed { reason, .. }) => {
            assert!(reason.contains("failed to launch"));
        }
        other => panic!("expected CommandFailed, got {:?}", other),
    }
}
