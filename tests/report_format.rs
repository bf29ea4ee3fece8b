// tests/report_format.rs

use std::path::PathBuf;

use wsrun::exec::{CompletionRecord, LaunchError};
use wsrun::report::Tone;
use wsrun::report::format::{announce_line, finish_line, qualifier, start_line, target_label};

fn launch_error() -> CompletionRecord {
    CompletionRecord::LaunchError(LaunchError {
        executable: "definitely-missing".to_string(),
        cwd: PathBuf::from("/work/dev-portal"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
    })
}

#[test]
fn root_is_rendered_as_root() {
    assert_eq!(target_label(None), "root");
    assert_eq!(target_label(Some("")), "root");
    assert_eq!(target_label(Some("dev-portal")), "dev-portal");

    let line = start_line("build", Some(""));
    assert_eq!(line.text, "build for root started");
    assert_eq!(line.tone, Tone::Started);
}

#[test]
fn start_line_names_the_target() {
    let line = start_line("deploy", Some("lambdas/backend"));
    assert_eq!(line.text, "deploy for lambdas/backend started");
}

#[test]
fn announce_line_lists_executable_and_args() {
    let line = announce_line("npm run build");
    assert_eq!(line.text, "[ run cmd ]  npm run build");
    assert_eq!(line.tone, Tone::Command);
}

#[test]
fn qualifier_cases() {
    assert_eq!(qualifier(Some(0), None), None);
    assert_eq!(qualifier(Some(2), None).as_deref(), Some("(code: 2)"));
    assert_eq!(qualifier(None, Some("SIGTERM")).as_deref(), Some("(signal: SIGTERM)"));
    assert_eq!(
        qualifier(Some(1), Some("SIGKILL")).as_deref(),
        Some("(code: 1, signal: SIGKILL)")
    );
    // A zero code next to a signal only reports the signal.
    assert_eq!(qualifier(Some(0), Some("SIGINT")).as_deref(), Some("(signal: SIGINT)"));
}

#[test]
fn clean_exit_has_no_qualifier() {
    let line = finish_line("build", Some("dev-portal"), &CompletionRecord::Exited { code: 0 });
    assert_eq!(line.text, "build for dev-portal completed");
    assert_eq!(line.tone, Tone::Succeeded);
}

#[test]
fn non_zero_exit_reports_code() {
    let line = finish_line("build", None, &CompletionRecord::Exited { code: 2 });
    assert_eq!(line.text, "build for root completed (code: 2)");
    assert_eq!(line.tone, Tone::Failed);
}

#[test]
fn signal_reports_code_before_signal() {
    let record = CompletionRecord::Signaled {
        code: Some(137),
        signal: "SIGKILL".to_string(),
    };
    let line = finish_line("deploy", Some("lambdas/listener"), &record);
    assert_eq!(
        line.text,
        "deploy for lambdas/listener completed (code: 137, signal: SIGKILL)"
    );

    let record = CompletionRecord::Signaled {
        code: None,
        signal: "SIGTERM".to_string(),
    };
    let line = finish_line("deploy", Some("lambdas/listener"), &record);
    assert_eq!(line.text, "deploy for lambdas/listener completed (signal: SIGTERM)");
    assert_eq!(line.tone, Tone::Failed);
}

#[test]
fn launch_error_is_errored_with_dump() {
    let line = finish_line("build", Some("dev-portal"), &launch_error());

    assert_eq!(line.tone, Tone::Errored);
    assert!(line.text.starts_with("build for dev-portal errored\n"));
    assert!(!line.text.contains("completed"));
    assert!(line.text.contains("LaunchError"));
    assert!(line.text.contains("definitely-missing"));
    assert!(line.text.contains("NotFound"));
}
