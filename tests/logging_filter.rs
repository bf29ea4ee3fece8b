// tests/logging_filter.rs

use wsrun::cli::LogLevel;
use wsrun::logging::log_filter;

fn rendered(cli: Option<LogLevel>, env: Option<&str>) -> String {
    log_filter(cli, env).unwrap().to_string().to_lowercase()
}

#[test]
fn cli_level_overrides_environment_directives() {
    let filter = rendered(Some(LogLevel::Debug), Some("wsrun=trace"));
    assert_eq!(filter, "debug");
}

#[test]
fn environment_directives_are_used_verbatim() {
    let filter = rendered(None, Some(" warn,wsrun::exec=debug "));
    assert!(filter.contains("warn"), "{filter}");
    assert!(filter.contains("wsrun::exec=debug"), "{filter}");
}

#[test]
fn unset_or_blank_environment_defaults_to_info() {
    assert_eq!(rendered(None, None), "info");
    assert_eq!(rendered(None, Some("   ")), "info");
}

#[test]
fn malformed_environment_is_an_error() {
    let err = log_filter(None, Some("wsrun=loud")).unwrap_err();
    assert!(err.to_string().contains("WSRUN_LOG"), "{err}");
}
