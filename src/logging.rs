// src/logging.rs

//! Diagnostic logging for `wsrun` (`tracing` + `tracing-subscriber`).
//!
//! Diagnostics always go to stderr. Stdout is left to the child processes
//! and to the `--list` / `--dry-run` listings.
//!
//! Filter selection:
//! 1. `--log-level` sets one global level and ignores the environment.
//! 2. `WSRUN_LOG` holds full filter directives, e.g. `warn,wsrun::exec=debug`.
//! 3. Otherwise `info`.

use anyhow::{Context, Result, anyhow};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Environment variable consulted when no `--log-level` is given.
pub const LOG_ENV: &str = "WSRUN_LOG";

/// Install the global subscriber. Fails if one is already installed or if
/// `WSRUN_LOG` does not parse.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = log_filter(cli_level, env.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("initialising logging: {e}"))
}

/// Resolve the filter from the CLI level and the raw `WSRUN_LOG` value.
///
/// A blank environment value counts as unset.
pub fn log_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> Result<EnvFilter> {
    if let Some(level) = cli_level {
        return Ok(single_level(level_filter(level)));
    }

    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {LOG_ENV} value {directives:?}")),
        None => Ok(single_level(LevelFilter::INFO)),
    }
}

fn single_level(level: LevelFilter) -> EnvFilter {
    EnvFilter::default().add_directive(level.into())
}

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}
