// src/exec/completion.rs

//! Normalized description of how one child process invocation ended.

use std::path::PathBuf;

use thiserror::Error;

use super::backend::ProcessExit;

/// The process could not be started at all.
///
/// The `Debug` rendering (`{:#?}`) is what report lines use as the
/// structured error dump.
#[derive(Error, Debug)]
#[error("failed to launch `{executable}` in {}: {source}", .cwd.display())]
pub struct LaunchError {
    pub executable: String,
    pub cwd: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl LaunchError {
    pub fn kind(&self) -> std::io::ErrorKind {
        self.source.kind()
    }
}

/// How an invocation settled. Exactly one variant per invocation.
#[derive(Debug)]
pub enum CompletionRecord {
    /// The process exited on its own with `code`.
    Exited { code: i32 },
    /// The process was terminated by `signal`, possibly with a last exit code.
    Signaled { code: Option<i32>, signal: String },
    /// The process never started.
    LaunchError(LaunchError),
}

impl CompletionRecord {
    /// Normalize a raw spawner exit.
    ///
    /// A signal always wins; an exit with neither code nor signal is recorded
    /// as `Exited { code: -1 }`.
    pub fn from_exit(exit: &ProcessExit) -> Self {
        match (&exit.signal, exit.code) {
            (Some(signal), code) => CompletionRecord::Signaled {
                code,
                signal: signal.clone(),
            },
            (None, Some(code)) => CompletionRecord::Exited { code },
            (None, None) => CompletionRecord::Exited { code: -1 },
        }
    }

    /// Exit code, if the process reported one.
    pub fn code(&self) -> Option<i32> {
        match self {
            CompletionRecord::Exited { code } => Some(*code),
            CompletionRecord::Signaled { code, .. } => *code,
            CompletionRecord::LaunchError(_) => None,
        }
    }

    /// Terminating signal name, if any.
    pub fn signal(&self) -> Option<&str> {
        match self {
            CompletionRecord::Signaled { signal, .. } => Some(signal),
            _ => None,
        }
    }

    /// The outcome summary: true iff the process exited with code 0 and was
    /// not signaled.
    pub fn succeeded(&self) -> bool {
        matches!(self, CompletionRecord::Exited { code: 0 })
    }

    pub fn is_launch_error(&self) -> bool {
        matches!(self, CompletionRecord::LaunchError(_))
    }
}
