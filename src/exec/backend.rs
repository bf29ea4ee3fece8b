// src/exec/backend.rs

//! Pluggable process-spawn abstraction.
//!
//! The runner talks to a `ProcessSpawner` instead of `tokio::process`
//! directly. This makes it easy to swap in a scripted spawner in tests while
//! keeping the production implementation in [`TokioSpawner`].

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use tokio::process::Command;
use tracing::debug;

use crate::types::StdioMode;

/// Fully-resolved request handed to a spawner: no optional fields left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub executable: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub stdin: StdioMode,
    pub stdout: StdioMode,
    pub stderr: StdioMode,
}

/// Raw exit information as reported by the platform.
///
/// On Unix a process either exits with a code or dies from a signal, but the
/// shape allows both so other platforms (and tests) can report them together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessExit {
    pub code: Option<i32>,
    pub signal: Option<String>,
    /// Captured stdout; empty unless stdout was `Piped`.
    pub stdout: Vec<u8>,
}

impl ProcessExit {
    pub fn code(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    pub fn signal(signal: impl Into<String>) -> Self {
        Self {
            signal: Some(signal.into()),
            ..Self::default()
        }
    }
}

/// Trait abstracting how a process is started and awaited.
///
/// Returns `Err` only when the process could not be launched (or its exit
/// status could not be collected). A non-zero exit or a signal is a normal
/// `Ok(ProcessExit)`.
pub trait ProcessSpawner: Send + Sync {
    fn spawn<'a>(
        &'a self,
        request: &'a SpawnRequest,
    ) -> Pin<Box<dyn Future<Output = std::io::Result<ProcessExit>> + Send + 'a>>;
}

/// Real spawner used in production, built on `tokio::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSpawner;

impl ProcessSpawner for TokioSpawner {
    fn spawn<'a>(
        &'a self,
        request: &'a SpawnRequest,
    ) -> Pin<Box<dyn Future<Output = std::io::Result<ProcessExit>> + Send + 'a>> {
        Box::pin(async move {
            let mut cmd = Command::new(&request.executable);
            cmd.args(&request.args)
                .current_dir(&request.cwd)
                .stdin(request.stdin)
                .stdout(request.stdout)
                .stderr(request.stderr)
                .kill_on_drop(true);

            let child = cmd.spawn()?;
            debug!(
                executable = %request.executable,
                pid = ?child.id(),
                cwd = %request.cwd.display(),
                "child process spawned"
            );

            let output = child.wait_with_output().await?;
            let status = output.status;

            Ok(ProcessExit {
                code: status.code(),
                signal: signal_name(&status),
                stdout: output.stdout,
            })
        })
    }
}

#[cfg(unix)]
fn signal_name(status: &std::process::ExitStatus) -> Option<String> {
    use std::os::unix::process::ExitStatusExt;

    status.signal().map(|raw| {
        nix::sys::signal::Signal::try_from(raw)
            .map(|sig| sig.as_str().to_string())
            .unwrap_or_else(|_| raw.to_string())
    })
}

#[cfg(not(unix))]
fn signal_name(_status: &std::process::ExitStatus) -> Option<String> {
    None
}
