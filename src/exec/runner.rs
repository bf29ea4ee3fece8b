// src/exec/runner.rs

//! Single external process invocation.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::{Result, WsrunError};
use crate::report::LogSink;
use crate::report::format::announce_line;
use crate::types::StdioMode;

use super::backend::{ProcessSpawner, SpawnRequest};
use super::command::{CommandSpec, ExecOptions};
use super::completion::{CompletionRecord, LaunchError};

/// Runs one command at a time through a [`ProcessSpawner`] and normalizes
/// how it ended.
///
/// Every invocation is announced on the sink before it is launched. Stdio is
/// inherited unless the command's options or the runner defaults say
/// otherwise.
#[derive(Clone)]
pub struct CommandRunner {
    spawner: Arc<dyn ProcessSpawner>,
    sink: Arc<dyn LogSink>,
    defaults: ExecOptions,
}

impl CommandRunner {
    pub fn new(spawner: Arc<dyn ProcessSpawner>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            spawner,
            sink,
            defaults: ExecOptions::default(),
        }
    }

    /// Replace the options used for fields a command leaves unset.
    pub fn with_defaults(mut self, defaults: ExecOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &ExecOptions {
        &self.defaults
    }

    /// Run `spec` in `cwd` and wait for it to settle.
    ///
    /// `cwd` is the base directory; a `cwd` in the command options is
    /// resolved against it. Ordinary failures (non-zero exit, signal) are
    /// returned as records, and only a failure to start the process yields
    /// [`CompletionRecord::LaunchError`].
    ///
    /// Nothing reads a piped stream here, so `Piped` output streams are
    /// inherited instead.
    pub async fn invoke(&self, spec: &CommandSpec, cwd: &Path) -> CompletionRecord {
        let mut request = self.request_for(spec, cwd, None);
        request.stdout = unpiped(request.stdout);
        request.stderr = unpiped(request.stderr);
        self.sink.emit(&announce_line(&spec.command_line()));

        let result = self.spawner.spawn(&request).await;
        match result {
            Ok(exit) => {
                let record = CompletionRecord::from_exit(&exit);
                debug!(
                    executable = %request.executable,
                    cwd = %request.cwd.display(),
                    code = ?record.code(),
                    signal = ?record.signal(),
                    "process settled"
                );
                record
            }
            Err(source) => {
                warn!(
                    executable = %request.executable,
                    cwd = %request.cwd.display(),
                    error = %source,
                    "process failed to launch"
                );
                CompletionRecord::LaunchError(LaunchError {
                    executable: request.executable,
                    cwd: request.cwd,
                    source,
                })
            }
        }
    }

    /// Run `spec` in `cwd` with stdout captured and return it as text.
    ///
    /// Stdin and stderr follow the usual defaults (inherited unless set), so
    /// prompts and diagnostics still reach the operator. Anything other than
    /// a clean exit is an error.
    pub async fn capture(&self, spec: &CommandSpec, cwd: &Path) -> Result<String> {
        let request = self.request_for(spec, cwd, Some(StdioMode::Piped));
        let command = spec.command_line();
        self.sink.emit(&announce_line(&command));

        let exit = self
            .spawner
            .spawn(&request)
            .await
            .map_err(|e| WsrunError::CommandFailed {
                command: command.clone(),
                reason: format!("failed to launch: {e}"),
            })?;

        let record = CompletionRecord::from_exit(&exit);
        if !record.succeeded() {
            let reason = match (record.code(), record.signal()) {
                (_, Some(signal)) => format!("terminated by signal {signal}"),
                (Some(code), None) => format!("exited with code {code}"),
                (None, None) => "exited without a status".to_string(),
            };
            return Err(WsrunError::CommandFailed { command, reason });
        }

        let stdout = String::from_utf8_lossy(&exit.stdout).into_owned();
        info!(command = %command, bytes = exit.stdout.len(), "captured command output");
        Ok(stdout)
    }

    fn request_for(&self, spec: &CommandSpec, cwd: &Path, stdout: Option<StdioMode>) -> SpawnRequest {
        let options = spec.options.merged_over(&self.defaults);
        SpawnRequest {
            executable: spec.executable.clone(),
            args: spec.args.clone(),
            cwd: options.working_dir(cwd),
            stdin: options.stdin.unwrap_or_default(),
            stdout: stdout.or(options.stdout).unwrap_or_default(),
            stderr: options.stderr.unwrap_or_default(),
        }
    }
}

fn unpiped(mode: StdioMode) -> StdioMode {
    match mode {
        StdioMode::Piped => StdioMode::Inherit,
        other => other,
    }
}

impl std::fmt::Debug for CommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRunner")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}
