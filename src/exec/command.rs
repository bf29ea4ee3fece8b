// src/exec/command.rs

//! Caller-facing description of a command to run.

use std::path::{Path, PathBuf};

use crate::types::StdioMode;

/// Per-invocation process options.
///
/// Every field is optional. [`ExecOptions::merged_over`] combines caller
/// options with defaults field by field; a field set by the caller always
/// wins over the default for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Working directory override. Relative values are resolved against the
    /// target's own directory.
    pub cwd: Option<PathBuf>,
    pub stdin: Option<StdioMode>,
    pub stdout: Option<StdioMode>,
    pub stderr: Option<StdioMode>,
}

impl ExecOptions {
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_stdout(mut self, mode: StdioMode) -> Self {
        self.stdout = Some(mode);
        self
    }

    pub fn with_stderr(mut self, mode: StdioMode) -> Self {
        self.stderr = Some(mode);
        self
    }

    pub fn with_stdin(mut self, mode: StdioMode) -> Self {
        self.stdin = Some(mode);
        self
    }

    /// Overlay `self` onto `defaults`.
    pub fn merged_over(&self, defaults: &ExecOptions) -> ExecOptions {
        ExecOptions {
            cwd: self.cwd.clone().or_else(|| defaults.cwd.clone()),
            stdin: self.stdin.or(defaults.stdin),
            stdout: self.stdout.or(defaults.stdout),
            stderr: self.stderr.or(defaults.stderr),
        }
    }

    /// Working directory to use for a target rooted at `base`.
    pub fn working_dir(&self, base: &Path) -> PathBuf {
        match &self.cwd {
            Some(cwd) => base.join(cwd),
            None => base.to_path_buf(),
        }
    }
}

/// An executable, its arguments and the options to run it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub executable: String,
    pub args: Vec<String>,
    pub options: ExecOptions,
}

impl CommandSpec {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            args: Vec::new(),
            options: ExecOptions::default(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn options(mut self, options: ExecOptions) -> Self {
        self.options = options;
        self
    }

    /// `executable arg1 arg2 ...`, as shown in the announce line.
    pub fn command_line(&self) -> String {
        std::iter::once(self.executable.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
