// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::StdioMode;

/// Command-line arguments for `wsrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wsrun",
    version,
    about = "Run a command for the workspace root and each of its packages, in order.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Wsrun.toml` in the current working directory if it exists,
    /// otherwise the built-in package list rooted at the current directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Label used in report lines (e.g. "build", "deploy").
    #[arg(long, value_name = "LABEL", default_value = "run")]
    pub action: String,

    /// Run for this target only (`root` selects the workspace root).
    #[arg(long, value_name = "NAME")]
    pub target: Option<String>,

    /// Where report lines go: the terminal (stderr) or the log.
    #[arg(long, value_enum, value_name = "SINK", default_value_t = ReportSink::Terminal)]
    pub report: ReportSink,

    /// Route child stdout (inherit, null; piped acts as inherit). Overrides `[defaults].stdout`.
    #[arg(long, value_name = "MODE")]
    pub stdout: Option<StdioMode>,

    /// Route child stderr (inherit, null; piped acts as inherit). Overrides `[defaults].stderr`.
    #[arg(long, value_name = "MODE")]
    pub stderr: Option<StdioMode>,

    /// When to colour report lines.
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WSRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the resolved command per target, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the target registry and exit.
    #[arg(long)]
    pub list: bool,

    /// Command to run, followed by its arguments.
    ///
    /// `{target}` and `{path}` in arguments are replaced by the target name
    /// (empty for the root) and its resolved directory.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND",
        required_unless_present = "list"
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Colour policy for report lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Destination for report lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ReportSink {
    /// Plain lines on stderr, coloured per `--color`.
    Terminal,
    /// `tracing` events, interleaved with diagnostics.
    Log,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
