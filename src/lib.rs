// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;
pub mod targets;
pub mod types;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, ColorChoice, ReportSink};
use crate::config::{default_config_path, load_and_validate};
use crate::engine::Orchestrator;
use crate::exec::{CommandRunner, ExecOptions, TokioSpawner};
use crate::report::{ActionReporter, LogSink, TerminalSink, TracingSink};
use crate::targets::{Target, TargetRegistry};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (or the built-in registry)
/// - the terminal report sink
/// - the process runner
/// - the orchestrator
///
/// Returns the aggregate outcome: true only if every target succeeded.
pub async fn run(args: CliArgs) -> Result<bool> {
    let (registry, defaults) = load_registry(args.config.as_deref())?;

    if args.list {
        print_registry(&registry);
        return Ok(true);
    }

    let Some((executable, raw_args)) = args.command.split_first() else {
        anyhow::bail!("no command given");
    };

    if args.dry_run {
        print_dry_run(&registry, args.target.as_deref(), executable, raw_args)?;
        return Ok(true);
    }

    let sink: Arc<dyn LogSink> = match args.report {
        ReportSink::Terminal => Arc::new(terminal_sink(args.color)),
        ReportSink::Log => Arc::new(TracingSink),
    };
    let runner = CommandRunner::new(Arc::new(TokioSpawner), sink.clone()).with_defaults(defaults);
    let orchestrator = Orchestrator::new(registry, runner, ActionReporter::new(sink));
    let options = ExecOptions {
        stdout: args.stdout,
        stderr: args.stderr,
        ..ExecOptions::default()
    };

    let build_args = |target: &Target| expand_args(raw_args, target);
    let ok = match args.target.as_deref() {
        Some(name) => {
            orchestrator
                .run_for_named(&args.action, name, executable, build_args, &options)
                .await?
        }
        None => {
            orchestrator
                .run_for_all(&args.action, executable, build_args, &options)
                .await
        }
    };

    info!(action = %args.action, success = ok, "wsrun finished");
    Ok(ok)
}

/// Build the registry and runner defaults.
///
/// - An explicit `--config` must load.
/// - Otherwise `Wsrun.toml` in the current directory is used if present.
/// - Otherwise the built-in package list, rooted at the current directory.
fn load_registry(config: Option<&str>) -> Result<(TargetRegistry, ExecOptions)> {
    let config_path = match config {
        Some(path) => Some(PathBuf::from(path)),
        None => Some(default_config_path()).filter(|p| p.is_file()),
    };

    match config_path {
        Some(path) => {
            let cfg = load_and_validate(&path)?;
            let base = config_root_dir(&path)?;
            debug!(config = %path.display(), root = %base.display(), "loaded config");
            Ok((TargetRegistry::from_config(&cfg, &base), cfg.defaults.exec_options()))
        }
        None => {
            let cwd = std::env::current_dir()?;
            debug!(root = %cwd.display(), "no config file; using built-in registry");
            Ok((TargetRegistry::builtin(cwd), ExecOptions::default()))
        }
    }
}

/// Absolute directory containing the config file.
///
/// A bare filename like "Wsrun.toml" (parent = "") resolves to the current
/// working directory.
fn config_root_dir(config_path: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => cwd.join(parent),
        _ => cwd,
    })
}

fn terminal_sink(color: ColorChoice) -> TerminalSink {
    match color {
        ColorChoice::Auto => TerminalSink::auto(),
        ColorChoice::Always => TerminalSink::new(true),
        ColorChoice::Never => TerminalSink::new(false),
    }
}

/// Substitute `{target}` and `{path}` in each argument.
pub fn expand_args(args: &[String], target: &Target) -> Vec<String> {
    let path = target.path().display().to_string();
    args.iter()
        .map(|arg| arg.replace("{target}", target.name()).replace("{path}", &path))
        .collect()
}

fn print_registry(registry: &TargetRegistry) {
    println!("targets ({}):", registry.len());
    for target in registry.list() {
        println!("  - {}  {}", target.label(), target.path().display());
    }
}

/// Simple dry-run output: print each target and the command it would run.
fn print_dry_run(
    registry: &TargetRegistry,
    only: Option<&str>,
    executable: &str,
    raw_args: &[String],
) -> Result<()> {
    let targets: Vec<&Target> = match only {
        Some(name) => vec![registry
            .get(name)
            .ok_or_else(|| errors::WsrunError::TargetNotFound(name.to_string()))?],
        None => registry.list().iter().collect(),
    };

    println!("wsrun dry-run");
    for target in targets {
        let args = expand_args(raw_args, target);
        println!("  - {}", target.label());
        println!("      cwd: {}", target.path().display());
        println!("      cmd: {} {}", executable, args.join(" "));
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}
