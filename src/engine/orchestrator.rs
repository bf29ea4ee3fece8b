// src/engine/orchestrator.rs

use tracing::{debug, info};

use crate::errors::{Result, WsrunError};
use crate::exec::{CommandRunner, CommandSpec, ExecOptions};
use crate::report::ActionReporter;
use crate::targets::{Target, TargetRegistry};

/// Runs an action over the registry, one target at a time.
///
/// Each target is bracketed by a start and a finish report, and a target's
/// process has fully settled before the next one is launched. A failing
/// target never stops the iteration; it only turns the aggregate false.
#[derive(Debug)]
pub struct Orchestrator {
    registry: TargetRegistry,
    runner: CommandRunner,
    reporter: ActionReporter,
}

impl Orchestrator {
    pub fn new(registry: TargetRegistry, runner: CommandRunner, reporter: ActionReporter) -> Self {
        Self {
            registry,
            runner,
            reporter,
        }
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    pub fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    /// Run `executable` for every target in registry order (root first).
    ///
    /// `build_args` produces the argument list for each target. Returns true
    /// only if every target succeeded.
    pub async fn run_for_all<F>(
        &self,
        action: &str,
        executable: &str,
        build_args: F,
        options: &ExecOptions,
    ) -> bool
    where
        F: Fn(&Target) -> Vec<String>,
    {
        let total = self.registry.len();
        let mut failed = Vec::new();

        for target in self.registry.list() {
            let args = build_args(target);
            if !self
                .run_for_one(action, target, executable, &args, options)
                .await
            {
                failed.push(target.label().to_string());
            }
        }

        info!(
            action,
            total,
            succeeded = total - failed.len(),
            ?failed,
            "action finished for all targets"
        );

        failed.is_empty()
    }

    /// Run `executable` for a single target and return its outcome.
    pub async fn run_for_one(
        &self,
        action: &str,
        target: &Target,
        executable: &str,
        args: &[String],
        options: &ExecOptions,
    ) -> bool {
        let spec = CommandSpec::new(executable)
            .args(args.iter().cloned())
            .options(options.clone());

        debug!(action, target = target.label(), cwd = %target.path().display(), "running target");

        self.reporter.report_start(action, Some(target.name()));
        let record = self.runner.invoke(&spec, target.path()).await;
        self.reporter.report_finish(action, Some(target.name()), &record)
    }

    /// Run `executable` for the target called `name` ("root" or "" for the
    /// workspace root), with arguments from `build_args`.
    pub async fn run_for_named<F>(
        &self,
        action: &str,
        name: &str,
        executable: &str,
        build_args: F,
        options: &ExecOptions,
    ) -> Result<bool>
    where
        F: Fn(&Target) -> Vec<String>,
    {
        let target = self
            .registry
            .get(name)
            .ok_or_else(|| WsrunError::TargetNotFound(name.to_string()))?;
        let args = build_args(target);
        Ok(self
            .run_for_one(action, target, executable, &args, options)
            .await)
    }
}
