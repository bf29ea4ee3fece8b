#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use wsrun::config::{
    ConfigFile, DefaultsSection, RawConfigFile, TargetDescriptor, WorkspaceSection,
};
use wsrun::engine::Orchestrator;
use wsrun::exec::{CommandRunner, ProcessSpawner};
use wsrun::report::ActionReporter;
use wsrun::targets::TargetRegistry;
use wsrun::types::StdioMode;

use crate::recording_sink::RecordingSink;

/// Builder for `RawConfigFile` / `ConfigFile` to simplify test setup.
///
/// Starts with the root target already present.
pub struct ConfigBuilder {
    config: RawConfigFile,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                workspace: WorkspaceSection::default(),
                defaults: DefaultsSection::default(),
                targets: vec![TargetDescriptor::new("", "")],
            },
        }
    }

    /// Start from an empty target list (no root).
    pub fn empty() -> Self {
        let mut b = Self::new();
        b.config.targets.clear();
        b
    }

    pub fn with_target(mut self, name: &str, path: &str) -> Self {
        self.config.targets.push(TargetDescriptor::new(name, path));
        self
    }

    /// Add a target whose path defaults to its name.
    pub fn with_package(mut self, name: &str) -> Self {
        self.config.targets.push(TargetDescriptor {
            name: name.to_string(),
            path: None,
        });
        self
    }

    pub fn with_root(mut self, root: &str) -> Self {
        self.config.workspace.root = Some(PathBuf::from(root));
        self
    }

    pub fn with_default_stdout(mut self, mode: StdioMode) -> Self {
        self.config.defaults.stdout = Some(mode);
        self
    }

    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with the root plus `packages` (path = name), rooted at `root_dir`.
pub fn registry_with(root_dir: &Path, packages: &[&str]) -> TargetRegistry {
    let cfg = packages
        .iter()
        .fold(ConfigBuilder::new(), |b, name| b.with_package(name))
        .build();
    TargetRegistry::from_config(&cfg, root_dir)
}

/// Orchestrator over `registry` whose lines land in the returned sink.
pub fn orchestrator_with(
    registry: TargetRegistry,
    spawner: Arc<dyn ProcessSpawner>,
    sink: RecordingSink,
) -> Orchestrator {
    let sink = Arc::new(sink);
    let runner = CommandRunner::new(spawner, sink.clone());
    Orchestrator::new(registry, runner, ActionReporter::new(sink))
}
