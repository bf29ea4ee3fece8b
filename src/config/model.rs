// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::exec::ExecOptions;
use crate::types::StdioMode;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [workspace]
/// root = "."
///
/// [defaults]
/// stdout = "inherit"
///
/// [[target]]
/// name = ""
///
/// [[target]]
/// name = "dev-portal"
/// path = "dev-portal"
/// ```
///
/// All sections except `[[target]]` are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Workspace location from `[workspace]`.
    #[serde(default)]
    pub workspace: WorkspaceSection,

    /// Default process options from `[defaults]`.
    #[serde(default)]
    pub defaults: DefaultsSection,

    /// Targets from `[[target]]`, in file order.
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetDescriptor>,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`), so
/// holding one means the target list is well-formed.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub workspace: WorkspaceSection,
    pub defaults: DefaultsSection,
    targets: Vec<TargetDescriptor>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        workspace: WorkspaceSection,
        defaults: DefaultsSection,
        targets: Vec<TargetDescriptor>,
    ) -> Self {
        Self {
            workspace,
            defaults,
            targets,
        }
    }

    /// Target descriptors in registry order (root first).
    pub fn targets(&self) -> &[TargetDescriptor] {
        &self.targets
    }
}

/// `[workspace]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WorkspaceSection {
    /// Workspace root, relative to the config file's directory.
    ///
    /// If `None`, the config file's directory is the root.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// `[defaults]` section: stdio routing applied when the caller leaves a
/// stream unset.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultsSection {
    #[serde(default)]
    pub stdin: Option<StdioMode>,
    #[serde(default)]
    pub stdout: Option<StdioMode>,
    #[serde(default)]
    pub stderr: Option<StdioMode>,
}

impl DefaultsSection {
    /// Runner defaults derived from this section.
    pub fn exec_options(&self) -> ExecOptions {
        ExecOptions {
            cwd: None,
            stdin: self.stdin,
            stdout: self.stdout,
            stderr: self.stderr,
        }
    }
}

/// One `[[target]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetDescriptor {
    /// Target name; the empty string is the workspace root.
    #[serde(default)]
    pub name: String,

    /// Path relative to the workspace root. Defaults to `name`.
    #[serde(default)]
    pub path: Option<String>,
}

impl TargetDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
        }
    }

    /// Relative path of this target, falling back to its name.
    pub fn relative_path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.name)
    }
}
