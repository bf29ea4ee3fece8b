// src/targets/registry.rs

//! The fixed, ordered list of targets an action runs against.

use std::path::{Path, PathBuf};

use crate::config::{ConfigFile, TargetDescriptor};

/// Workspace packages known to the built-in registry, relative to the root.
///
/// The empty entry is the root itself and must stay first.
pub const BUILTIN_PACKAGES: &[&str] = &[
    "",
    "dev-portal",
    "lambdas/backend",
    "lambdas/catalog-updater",
    "lambdas/cloudfront-security",
    "lambdas/listener",
    "lambdas/static-asset-uploader",
    "lambdas/user-group-importer",
];

/// A named, path-resolved unit that actions run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    name: String,
    path: PathBuf,
}

impl Target {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Raw name; empty for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved working directory of this target.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Name as shown in report lines: `root` for the root target.
    pub fn label(&self) -> &str {
        if self.is_root() { "root" } else { &self.name }
    }
}

/// Ordered, immutable target list. The root target is always first.
#[derive(Debug, Clone)]
pub struct TargetRegistry {
    root_dir: PathBuf,
    targets: Vec<Target>,
}

impl TargetRegistry {
    /// Registry of [`BUILTIN_PACKAGES`] resolved against `root_dir`.
    pub fn builtin(root_dir: impl Into<PathBuf>) -> Self {
        let root_dir = root_dir.into();
        let targets = BUILTIN_PACKAGES
            .iter()
            .map(|rel| Target::new(*rel, resolve_under(&root_dir, rel)))
            .collect();
        Self { root_dir, targets }
    }

    /// Registry built from a validated config file.
    ///
    /// `base_dir` is the directory the config was loaded from; a relative
    /// `[workspace].root` is resolved against it.
    pub fn from_config(cfg: &ConfigFile, base_dir: &Path) -> Self {
        let root_dir = match cfg.workspace.root.as_deref() {
            Some(root) => base_dir.join(root),
            None => base_dir.to_path_buf(),
        };
        Self::from_descriptors(root_dir, cfg.targets())
    }

    fn from_descriptors(root_dir: PathBuf, descriptors: &[TargetDescriptor]) -> Self {
        let targets = descriptors
            .iter()
            .map(|d| Target::new(d.name.clone(), resolve_under(&root_dir, d.relative_path())))
            .collect();
        Self { root_dir, targets }
    }

    /// All targets in iteration order.
    pub fn list(&self) -> &[Target] {
        &self.targets
    }

    /// The workspace root target.
    pub fn root(&self) -> &Target {
        &self.targets[0]
    }

    /// Look a target up by name. `root` and `""` both select the root.
    pub fn get(&self, name: &str) -> Option<&Target> {
        if name.is_empty() || name == "root" {
            return Some(self.root());
        }
        self.targets.iter().find(|t| t.name == name)
    }

    /// Directory every target path is resolved against.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Join a workspace-relative path onto the root directory.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        resolve_under(&self.root_dir, relative)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

fn resolve_under(root: &Path, relative: impl AsRef<Path>) -> PathBuf {
    let relative = relative.as_ref();
    if relative.as_os_str().is_empty() || relative == Path::new(".") {
        root.to_path_buf()
    } else {
        root.join(relative)
    }
}
