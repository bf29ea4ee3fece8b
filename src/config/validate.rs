// src/config/validate.rs

use std::collections::HashSet;
use std::path::Path;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, WsrunError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::WsrunError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.workspace, raw.defaults, raw.targets))
    }
}

/// Check the structural invariants of a raw config.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_targets(cfg)?;
    validate_root_target(cfg)?;
    validate_unique_names(cfg)?;
    validate_paths(cfg)?;
    Ok(())
}

fn ensure_has_targets(cfg: &RawConfigFile) -> Result<()> {
    if cfg.targets.is_empty() {
        return Err(WsrunError::ConfigError(
            "config must contain at least one [[target]] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_root_target(cfg: &RawConfigFile) -> Result<()> {
    let first = &cfg.targets[0];
    if !first.name.is_empty() {
        return Err(WsrunError::ConfigError(format!(
            "first [[target]] must be the workspace root (name = \"\"), got '{}'",
            first.name
        )));
    }

    let root_path = first.relative_path();
    if !(root_path.is_empty() || root_path == ".") {
        return Err(WsrunError::ConfigError(format!(
            "root target path must be empty or \".\" (got '{}')",
            root_path
        )));
    }

    Ok(())
}

fn validate_unique_names(cfg: &RawConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for (idx, target) in cfg.targets.iter().enumerate() {
        if idx > 0 && target.name.is_empty() {
            return Err(WsrunError::ConfigError(format!(
                "[[target]] #{} has an empty name; only the first target may be the root",
                idx + 1
            )));
        }
        if target.name == "root" {
            return Err(WsrunError::ConfigError(
                "target name 'root' is reserved for the workspace root".to_string(),
            ));
        }
        if !seen.insert(target.name.as_str()) {
            return Err(WsrunError::ConfigError(format!(
                "duplicate target name '{}'",
                target.name
            )));
        }
    }
    Ok(())
}

fn validate_paths(cfg: &RawConfigFile) -> Result<()> {
    for target in cfg.targets.iter() {
        if Path::new(target.relative_path()).is_absolute() {
            return Err(WsrunError::ConfigError(format!(
                "target '{}' has absolute path '{}'; paths must be relative to the workspace root",
                target.name,
                target.relative_path()
            )));
        }
    }
    Ok(())
}
