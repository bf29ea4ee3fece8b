// src/targets/mod.rs

//! Deployable targets: the workspace root plus its sub-packages.

pub mod registry;

pub use registry::{BUILTIN_PACKAGES, Target, TargetRegistry};
