// src/engine/mod.rs

//! Orchestration engine for wsrun.
//!
//! The [`Orchestrator`] walks the target registry strictly sequentially,
//! invoking the command runner for each target and folding the per-target
//! outcomes into one aggregate result.

pub mod orchestrator;

pub use orchestrator::Orchestrator;
