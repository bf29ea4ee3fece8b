// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running commands, one at a time,
//! and turning the way each one ended into a [`CompletionRecord`].
//!
//! - [`command`] holds the caller-facing [`CommandSpec`] and [`ExecOptions`].
//! - [`backend`] provides the [`ProcessSpawner`] trait and the production
//!   [`TokioSpawner`]; tests replace it with a scripted implementation.
//! - [`completion`] normalizes raw exits into [`CompletionRecord`]s.
//! - [`runner`] owns [`CommandRunner`], which announces and awaits commands.

pub mod backend;
pub mod command;
pub mod completion;
pub mod runner;

pub use backend::{ProcessExit, ProcessSpawner, SpawnRequest, TokioSpawner};
pub use command::{CommandSpec, ExecOptions};
pub use completion::{CompletionRecord, LaunchError};
pub use runner::CommandRunner;
