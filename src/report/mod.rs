// src/report/mod.rs

//! Operator-facing narration of actions.
//!
//! - [`format`] turns (action, target, outcome) into plain [`ReportLine`]s.
//! - [`sink`] defines the [`LogSink`] capability and its terminal/tracing
//!   implementations.
//! - [`reporter`] provides [`ActionReporter`], which emits start and finish
//!   lines and computes the per-target outcome.

pub mod format;
pub mod reporter;
pub mod sink;

pub use format::{ReportLine, Tone};
pub use reporter::ActionReporter;
pub use sink::{LogSink, TerminalSink, TracingSink};
