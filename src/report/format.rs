// src/report/format.rs

//! Pure formatting of report lines.
//!
//! Every function here maps (action, target, outcome) to plain text plus a
//! [`Tone`]. No terminal styling happens here; sinks decide how a tone looks.

use std::fmt;

use crate::exec::CompletionRecord;

/// Semantic category of a report line, used by sinks for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// `[ run cmd ]` announce line.
    Command,
    /// `<action> for <target> started`.
    Started,
    /// Completed with code 0 and no signal.
    Succeeded,
    /// Completed with a non-zero code and/or a signal.
    Failed,
    /// The process could not be launched.
    Errored,
}

/// A single line handed to a [`LogSink`](super::LogSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub tone: Tone,
    pub text: String,
}

impl ReportLine {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Name shown for a target: `root` for `None` or the empty name.
pub fn target_label(target: Option<&str>) -> &str {
    match target {
        Some(name) if !name.is_empty() => name,
        _ => "root",
    }
}

/// `[ run cmd ]  <executable> <args...>`
pub fn announce_line(command_line: &str) -> ReportLine {
    ReportLine::new(Tone::Command, format!("[ run cmd ]  {command_line}"))
}

/// `<action> for <target> started`
pub fn start_line(action: &str, target: Option<&str>) -> ReportLine {
    ReportLine::new(
        Tone::Started,
        format!("{action} for {} started", target_label(target)),
    )
}

/// Parenthesized explanation of abnormal termination.
///
/// Only a positive code counts as abnormal here; when both a code and a
/// signal are present the code is listed first.
pub fn qualifier(code: Option<i32>, signal: Option<&str>) -> Option<String> {
    match (code.filter(|c| *c > 0), signal) {
        (Some(code), Some(signal)) => Some(format!("(code: {code}, signal: {signal})")),
        (Some(code), None) => Some(format!("(code: {code})")),
        (None, Some(signal)) => Some(format!("(signal: {signal})")),
        (None, None) => None,
    }
}

/// Finish line for a settled invocation.
pub fn finish_line(action: &str, target: Option<&str>, record: &CompletionRecord) -> ReportLine {
    let label = target_label(target);

    if let CompletionRecord::LaunchError(err) = record {
        return ReportLine::new(
            Tone::Errored,
            format!("{action} for {label} errored\n{err:#?}"),
        );
    }

    let tone = if record.succeeded() {
        Tone::Succeeded
    } else {
        Tone::Failed
    };

    let text = match qualifier(record.code(), record.signal()) {
        Some(extra) => format!("{action} for {label} completed {extra}"),
        None => format!("{action} for {label} completed"),
    };

    ReportLine::new(tone, text)
}
