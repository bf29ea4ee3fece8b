// src/report/reporter.rs

use std::sync::Arc;

use crate::exec::CompletionRecord;

use super::format::{finish_line, start_line};
use super::sink::LogSink;

/// Narrates an action against a target: one line when it starts, one when
/// it finishes.
#[derive(Clone)]
pub struct ActionReporter {
    sink: Arc<dyn LogSink>,
}

impl ActionReporter {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Emit `<action> for <target> started`. `None` or `""` means the root.
    pub fn report_start(&self, action: &str, target: Option<&str>) {
        self.sink.emit(&start_line(action, target));
    }

    /// Emit the finish line for `record` and return the outcome summary.
    pub fn report_finish(
        &self,
        action: &str,
        target: Option<&str>,
        record: &CompletionRecord,
    ) -> bool {
        self.sink.emit(&finish_line(action, target, record));
        record.succeeded()
    }
}

impl std::fmt::Debug for ActionReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionReporter").finish_non_exhaustive()
    }
}
