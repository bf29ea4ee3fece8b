use std::sync::{Arc, Mutex};

use wsrun::report::{LogSink, ReportLine, Tone};

/// Shared, ordered log of events from several fakes.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Index of the first entry equal to `entry`.
    pub fn position(&self, entry: &str) -> Option<usize> {
        self.0.lock().unwrap().iter().position(|e| e == entry)
    }
}

/// A sink that keeps every emitted line in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<ReportLine>>>,
    journal: Option<Journal>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also append each line's text to `journal`.
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        self.lines.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.text).collect()
    }

    /// Lines of the given tone, in emission order.
    pub fn texts_with(&self, tone: Tone) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|l| l.tone == tone)
            .map(|l| l.text)
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn emit(&self, line: &ReportLine) {
        if let Some(journal) = &self.journal {
            journal.push(line.text.clone());
        }
        self.lines.lock().unwrap().push(line.clone());
    }
}
