// src/report/sink.rs

//! Destinations for report lines.

use console::Style;
use tracing::{error, info, warn};

use super::format::{ReportLine, Tone};

/// Line sink capability: side effect only.
pub trait LogSink: Send + Sync {
    fn emit(&self, line: &ReportLine);
}

/// Writes report lines to stderr, optionally coloured.
///
/// Stderr keeps stdout free for the output of the commands being run.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSink {
    colored: bool,
}

impl TerminalSink {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Colour when stderr supports it (honours `CLICOLOR` and `CLICOLOR_FORCE`).
    pub fn auto() -> Self {
        Self::new(console::colors_enabled_stderr())
    }

    fn style_for(&self, tone: Tone) -> Style {
        let style = Style::new().force_styling(self.colored);
        match tone {
            Tone::Command => style.blue(),
            Tone::Started | Tone::Succeeded => style.green(),
            Tone::Failed => style.yellow(),
            Tone::Errored => style.red(),
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::auto()
    }
}

impl LogSink for TerminalSink {
    fn emit(&self, line: &ReportLine) {
        eprintln!("{}", self.style_for(line.tone).apply_to(&line.text));
    }
}

/// Forwards report lines to `tracing`, at a level chosen by tone.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, line: &ReportLine) {
        match line.tone {
            Tone::Command | Tone::Started | Tone::Succeeded => info!("{}", line.text),
            Tone::Failed => warn!("{}", line.text),
            Tone::Errored => error!("{}", line.text),
        }
    }
}
