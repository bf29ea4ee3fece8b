// src/types.rs

use std::str::FromStr;
use serde::Deserialize;

/// How one of a child's standard streams is wired.
///
/// - `Inherit`: share the parent's stream, so output shows up live (default).
/// - `Null`: discard output / provide empty input.
/// - `Piped`: capture the stream; only stdout is ever read back, via
///   `CommandRunner::capture`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdioMode {
    Inherit,
    Null,
    Piped,
}

impl Default for StdioMode {
    fn default() -> Self {
        StdioMode::Inherit
    }
}

impl FromStr for StdioMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inherit" => Ok(StdioMode::Inherit),
            "null" => Ok(StdioMode::Null),
            "piped" | "pipe" => Ok(StdioMode::Piped),
            other => Err(format!(
                "invalid stdio mode: {other} (expected \"inherit\", \"null\" or \"piped\")"
            )),
        }
    }
}

impl From<StdioMode> for std::process::Stdio {
    fn from(mode: StdioMode) -> Self {
        match mode {
            StdioMode::Inherit => std::process::Stdio::inherit(),
            StdioMode::Null => std::process::Stdio::null(),
            StdioMode::Piped => std::process::Stdio::piped(),
        }
    }
}
