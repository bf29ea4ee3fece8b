use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use wsrun::exec::{ProcessExit, ProcessSpawner, SpawnRequest};

use crate::recording_sink::Journal;

/// What a scripted invocation should report.
#[derive(Debug, Clone)]
pub enum Scripted {
    Exit(ProcessExit),
    LaunchFail(std::io::ErrorKind),
}

impl Scripted {
    pub fn ok() -> Self {
        Scripted::Exit(ProcessExit::code(0))
    }

    pub fn code(code: i32) -> Self {
        Scripted::Exit(ProcessExit::code(code))
    }

    pub fn signal(signal: &str) -> Self {
        Scripted::Exit(ProcessExit::signal(signal))
    }

    pub fn code_and_signal(code: i32, signal: &str) -> Self {
        Scripted::Exit(ProcessExit {
            code: Some(code),
            signal: Some(signal.to_string()),
            stdout: Vec::new(),
        })
    }

    pub fn stdout(text: &str) -> Self {
        Scripted::Exit(ProcessExit {
            code: Some(0),
            signal: None,
            stdout: text.as_bytes().to_vec(),
        })
    }

    pub fn not_found() -> Self {
        Scripted::LaunchFail(std::io::ErrorKind::NotFound)
    }
}

/// A fake spawner that:
/// - records every request it receives
/// - answers from a per-working-directory script (default: exit 0)
/// - optionally sleeps per invocation and tracks how many were in flight
pub struct ScriptedSpawner {
    default: Scripted,
    by_dir: HashMap<PathBuf, Scripted>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<SpawnRequest>>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    journal: Option<Journal>,
}

impl ScriptedSpawner {
    pub fn new() -> Self {
        Self {
            default: Scripted::ok(),
            by_dir: HashMap::new(),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            journal: None,
        }
    }

    pub fn with_default(mut self, outcome: Scripted) -> Self {
        self.default = outcome;
        self
    }

    /// Script the outcome for invocations whose working directory is `dir`.
    pub fn on_dir(mut self, dir: impl AsRef<Path>, outcome: Scripted) -> Self {
        self.by_dir.insert(dir.as_ref().to_path_buf(), outcome);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Also log `spawn <cwd>` / `exit <cwd>` entries into `journal`.
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn calls(&self) -> Vec<SpawnRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSpawner for ScriptedSpawner {
    fn spawn<'a>(
        &'a self,
        request: &'a SpawnRequest,
    ) -> Pin<Box<dyn Future<Output = std::io::Result<ProcessExit>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(request.clone());

            let outcome = self
                .by_dir
                .get(&request.cwd)
                .cloned()
                .unwrap_or_else(|| self.default.clone());

            if let Scripted::LaunchFail(kind) = outcome {
                return Err(std::io::Error::new(
                    kind,
                    format!("scripted launch failure for {}", request.executable),
                ));
            }

            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if let Some(journal) = &self.journal {
                journal.push(format!("spawn {}", request.cwd.display()));
            }

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            if let Some(journal) = &self.journal {
                journal.push(format!("exit {}", request.cwd.display()));
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            match outcome {
                Scripted::Exit(exit) => Ok(exit),
                Scripted::LaunchFail(_) => unreachable!("handled above"),
            }
        })
    }
}
