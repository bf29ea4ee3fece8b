#![allow(dead_code)]

pub use wsrun_test_utils::builders;
pub use wsrun_test_utils::fake_spawner::{Scripted, ScriptedSpawner};
pub use wsrun_test_utils::recording_sink::{Journal, RecordingSink};
pub use wsrun_test_utils::{init_tracing, with_timeout};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
