//! Per-file outcomes and run reporting for regeneration passes

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Result of running the external program over a single input file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The program exited with status zero
    Ok,
    /// The program exited non-zero (or was killed by a signal, in which
    /// case `code` is `None`)
    Failed {
        code: Option<i32>,
        stderr: String,
    },
}

impl OutcomeStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, OutcomeStatus::Ok)
    }
}

/// One regenerated fixture: which input produced it, where it was written,
/// and how the subprocess exited
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Input file fed to the program's stdin
    pub input: PathBuf,
    /// Fixture file the program's stdout was captured into
    pub output: PathBuf,
    pub status: OutcomeStatus,
}

impl FileOutcome {
    /// Short file-name-only label for progress output
    pub fn input_name(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

/// Summary of a full regeneration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegenReport {
    /// Source directory the inputs were read from
    pub source_dir: PathBuf,
    /// Output directory that was recreated for this run
    pub output_dir: PathBuf,
    /// Program every input was piped through
    pub program: PathBuf,
    /// Per-file outcomes, in processing order
    pub outcomes: Vec<FileOutcome>,
    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u64,
    /// Timestamp of when the run started
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl RegenReport {
    pub fn new(source_dir: PathBuf, output_dir: PathBuf, program: PathBuf) -> Self {
        Self {
            source_dir,
            output_dir,
            program,
            outcomes: Vec::new(),
            elapsed_ms: 0,
            started_at: chrono::Utc::now(),
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed_ms = elapsed.as_millis() as u64;
    }

    /// Total number of input files processed
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of files whose program invocation exited zero
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_ok()).count()
    }

    /// Number of files whose program invocation failed
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// True when every file regenerated cleanly
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    /// Outcomes for files that failed, for error listings
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.status.is_ok())
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "{} fixture(s) regenerated, {} failed, in {}ms",
            self.succeeded(),
            self.failed(),
            self.elapsed_ms
        )
    }
}
