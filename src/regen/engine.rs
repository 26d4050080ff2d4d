//! Core regeneration engine
//!
//! Runs one full regeneration pass: resets the output directory, then pipes
//! every discovered input file through the external program, one subprocess
//! at a time, capturing stdout into the matching fixture file.

use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::discovery::find_input_files;
use crate::error::{RegenError, RegenResult};
use crate::regen::config::RegenConfig;
use crate::regen::report::{FileOutcome, OutcomeStatus, RegenReport};

/// Main regeneration engine
#[derive(Debug)]
pub struct RegenEngine {
    config: RegenConfig,
}

impl RegenEngine {
    /// Create a new engine. Fails if the configuration is inconsistent.
    pub fn new(config: RegenConfig) -> RegenResult<Self> {
        config.validate().map_err(RegenError::configuration)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RegenConfig {
        &self.config
    }

    /// Run a full regeneration pass.
    pub fn run(&self) -> RegenResult<RegenReport> {
        self.run_with(|_| {})
    }

    /// Run a full regeneration pass, invoking `observe` after each file.
    ///
    /// Inputs are discovered before the output directory is reset, so a
    /// discovery error leaves existing fixtures untouched. A file whose
    /// program invocation exits non-zero is recorded and the batch
    /// continues, unless `fail_fast` is set.
    pub fn run_with<F>(&self, mut observe: F) -> RegenResult<RegenReport>
    where
        F: FnMut(&FileOutcome),
    {
        let started = Instant::now();
        let inputs = find_input_files(&self.config)?;

        let output_dir = self.config.output_dir();
        reset_output_dir(&output_dir)?;

        let mut report = RegenReport::new(
            self.config.source_dir.clone(),
            output_dir.clone(),
            self.config.program.clone(),
        );

        for input in inputs {
            let outcome = self.regenerate_one(&input, &output_dir)?;
            observe(&outcome);

            if self.config.fail_fast {
                if let OutcomeStatus::Failed { code, .. } = &outcome.status {
                    return Err(RegenError::FileFailed {
                        input: outcome.input_name(),
                        code: *code,
                    });
                }
            }

            report.record(outcome);
        }

        report.set_elapsed(started.elapsed());
        Ok(report)
    }

    /// Pipe one input file through the program and capture its stdout into
    /// the fixture file. The subprocess runs to completion before returning.
    ///
    /// The source directory structure is mirrored under the output
    /// directory, so same-named inputs in different subdirectories map to
    /// distinct fixtures under recursive discovery.
    fn regenerate_one(&self, input: &Path, output_dir: &Path) -> RegenResult<FileOutcome> {
        let input_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());

        let relative_dir = input
            .strip_prefix(&self.config.source_dir)
            .ok()
            .and_then(|rel| rel.parent())
            .unwrap_or_else(|| Path::new(""));
        let parent = output_dir.join(relative_dir);
        if !relative_dir.as_os_str().is_empty() {
            fs::create_dir_all(&parent).map_err(|e| {
                RegenError::io("Failed to create fixture directory", Some(parent.clone()), e)
            })?;
        }
        let output = parent.join(self.config.output_file_name(&input_name));

        let stdin = File::open(input)
            .map_err(|e| RegenError::io("Failed to open input file", Some(input.to_path_buf()), e))?;
        let stdout = File::create(&output)
            .map_err(|e| RegenError::io("Failed to create fixture file", Some(output.clone()), e))?;

        let child = Command::new(&self.config.program)
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RegenError::spawn(self.config.program.clone(), e))?;

        let result = child.wait_with_output().map_err(|e| {
            RegenError::io("Failed to wait for program", Some(input.to_path_buf()), e)
        })?;

        let status = if result.status.success() {
            OutcomeStatus::Ok
        } else {
            OutcomeStatus::Failed {
                code: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            }
        };

        Ok(FileOutcome {
            input: input.to_path_buf(),
            output,
            status,
        })
    }
}

/// Forcibly remove the output directory, tolerating prior non-existence,
/// then recreate it empty. This is what guarantees the clean-slate
/// invariant: after a run the directory holds exactly the current fixtures.
fn reset_output_dir(output_dir: &Path) -> RegenResult<()> {
    match fs::remove_dir_all(output_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(RegenError::io(
                "Failed to remove output directory",
                Some(output_dir.to_path_buf()),
                e,
            ))
        }
    }
    fs::create_dir_all(output_dir).map_err(|e| {
        RegenError::io(
            "Failed to create output directory",
            Some(output_dir.to_path_buf()),
            e,
        )
    })
}

/// Regenerate fixtures with the given configuration
pub fn regenerate_fixtures(config: RegenConfig) -> RegenResult<RegenReport> {
    RegenEngine::new(config)?.run()
}
