//! Fixture Regenerator
//!
//! A Rust CLI tool for regenerating expected-output test fixtures: every
//! input file in a source directory is piped through an external program,
//! and the program's stdout is captured into a matching fixture file inside
//! a freshly-recreated output subdirectory.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod cli;
pub mod discovery;
pub mod error;
pub mod regen;

// Re-export commonly used types
pub use error::{RegenError, RegenResult};
pub use regen::{
    regenerate_fixtures, FileOutcome, OutcomeStatus, RegenConfig, RegenEngine, RegenReport,
};

/// Regenerate fixtures for a source directory using the default layout
/// (`tests` output subdirectory, `.rr` inputs, `_out.txt` fixtures)
pub fn regenerate(
    source_dir: impl Into<std::path::PathBuf>,
    program: impl Into<std::path::PathBuf>,
) -> RegenResult<RegenReport> {
    let config = RegenConfig::default()
        .with_source_dir(source_dir)
        .with_program(program);
    regenerate_fixtures(config)
}
