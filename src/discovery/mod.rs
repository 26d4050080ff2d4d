//! Input file discovery
//!
//! Enumerates the source directory and selects the files that count as test
//! inputs: regular files whose name carries the input suffix. The output
//! subdirectory is always excluded so regenerated fixtures are never mistaken
//! for inputs on a later run.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{RegenError, RegenResult};
use crate::regen::RegenConfig;

/// Check whether a path names an input file for the given suffix.
/// Only the file name is inspected, never the contents.
pub fn is_input_file(path: &Path, input_suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.ends_with(input_suffix))
}

/// Find input files under the configured source directory.
///
/// Shallow by default; descends into subdirectories when `config.recursive`
/// is set, skipping the output subdirectory in either mode. Results are
/// sorted for a deterministic processing order.
pub fn find_input_files(config: &RegenConfig) -> RegenResult<Vec<PathBuf>> {
    let source_dir = &config.source_dir;
    if !source_dir.is_dir() {
        return Err(RegenError::SourceDirMissing {
            path: source_dir.clone(),
        });
    }

    let output_dir = config.output_dir();
    let mut inputs = Vec::new();

    if config.recursive {
        let walker = WalkDir::new(source_dir)
            .into_iter()
            .filter_entry(|entry| entry.path() != output_dir);
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf);
                RegenError::io("Failed to walk source directory", path, e.into())
            })?;
            if entry.file_type().is_file() && is_input_file(entry.path(), &config.input_suffix) {
                inputs.push(entry.path().to_path_buf());
            }
        }
    } else {
        let entries = fs::read_dir(source_dir).map_err(|e| {
            RegenError::io(
                "Failed to read source directory",
                Some(source_dir.clone()),
                e,
            )
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| {
                RegenError::io(
                    "Failed to read source directory entry",
                    Some(source_dir.clone()),
                    e,
                )
            })?;
            let file_type = entry.file_type().map_err(|e| {
                RegenError::io("Failed to stat source entry", Some(entry.path()), e)
            })?;
            if file_type.is_file() && is_input_file(&entry.path(), &config.input_suffix) {
                inputs.push(entry.path());
            }
        }
    }

    inputs.sort();
    Ok(inputs)
}
