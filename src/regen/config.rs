//! Configuration options for fixture regeneration

use std::path::{Component, Path, PathBuf};

/// Regeneration configuration options
///
/// The defaults reproduce the layout this tool was originally built around:
/// inputs under `./examples`, fixtures regenerated into `./examples/tests`,
/// `case1.rr` producing `case1_out.txt` via `./a.out`.
#[derive(Debug, Clone)]
pub struct RegenConfig {
    /// Directory holding the input files
    pub source_dir: PathBuf,
    /// Name of the output subdirectory nested under `source_dir`
    pub output_dir_name: String,
    /// Suffix marking a file as an input (e.g. `.rr`)
    pub input_suffix: String,
    /// Suffix appended to the stripped input name (e.g. `_out.txt`)
    pub output_suffix: String,
    /// External executable invoked once per input file
    pub program: PathBuf,
    /// Descend into subdirectories when discovering inputs
    pub recursive: bool,
    /// Abort the batch on the first failed file
    pub fail_fast: bool,
}

impl Default for RegenConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./examples"),
            output_dir_name: "tests".to_string(),
            input_suffix: ".rr".to_string(),
            output_suffix: "_out.txt".to_string(),
            program: PathBuf::from("./a.out"),
            recursive: false,
            fail_fast: false,
        }
    }
}

impl RegenConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source directory
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Set the output subdirectory name
    pub fn with_output_dir_name(mut self, name: impl Into<String>) -> Self {
        self.output_dir_name = name.into();
        self
    }

    /// Set the input suffix marker
    pub fn with_input_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.input_suffix = suffix.into();
        self
    }

    /// Set the output suffix
    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }

    /// Set the external executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Enable recursive input discovery
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Abort on the first failed file instead of reporting and continuing
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.input_suffix.is_empty() {
            return Err("Input suffix must not be empty".to_string());
        }

        if self.output_suffix.is_empty() {
            return Err("Output suffix must not be empty".to_string());
        }

        // The output directory is nested directly under the source directory,
        // so its name must be a single plain path component.
        let mut components = Path::new(&self.output_dir_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => {
                return Err(format!(
                    "Output directory name must be a single path component, got '{}'",
                    self.output_dir_name
                ))
            }
        }

        Ok(())
    }

    /// The output directory, nested under the source directory and
    /// destroyed and recreated on every run
    pub fn output_dir(&self) -> PathBuf {
        self.source_dir.join(&self.output_dir_name)
    }

    /// Map an input file name to its fixture file name: the portion before
    /// the first occurrence of the input suffix, with the output suffix
    /// appended. `case1.rr` becomes `case1_out.txt`.
    pub fn output_file_name(&self, input_name: &str) -> String {
        let stem = input_name
            .split(&self.input_suffix)
            .next()
            .unwrap_or(input_name);
        format!("{}{}", stem, self.output_suffix)
    }

    /// Full path of the fixture regenerated for `input_name`
    pub fn output_path(&self, input_name: &str) -> PathBuf {
        self.output_dir().join(self.output_file_name(input_name))
    }
}
