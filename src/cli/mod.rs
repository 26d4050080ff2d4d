//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{RegenError, RegenResult};
use crate::regen::RegenConfig;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "fixgen")]
#[command(about = "Regenerate expected-output test fixtures by piping inputs through a program")]
#[command(version)]
pub struct Args {
    /// Source directory holding the input files
    #[arg(default_value = "./examples")]
    pub source_dir: PathBuf,

    /// External executable each input is piped through
    #[arg(short, long, default_value = "./a.out")]
    pub program: PathBuf,

    /// Name of the output subdirectory, recreated under the source directory
    #[arg(long, default_value = "tests")]
    pub output_dir_name: String,

    /// Suffix marking a file as an input
    #[arg(long, default_value = ".rr")]
    pub input_suffix: String,

    /// Suffix appended to the stripped input name
    #[arg(long, default_value = "_out.txt")]
    pub output_suffix: String,

    /// Recursively discover inputs in subdirectories
    #[arg(long)]
    pub recursive: bool,

    /// Abort on the first failed file instead of reporting and continuing
    #[arg(long)]
    pub fail_fast: bool,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    /// Build the regeneration configuration from CLI arguments
    pub fn to_config(&self) -> RegenResult<RegenConfig> {
        let config = RegenConfig::default()
            .with_source_dir(&self.source_dir)
            .with_program(&self.program)
            .with_output_dir_name(&self.output_dir_name)
            .with_input_suffix(&self.input_suffix)
            .with_output_suffix(&self.output_suffix)
            .with_recursive(self.recursive)
            .with_fail_fast(self.fail_fast);

        config.validate().map_err(RegenError::configuration)?;

        Ok(config)
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for the per-file loop
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Check whether interactive progress output makes sense
    pub fn is_interactive() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &RegenError) {
    CliUtils::show_error(&error.user_message());

    match error {
        RegenError::SourceDirMissing { .. } => {
            eprintln!("\nTip: pass the directory holding your input files as the first argument");
        }
        RegenError::Spawn { .. } => {
            eprintln!("\nTip: use --program to point at the executable to pipe inputs through");
        }
        _ => {}
    }

    eprintln!("\nTry 'fixgen --help' for usage information.");
}
