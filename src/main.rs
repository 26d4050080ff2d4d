// Allow dead code for features exported but not yet used by the CLI
#![allow(dead_code)]

use clap::Parser;
use std::fs;

use anyhow::{Context, Result};

mod cli;
mod discovery;
mod error;
mod regen;

use crate::cli::{Args, CliUtils};
use crate::regen::{OutcomeStatus, RegenEngine, RegenReport};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(2);
        }
    };

    if args.verbose {
        eprintln!(
            "Regenerating fixtures in {} with {}",
            config.output_dir().display(),
            config.program.display()
        );
    }

    let engine = match RegenEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(2);
        }
    };

    let report = match run_with_output(&engine, &args) {
        Ok(report) => report,
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(2);
        }
    };

    if let Some(report_path) = &args.report {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
        CliUtils::show_success(&format!("Report written to {}", report_path.display()), args.quiet);
    }

    if !args.quiet {
        println!("{}", report.summary());
    }

    if !report.is_clean() {
        for outcome in report.failures() {
            if let OutcomeStatus::Failed { code, stderr } = &outcome.status {
                CliUtils::show_error(&format!(
                    "{} exited with code {:?}",
                    outcome.input_name(),
                    code
                ));
                if !stderr.is_empty() {
                    eprintln!("{}", stderr.trim_end());
                }
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Drive the regeneration pass with per-file terminal feedback: a progress
/// bar when attached to a terminal with enough files to warrant one, ✓/✗
/// lines otherwise.
fn run_with_output(engine: &RegenEngine, args: &Args) -> crate::error::RegenResult<RegenReport> {
    let input_count = discovery::find_input_files(engine.config())?.len();

    let progress = if !args.quiet && CliUtils::is_interactive() && input_count >= 10 {
        Some(CliUtils::create_progress_bar(input_count as u64))
    } else {
        None
    };

    let report = engine.run_with(|outcome| {
        if let Some(pb) = &progress {
            pb.set_message(outcome.input_name());
            pb.inc(1);
        } else if !args.quiet {
            match &outcome.status {
                OutcomeStatus::Ok => {
                    println!("✓ {} -> {}", outcome.input_name(), outcome.output.display())
                }
                OutcomeStatus::Failed { code, .. } => {
                    eprintln!("✗ {} (exit code {:?})", outcome.input_name(), code)
                }
            }
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(report)
}
