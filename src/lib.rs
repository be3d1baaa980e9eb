//! dirsim - Directory Similarity Comparer
//!
//! Compares two directories of files and classifies every cross-directory
//! pair as identical (same SHA-256/BLAKE3 digest and size), similar (byte
//! histogram overlap at or above a threshold), or leaves files unmatched.

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::compare::DirectoryComparer;
use crate::config::Config;
use crate::error::ExitCode;

/// Run the application for parsed CLI arguments.
///
/// The report is written to stdout only after the whole comparison has
/// succeeded, so a failure never leaves a partial report behind.
///
/// # Errors
///
/// Returns an error if the invocation cannot be read from stdin, a
/// directory cannot be listed, a file cannot be read, or the report cannot
/// be written.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let mut config = Config::load(cli.config.as_deref());
    config.apply_cli(&cli);

    let invocation = cli
        .invocation(std::io::stdin().lock())
        .context("Failed to read invocation")?;

    let comparer = DirectoryComparer::new(config.compare_config());
    let comparison = comparer
        .compare(&invocation.dir_a, &invocation.dir_b, invocation.threshold)
        .context("Comparison failed")?;

    let mut stdout = std::io::stdout().lock();
    output::write_report(&comparison, config.output, &mut stdout)
        .context("Failed to write report")?;

    Ok(ExitCode::Success)
}
