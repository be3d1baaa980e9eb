//! Output formatters for comparison results.
//!
//! This module provides different output formats for a [`Comparison`]:
//! - Plain text, one line per pair or unmatched file (default)
//! - JSON for automation and scripting
//! - CSV for spreadsheet import
//!
//! # Example
//!
//! ```no_run
//! use dirsim::cli::OutputFormat;
//! use dirsim::compare::DirectoryComparer;
//! use dirsim::output::write_report;
//! use std::path::Path;
//!
//! let comparison = DirectoryComparer::with_defaults()
//!     .compare(Path::new("snap_a"), Path::new("snap_b"), 50.0)
//!     .unwrap();
//! write_report(&comparison, OutputFormat::Text, &mut std::io::stdout()).unwrap();
//! ```

pub mod csv;
pub mod json;
pub mod text;

use std::io::Write;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::compare::Comparison;
use crate::error::ExitCode;

// Re-export main types
pub use self::csv::{CsvOutput, CsvOutputError};
pub use json::{JsonOutput, JsonOutputError};
pub use text::TextOutput;

/// Errors that can occur while writing a report.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// Plain I/O failure
    #[error("I/O error writing report: {0}")]
    Io(#[from] std::io::Error),

    /// JSON formatting failure
    #[error(transparent)]
    Json(#[from] JsonOutputError),

    /// CSV formatting failure
    #[error(transparent)]
    Csv(#[from] CsvOutputError),
}

/// Write a comparison in the requested format.
///
/// # Errors
///
/// Returns `OutputError` if formatting or writing fails.
pub fn write_report<W: Write>(
    comparison: &Comparison,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => TextOutput::new(comparison).write_to(writer)?,
        OutputFormat::Json => JsonOutput::new(comparison, ExitCode::Success).write_to(writer)?,
        OutputFormat::Csv => CsvOutput::new(comparison).write_to(writer)?,
    }
    Ok(())
}

/// Join a directory as supplied with a file name, `<dir>/<name>`.
#[must_use]
pub fn report_path(dir: &Path, name: &str) -> String {
    format!("{}/{}", dir.display(), name)
}
