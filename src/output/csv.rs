//! CSV output formatter for comparison results.
//!
//! One row is generated per report item, in the same order as the text
//! report.
//!
//! # Columns
//!
//! - `kind`: `identical`, `similar`, `only_a` or `only_b`
//! - `file_a`: path in directory A (empty for `only_b`)
//! - `file_b`: path in directory B (empty for `only_a`)
//! - `ratio`: display ratio for `similar` rows, empty otherwise

use std::io;

use serde::Serialize;
use thiserror::Error;

use super::report_path;
use crate::compare::{format_ratio, Comparison, PairResult};

/// Errors that can occur during CSV output generation.
#[derive(Debug, Error)]
pub enum CsvOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Column names, in `CsvRow` field order.
const HEADER: [&str; 4] = ["kind", "file_a", "file_b", "ratio"];

/// Report item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum RowKind {
    Identical,
    Similar,
    OnlyA,
    OnlyB,
}

/// A single row in the CSV output.
#[derive(Debug, Serialize)]
struct CsvRow {
    kind: RowKind,
    file_a: String,
    file_b: String,
    ratio: String,
}

/// CSV output formatter.
pub struct CsvOutput<'a> {
    comparison: &'a Comparison,
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter.
    #[must_use]
    pub fn new(comparison: &'a Comparison) -> Self {
        Self { comparison }
    }

    /// Write the CSV output to the given writer.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if writing or serialization fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        let c = self.comparison;
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        // Written up front so an empty report still has its header
        csv_writer.write_record(HEADER)?;

        for pair in c.classification.pairs() {
            let (kind, ratio) = match pair {
                PairResult::Identical { .. } => (RowKind::Identical, String::new()),
                PairResult::Similar { ratio, .. } => (RowKind::Similar, format_ratio(*ratio)),
            };
            csv_writer.serialize(CsvRow {
                kind,
                file_a: report_path(&c.dir_a, pair.name_a()),
                file_b: report_path(&c.dir_b, pair.name_b()),
                ratio,
            })?;
        }

        for name in &c.assignment.only_a {
            csv_writer.serialize(CsvRow {
                kind: RowKind::OnlyA,
                file_a: report_path(&c.dir_a, name),
                file_b: String::new(),
                ratio: String::new(),
            })?;
        }

        for name in &c.assignment.only_b {
            csv_writer.serialize(CsvRow {
                kind: RowKind::OnlyB,
                file_a: String::new(),
                file_b: report_path(&c.dir_b, name),
                ratio: String::new(),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Generate CSV output as a string.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if serialization fails.
    pub fn to_string(&self) -> Result<String, CsvOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
