//! JSON output formatter for comparison results.
//!
//! Provides machine-readable JSON output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "dir_a": "snap_a",
//!   "dir_b": "snap_b",
//!   "threshold": 50.0,
//!   "digest": "sha256",
//!   "identical": [
//!     { "a": "snap_a/f1.bin", "b": "snap_b/f2.bin", "digest": "b5d4..." }
//!   ],
//!   "similar": [
//!     { "a": "snap_a/a.bin", "b": "snap_b/b.bin", "ratio": 66.66666666666667 }
//!   ],
//!   "only_a": ["snap_a/x.bin"],
//!   "only_b": ["snap_b/y.bin"],
//!   "summary": {
//!     "files_a": 3,
//!     "files_b": 3,
//!     "bytes_read": 17,
//!     "pairs_compared": 9,
//!     "identical_pairs": 1,
//!     "similar_pairs": 1,
//!     "only_a": 1,
//!     "only_b": 1,
//!     "duration_ms": 2,
//!     "exit_code": 0,
//!     "exit_code_name": "DS000"
//!   }
//! }
//! ```
//!
//! Ratios are unrounded. Ordering matches the text report.

use std::io::Write;

use serde::Serialize;

use super::report_path;
use crate::compare::{CompareSummary, Comparison};
use crate::error::ExitCode;
use crate::scanner::hash_to_hex;

/// An identical pair in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonIdenticalPair {
    /// Path in directory A
    pub a: String,
    /// Path in directory B
    pub b: String,
    /// Shared content digest (hex)
    pub digest: String,
}

/// A similar pair in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSimilarPair {
    /// Path in directory A
    pub a: String,
    /// Path in directory B
    pub b: String,
    /// Overlap ratio in percent
    pub ratio: f64,
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Regular files found in directory A
    pub files_a: usize,
    /// Regular files found in directory B
    pub files_b: usize,
    /// Bytes read across both directories
    pub bytes_read: u64,
    /// Number of cross pairs examined
    pub pairs_compared: usize,
    /// Number of identical pairs
    pub identical_pairs: usize,
    /// Number of similar pairs
    pub similar_pairs: usize,
    /// Number of unmatched files in A
    pub only_a: usize,
    /// Number of unmatched files in B
    pub only_b: usize,
    /// Duration of the run in milliseconds
    pub duration_ms: u64,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "DS000")
    pub exit_code_name: String,
}

impl JsonSummary {
    /// Create a JSON summary from a CompareSummary and an exit code.
    #[must_use]
    pub fn from_summary(summary: &CompareSummary, exit_code: ExitCode) -> Self {
        Self {
            files_a: summary.files_a,
            files_b: summary.files_b,
            bytes_read: summary.bytes_read,
            pairs_compared: summary.pairs_compared,
            identical_pairs: summary.identical_pairs,
            similar_pairs: summary.similar_pairs,
            only_a: summary.only_a,
            only_b: summary.only_b,
            duration_ms: summary.total_duration.as_millis() as u64,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Directory A as supplied
    pub dir_a: String,
    /// Directory B as supplied
    pub dir_b: String,
    /// Similarity threshold
    pub threshold: f64,
    /// Digest algorithm name
    pub digest: String,
    /// Identical pairs
    pub identical: Vec<JsonIdenticalPair>,
    /// Similar pairs
    pub similar: Vec<JsonSimilarPair>,
    /// Unmatched files of directory A
    pub only_a: Vec<String>,
    /// Unmatched files of directory B
    pub only_b: Vec<String>,
    /// Run statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from a comparison and exit code.
    #[must_use]
    pub fn new(comparison: &Comparison, exit_code: ExitCode) -> Self {
        let c = comparison;

        let identical = c
            .classification
            .identical
            .iter()
            .map(|pair| JsonIdenticalPair {
                a: report_path(&c.dir_a, pair.name_a()),
                b: report_path(&c.dir_b, pair.name_b()),
                digest: c
                    .record_a(pair.name_a())
                    .map(|r| hash_to_hex(&r.digest))
                    .unwrap_or_default(),
            })
            .collect();

        let similar = c
            .classification
            .similar
            .iter()
            .map(|pair| JsonSimilarPair {
                a: report_path(&c.dir_a, pair.name_a()),
                b: report_path(&c.dir_b, pair.name_b()),
                ratio: pair.ratio().unwrap_or_default(),
            })
            .collect();

        Self {
            dir_a: c.dir_a.display().to_string(),
            dir_b: c.dir_b.display().to_string(),
            threshold: c.threshold,
            digest: c.digest.to_string(),
            identical,
            similar,
            only_a: c
                .assignment
                .only_a
                .iter()
                .map(|n| report_path(&c.dir_a, n))
                .collect(),
            only_b: c
                .assignment
                .only_b
                .iter()
                .map(|n| report_path(&c.dir_b, n))
                .collect(),
            summary: JsonSummary::from_summary(&c.summary, exit_code),
        }
    }

    /// Serialize to compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), JsonOutputError> {
        let json = self.to_json_pretty()?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}
