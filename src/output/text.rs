//! Plain text report, one line per item.
//!
//! # Format
//!
//! ```text
//! <dirA>/<nameA> - <dirB>/<nameB>              identical pairs
//! <dirA>/<nameA> - <dirB>/<nameB> - <ratio>    similar pairs
//! <dirA>/<name>                                unmatched in A
//! <dirB>/<name>                                unmatched in B
//! ```
//!
//! Groups appear in that order; within a group the comparison order is kept.
//! There is no header and no trailing summary.

use std::io::{self, Write};

use super::report_path;
use crate::compare::{format_ratio, Comparison, PairResult};

/// Text report formatter.
pub struct TextOutput<'a> {
    comparison: &'a Comparison,
}

impl<'a> TextOutput<'a> {
    /// Create a new text formatter.
    #[must_use]
    pub fn new(comparison: &'a Comparison) -> Self {
        Self { comparison }
    }

    /// Render the report lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let c = self.comparison;
        let mut lines = Vec::with_capacity(c.classification.len() + c.assignment.len());

        for pair in c.classification.pairs() {
            let a = report_path(&c.dir_a, pair.name_a());
            let b = report_path(&c.dir_b, pair.name_b());
            match pair {
                PairResult::Identical { .. } => lines.push(format!("{a} - {b}")),
                PairResult::Similar { ratio, .. } => {
                    lines.push(format!("{a} - {b} - {}", format_ratio(*ratio)));
                }
            }
        }

        lines.extend(c.assignment.only_a.iter().map(|n| report_path(&c.dir_a, n)));
        lines.extend(c.assignment.only_b.iter().map(|n| report_path(&c.dir_b, n)));
        lines
    }

    /// Write the report to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}
