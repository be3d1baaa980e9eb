//! Command-line interface definitions for dirsim.
//!
//! This module defines all CLI arguments and options using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Compare two snapshots, similarity threshold 50%
//! dirsim snap_a snap_b 50
//!
//! # Same comparison, arguments on standard input
//! printf 'snap_a\nsnap_b\n50\n' | dirsim
//!
//! # JSON output with BLAKE3 digests and sorted listings
//! dirsim --output json --digest blake3 --sort snap_a snap_b 75
//! ```

use std::ffi::OsString;
use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::scanner::DigestAlgorithm;

/// Compare two directories and classify file pairs as identical, similar or unmatched.
///
/// Every file of DIR_A is compared with every file of DIR_B. Pairs with the
/// same content are identical; other pairs whose byte-frequency overlap ratio
/// is at least THRESHOLD percent are similar. Files matching nothing are
/// listed on their own.
///
/// When fewer than three positional arguments are given, the two directories
/// and the threshold are read as three lines from standard input.
#[derive(Debug, Parser)]
#[command(name = "dirsim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First directory
    #[arg(value_name = "DIR_A")]
    pub dir_a: Option<PathBuf>,

    /// Second directory
    #[arg(value_name = "DIR_B")]
    pub dir_b: Option<PathBuf>,

    /// Similarity threshold in percent (unparseable values mean 0)
    #[arg(value_name = "THRESHOLD", allow_negative_numbers = true)]
    pub threshold: Option<String>,

    /// Positionals after the threshold are accepted and ignored
    #[arg(value_name = "IGNORED", hide = true)]
    pub extra: Vec<OsString>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format (defaults to the configured format, text if unset)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Content digest used for the identity check
    #[arg(long, value_enum)]
    pub digest: Option<DigestAlgorithm>,

    /// Sort each directory listing by file name
    #[arg(long)]
    pub sort: bool,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

/// Output format for comparison results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per pair or unmatched file
    #[default]
    Text,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Fully resolved run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// First directory, exactly as supplied
    pub dir_a: PathBuf,
    /// Second directory, exactly as supplied
    pub dir_b: PathBuf,
    /// Similarity threshold in percent
    pub threshold: f64,
}

/// Errors reading the invocation from standard input.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// Input ended before the named line.
    #[error("Missing {0} on standard input")]
    MissingLine(&'static str),

    /// Reading standard input failed.
    #[error("Failed to read standard input: {0}")]
    Io(#[from] std::io::Error),
}

impl Cli {
    /// Resolve directories and threshold.
    ///
    /// Uses the positionals when all three are present, otherwise reads
    /// three lines from `input`.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if `input` ends early or cannot be read.
    pub fn invocation<R: BufRead>(&self, input: R) -> Result<Invocation, InputError> {
        if let (Some(dir_a), Some(dir_b), Some(threshold)) =
            (&self.dir_a, &self.dir_b, &self.threshold)
        {
            if !self.extra.is_empty() {
                log::debug!("Ignoring {} extra positional arguments", self.extra.len());
            }
            return Ok(Invocation {
                dir_a: dir_a.clone(),
                dir_b: dir_b.clone(),
                threshold: parse_threshold(threshold),
            });
        }

        log::debug!("Fewer than three arguments, reading invocation from standard input");
        read_invocation(input)
    }
}

/// Read directory A, directory B and threshold as three lines.
///
/// # Errors
///
/// Returns `InputError` if fewer than three lines are available.
pub fn read_invocation<R: BufRead>(input: R) -> Result<Invocation, InputError> {
    let mut lines = input.lines();
    let mut next_line = |what: &'static str| -> Result<String, InputError> {
        match lines.next() {
            Some(line) => Ok(line?.trim().to_string()),
            None => Err(InputError::MissingLine(what)),
        }
    };

    let dir_a = next_line("first directory")?;
    let dir_b = next_line("second directory")?;
    let threshold = next_line("threshold")?;

    Ok(Invocation {
        dir_a: PathBuf::from(dir_a),
        dir_b: PathBuf::from(dir_b),
        threshold: parse_threshold(&threshold),
    })
}

/// Parse a threshold, falling back to `0.0` when the text is not a number.
///
/// # Examples
///
/// ```
/// use dirsim::cli::parse_threshold;
///
/// assert_eq!(parse_threshold("50"), 50.0);
/// assert_eq!(parse_threshold(" 12.5 "), 12.5);
/// assert_eq!(parse_threshold("-3"), -3.0);
/// assert_eq!(parse_threshold("abc"), 0.0);
/// ```
#[must_use]
pub fn parse_threshold(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            log::debug!("Unparseable threshold '{}', using 0", s);
            0.0
        }
    }
}
