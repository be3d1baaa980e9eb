//! Scanner module for directory listing and file fingerprinting.
//!
//! This module provides functionality for:
//! - Flat (non-recursive) directory listing of regular files
//! - Content fingerprinting: digest, size and byte-value histogram
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`lister`]: Directory listing and regular-file filtering
//! - [`fingerprint`]: SHA-256/BLAKE3 digest plus 256-bucket histogram
//!
//! # Example
//!
//! ```no_run
//! use dirsim::scanner::{fingerprint_file, DigestAlgorithm, Lister, ListerConfig};
//! use std::path::Path;
//!
//! let lister = Lister::new(Path::new("snapshot_a"), ListerConfig::default());
//! for file in lister.list().unwrap() {
//!     let fp = fingerprint_file(&file.path, DigestAlgorithm::Sha256).unwrap();
//!     println!("{}: {} bytes", file.name, fp.size);
//! }
//! ```

pub mod fingerprint;
pub mod lister;

use std::path::PathBuf;

// Re-export main types
pub use fingerprint::{
    fingerprint_file, hash_to_hex, hex_to_hash, DigestAlgorithm, Fingerprint, Hash, Histogram,
    HISTOGRAM_BUCKETS,
};
pub use lister::Lister;

/// A regular file discovered directly inside a compared directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    /// File name relative to the listed directory
    pub name: String,
    /// Full path used to read the file
    pub path: PathBuf,
}

impl ListedFile {
    /// Create a new ListedFile.
    #[must_use]
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }
}

/// Configuration for directory listing.
#[derive(Debug, Clone, Default)]
pub struct ListerConfig {
    /// Sort entries by file name instead of keeping raw listing order.
    pub sort_by_name: bool,
}

impl ListerConfig {
    /// Create a new configuration.
    ///
    /// # Arguments
    ///
    /// * `sort_by_name` - Whether to sort the listing by file name
    #[must_use]
    pub fn new(sort_by_name: bool) -> Self {
        Self { sort_by_name }
    }
}

/// Listing failures. Any of these aborts the comparison.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The directory exists but may not be read.
    #[error("Cannot list {0}: permission denied")]
    PermissionDenied(PathBuf),

    /// Nothing exists at the directory path.
    #[error("Directory not found: {0}")]
    NotFound(PathBuf),

    /// The path exists but names something other than a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Any other listing failure.
    #[error("Failed to list {path}: {source}")]
    Io {
        /// Directory or entry being listed
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read failures while fingerprinting a listed file.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The file disappeared between listing and reading.
    #[error("File vanished before it could be read: {0}")]
    NotFound(PathBuf),

    /// The file is listed but may not be read.
    #[error("Cannot read {0}: permission denied")]
    PermissionDenied(PathBuf),

    /// Any other read failure.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
