//! Cross-directory comparison module.
//!
//! This module provides functionality for:
//! - Pairwise classification of files as identical or similar
//! - Assignment of files to "used" status and collection of unmatched files
//! - The [`DirectoryComparer`] pipeline tying listing, fingerprinting,
//!   classification and assignment together
//!
//! # Example
//!
//! ```
//! use dirsim::compare::{classify, FileRecord, PairResult};
//! use dirsim::scanner::DigestAlgorithm;
//!
//! let a = vec![FileRecord::from_bytes("a.bin", b"ABA", DigestAlgorithm::Sha256)];
//! let b = vec![FileRecord::from_bytes("b.bin", b"BA", DigestAlgorithm::Sha256)];
//!
//! let classification = classify(&a, &b, 50.0);
//! assert!(classification.identical.is_empty());
//! assert!(matches!(classification.similar[0], PairResult::Similar { .. }));
//! ```

pub mod assignment;
pub mod classifier;
pub mod comparer;

use crate::scanner::{DigestAlgorithm, Fingerprint, Hash, Histogram};

// Re-export main types
pub use assignment::{assign, Assignment};
pub use classifier::{classify, format_ratio, overlap, ratio, Classification};
pub use comparer::{CompareConfig, CompareError, CompareSummary, Comparison, DirectoryComparer};

/// Fingerprinted file from one side of the comparison.
///
/// Built once per file and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// File name within its directory
    pub name: String,
    /// Content digest
    pub digest: Hash,
    /// Length in bytes
    pub size: u64,
    /// Byte-value frequency counts, summing to `size`
    pub histogram: Histogram,
}

impl FileRecord {
    /// Create a record from a name and a computed fingerprint.
    #[must_use]
    pub fn new(name: impl Into<String>, fingerprint: Fingerprint) -> Self {
        Self {
            name: name.into(),
            digest: fingerprint.digest,
            size: fingerprint.size,
            histogram: fingerprint.histogram,
        }
    }

    /// Create a record straight from in-memory content.
    #[must_use]
    pub fn from_bytes(name: impl Into<String>, data: &[u8], algorithm: DigestAlgorithm) -> Self {
        Self::new(name, Fingerprint::from_bytes(data, algorithm))
    }

    /// Whether two records have the same digest and size.
    #[must_use]
    pub fn is_identical_to(&self, other: &FileRecord) -> bool {
        self.digest == other.digest && self.size == other.size
    }
}

/// An accepted cross-directory pair.
#[derive(Debug, Clone, PartialEq)]
pub enum PairResult {
    /// Same digest and size.
    Identical {
        /// Name in directory A
        name_a: String,
        /// Name in directory B
        name_b: String,
    },
    /// Histogram overlap ratio at or above the threshold.
    Similar {
        /// Name in directory A
        name_a: String,
        /// Name in directory B
        name_b: String,
        /// Overlap ratio in percent, unrounded
        ratio: f64,
    },
}

impl PairResult {
    /// Name of the file in directory A.
    #[must_use]
    pub fn name_a(&self) -> &str {
        match self {
            Self::Identical { name_a, .. } | Self::Similar { name_a, .. } => name_a,
        }
    }

    /// Name of the file in directory B.
    #[must_use]
    pub fn name_b(&self) -> &str {
        match self {
            Self::Identical { name_b, .. } | Self::Similar { name_b, .. } => name_b,
        }
    }

    /// Similarity ratio, `None` for identical pairs.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Self::Identical { .. } => None,
            Self::Similar { ratio, .. } => Some(*ratio),
        }
    }

    /// Whether this is an identical pair.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical { .. })
    }
}
