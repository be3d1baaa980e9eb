//! Directory comparer tying the pipeline together.
//!
//! # Overview
//!
//! [`DirectoryComparer::compare`] runs the full comparison of two
//! directories:
//! 1. **Listing**: regular files of A, then of B
//! 2. **Fingerprinting**: every file of A, then of B, read in full
//! 3. **Classification**: identical and similar pairs
//! 4. **Assignment**: unmatched files of each side
//!
//! All files are fingerprinted before any comparison starts. The first
//! listing or read failure aborts the run and nothing is returned.
//!
//! # Example
//!
//! ```no_run
//! use dirsim::compare::DirectoryComparer;
//! use std::path::Path;
//!
//! let comparer = DirectoryComparer::with_defaults();
//! let comparison = comparer
//!     .compare(Path::new("snap_a"), Path::new("snap_b"), 50.0)
//!     .unwrap();
//! println!("{} identical pairs", comparison.classification.identical.len());
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::{assign, classify, Assignment, Classification, FileRecord};
use crate::scanner::{
    fingerprint_file, DigestAlgorithm, HashError, ListedFile, Lister, ListerConfig, ScanError,
};

/// Configuration for a comparison run.
#[derive(Debug, Clone, Default)]
pub struct CompareConfig {
    /// Digest used for the identity check
    pub digest: DigestAlgorithm,
    /// Directory listing options
    pub lister_config: ListerConfig,
}

impl CompareConfig {
    /// Set the digest algorithm.
    #[must_use]
    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    /// Sort directory listings by file name.
    #[must_use]
    pub fn with_sorted_listing(mut self, sort: bool) -> Self {
        self.lister_config.sort_by_name = sort;
        self
    }
}

/// Errors that abort a comparison.
#[derive(thiserror::Error, Debug)]
pub enum CompareError {
    /// A directory could not be listed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A file could not be read.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Statistics about a comparison run.
#[derive(Debug, Clone, Default)]
pub struct CompareSummary {
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
    /// Time spent listing both directories
    pub list_duration: Duration,
    /// Time spent reading and fingerprinting
    pub fingerprint_duration: Duration,
    /// Time spent classifying pairs and assigning
    pub classify_duration: Duration,
    /// Duration of the entire run
    pub total_duration: Duration,
}

/// Result of comparing two directories.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Directory A as supplied by the caller
    pub dir_a: PathBuf,
    /// Directory B as supplied by the caller
    pub dir_b: PathBuf,
    /// Similarity threshold in percent
    pub threshold: f64,
    /// Digest used for the identity check
    pub digest: DigestAlgorithm,
    /// Records of directory A, in listing order
    pub records_a: Vec<FileRecord>,
    /// Records of directory B, in listing order
    pub records_b: Vec<FileRecord>,
    /// Accepted pairs
    pub classification: Classification,
    /// Unmatched files
    pub assignment: Assignment,
    /// Run statistics
    pub summary: CompareSummary,
}

impl Comparison {
    /// Find a record of directory A by name.
    #[must_use]
    pub fn record_a(&self, name: &str) -> Option<&FileRecord> {
        self.records_a.iter().find(|r| r.name == name)
    }

    /// Find a record of directory B by name.
    #[must_use]
    pub fn record_b(&self, name: &str) -> Option<&FileRecord> {
        self.records_b.iter().find(|r| r.name == name)
    }
}

/// Compares two directories file by file.
#[derive(Debug, Clone, Default)]
pub struct DirectoryComparer {
    config: CompareConfig,
}

impl DirectoryComparer {
    /// Create a new comparer with the given configuration.
    #[must_use]
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Create a new comparer with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CompareConfig::default())
    }

    /// Configuration of this comparer.
    #[must_use]
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare `dir_a` against `dir_b` at the given threshold.
    ///
    /// # Errors
    ///
    /// Returns `CompareError` if either directory cannot be listed or any
    /// listed file cannot be read.
    pub fn compare(
        &self,
        dir_a: &Path,
        dir_b: &Path,
        threshold: f64,
    ) -> Result<Comparison, CompareError> {
        let start_time = Instant::now();
        let mut summary = CompareSummary::default();

        log::debug!(
            "Comparing {} against {} (threshold {}, digest {})",
            dir_a.display(),
            dir_b.display(),
            threshold,
            self.config.digest
        );

        let listed_a = Lister::new(dir_a, self.config.lister_config.clone()).list()?;
        let listed_b = Lister::new(dir_b, self.config.lister_config.clone()).list()?;
        summary.files_a = listed_a.len();
        summary.files_b = listed_b.len();
        summary.list_duration = start_time.elapsed();

        let phase_start = Instant::now();
        let records_a = self.fingerprint_all(&listed_a)?;
        let records_b = self.fingerprint_all(&listed_b)?;
        summary.bytes_read = records_a
            .iter()
            .chain(records_b.iter())
            .map(|r| r.size)
            .sum();
        summary.fingerprint_duration = phase_start.elapsed();

        let phase_start = Instant::now();
        let classification = classify(&records_a, &records_b, threshold);
        let names_a: Vec<String> = listed_a.into_iter().map(|f| f.name).collect();
        let names_b: Vec<String> = listed_b.into_iter().map(|f| f.name).collect();
        let assignment = assign(&classification, &names_a, &names_b);
        summary.classify_duration = phase_start.elapsed();

        summary.pairs_compared = records_a.len() * records_b.len();
        summary.identical_pairs = classification.identical.len();
        summary.similar_pairs = classification.similar.len();
        summary.only_a = assignment.only_a.len();
        summary.only_b = assignment.only_b.len();
        summary.total_duration = start_time.elapsed();

        log::debug!(
            "Comparison complete in {:?}: {} identical, {} similar, {} only in A, {} only in B",
            summary.total_duration,
            summary.identical_pairs,
            summary.similar_pairs,
            summary.only_a,
            summary.only_b
        );

        Ok(Comparison {
            dir_a: dir_a.to_path_buf(),
            dir_b: dir_b.to_path_buf(),
            threshold,
            digest: self.config.digest,
            records_a,
            records_b,
            classification,
            assignment,
            summary,
        })
    }

    /// Fingerprint every listed file, stopping at the first failure.
    fn fingerprint_all(&self, files: &[ListedFile]) -> Result<Vec<FileRecord>, HashError> {
        files
            .iter()
            .map(|file| {
                let fingerprint = fingerprint_file(&file.path, self.config.digest)?;
                Ok(FileRecord::new(file.name.clone(), fingerprint))
            })
            .collect()
    }
}
