//! Content fingerprinting: digest, size and byte-value histogram.
//!
//! # Overview
//!
//! A [`Fingerprint`] is computed from a single full read of a file. It carries
//! a 256-bit cryptographic digest (SHA-256 by default, BLAKE3 on request),
//! the byte length, and a histogram counting how often each byte value
//! occurs. The digest and size decide identity; the histogram feeds the
//! overlap ratio used for similarity.
//!
//! # Example
//!
//! ```
//! use dirsim::scanner::{DigestAlgorithm, Fingerprint};
//!
//! let fp = Fingerprint::from_bytes(b"ABA", DigestAlgorithm::Sha256);
//! assert_eq!(fp.size, 3);
//! assert_eq!(fp.histogram[b'A' as usize], 2);
//! assert_eq!(fp.histogram[b'B' as usize], 1);
//! ```

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::HashError;

/// Number of histogram buckets, one per byte value.
pub const HISTOGRAM_BUCKETS: usize = 256;

/// 32-byte content digest.
pub type Hash = [u8; 32];

/// Byte-value frequency counts.
pub type Histogram = [u64; HISTOGRAM_BUCKETS];

/// Cryptographic digest used for the identity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-256
    #[default]
    Sha256,
    /// BLAKE3 (256-bit output)
    Blake3,
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgorithm::Sha256 => write!(f, "sha256"),
            DigestAlgorithm::Blake3 => write!(f, "blake3"),
        }
    }
}

impl DigestAlgorithm {
    /// Digest a byte buffer.
    #[must_use]
    pub fn digest(self, data: &[u8]) -> Hash {
        match self {
            DigestAlgorithm::Sha256 => Sha256::digest(data).into(),
            DigestAlgorithm::Blake3 => *blake3::hash(data).as_bytes(),
        }
    }
}

/// Digest, size and byte histogram of one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    /// Content digest
    pub digest: Hash,
    /// Length in bytes
    pub size: u64,
    /// `histogram[i]` is the number of bytes equal to `i`
    pub histogram: Histogram,
}

impl Fingerprint {
    /// Fingerprint an in-memory buffer.
    #[must_use]
    pub fn from_bytes(data: &[u8], algorithm: DigestAlgorithm) -> Self {
        let mut histogram = [0u64; HISTOGRAM_BUCKETS];
        for &byte in data {
            histogram[byte as usize] += 1;
        }

        Self {
            digest: algorithm.digest(data),
            size: data.len() as u64,
            histogram,
        }
    }

    /// Sum of all histogram buckets. Always equals `size`.
    #[must_use]
    pub fn histogram_total(&self) -> u64 {
        self.histogram.iter().sum()
    }

    /// Digest as a lowercase hex string.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        hash_to_hex(&self.digest)
    }
}

/// Read a file in full and fingerprint it.
///
/// # Errors
///
/// Returns [`HashError`] if the file cannot be opened or read.
pub fn fingerprint_file(path: &Path, algorithm: DigestAlgorithm) -> Result<Fingerprint, HashError> {
    let data = std::fs::read(path).map_err(|e| map_io_error(path, e))?;
    let fingerprint = Fingerprint::from_bytes(&data, algorithm);

    log::trace!(
        "Fingerprinted {} ({} bytes, {} {})",
        path.display(),
        fingerprint.size,
        algorithm,
        fingerprint.digest_hex()
    );

    Ok(fingerprint)
}

fn map_io_error(path: &Path, error: std::io::Error) -> HashError {
    match error.kind() {
        ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source: error,
        },
    }
}

/// Render a digest as lowercase hex.
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

/// Parse a 64-character hex string back into a digest.
///
/// Returns `None` on wrong length or non-hex characters.
#[must_use]
pub fn hex_to_hash(hex: &str) -> Option<Hash> {
    if hex.len() != 64 || !hex.is_ascii() {
        return None;
    }

    let mut hash = [0u8; 32];
    for (i, byte) in hash.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(hash)
}
