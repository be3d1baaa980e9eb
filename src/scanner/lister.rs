//! Flat directory listing using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Lister`] struct which collects the regular
//! files sitting directly inside one directory. It never recurses into
//! subdirectories. Entries are kept in the order the filesystem returns
//! them unless [`ListerConfig::sort_by_name`] is set.
//!
//! A name is kept when a stat of its path (following symlinks) reports a
//! regular file, so a symlink to a file counts and a dangling link does not.
//!
//! # Example
//!
//! ```no_run
//! use dirsim::scanner::{Lister, ListerConfig};
//! use std::path::Path;
//!
//! let lister = Lister::new(Path::new("snapshot_a"), ListerConfig::new(true));
//! for file in lister.list().unwrap() {
//!     println!("{}", file.name);
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{ListedFile, ListerConfig, ScanError};

/// Lists the regular files of a single directory.
#[derive(Debug)]
pub struct Lister {
    /// Directory to list
    root: PathBuf,
    /// Lister configuration
    config: ListerConfig,
}

impl Lister {
    /// Create a new lister for the given directory.
    #[must_use]
    pub fn new(path: &Path, config: ListerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Root directory of this lister.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the regular files directly inside the root directory.
    ///
    /// # Errors
    ///
    /// Fails on the first error: a missing root, a root that is not a
    /// directory, or any error reading the directory.
    pub fn list(&self) -> Result<Vec<ListedFile>, ScanError> {
        self.check_root()?;

        let mut walk_dir = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);
        if self.config.sort_by_name {
            walk_dir = walk_dir.sort_by_file_name();
        }

        let mut files = Vec::new();
        for entry in walk_dir {
            let entry = entry.map_err(|e| self.handle_walkdir_error(e))?;
            let path = entry.path().to_path_buf();

            // Follows symlinks; broken links and special files are dropped
            let is_file = std::fs::metadata(&path).is_ok_and(|m| m.is_file());
            if !is_file {
                log::trace!("Skipping non-file entry: {}", path.display());
                continue;
            }

            let name = match entry.file_name().to_str() {
                Some(name) => name.to_owned(),
                None => {
                    let lossy = entry.file_name().to_string_lossy().into_owned();
                    log::warn!(
                        "File name is not valid UTF-8, reported as {:?}: {}",
                        lossy,
                        path.display()
                    );
                    lossy
                }
            };
            files.push(ListedFile::new(name, path));
        }

        log::debug!("Listed {} files in {}", files.len(), self.root.display());
        Ok(files)
    }

    /// Verify the root exists and is a directory.
    fn check_root(&self) -> Result<(), ScanError> {
        let metadata =
            std::fs::metadata(&self.root).map_err(|e| self.handle_io_error(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }
        Ok(())
    }

    /// Handle I/O errors during directory access.
    fn handle_io_error(&self, path: &Path, error: std::io::Error) -> ScanError {
        use std::io::ErrorKind;

        match error.kind() {
            ErrorKind::PermissionDenied => ScanError::PermissionDenied(path.to_path_buf()),
            ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
            _ => ScanError::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    /// Handle walkdir errors.
    fn handle_walkdir_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        log::warn!("Listing error for {}: {}", path.display(), error);

        match error.into_io_error() {
            Some(io_error) => self.handle_io_error(&path, io_error),
            None => ScanError::Io {
                path,
                source: std::io::Error::other("filesystem loop detected"),
            },
        }
    }
}
