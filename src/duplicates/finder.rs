//! Duplicate finder: list, fingerprint, group.
//!
//! # Overview
//!
//! [`DuplicateFinder::find_duplicates`] runs the whole detection pipeline
//! for one directory:
//!
//! 1. **List** - collect the regular files directly inside the directory
//! 2. **Fingerprint** - stream each file through BLAKE3, one at a time
//! 3. **Group** - bucket by fingerprint, drop singletons, order the result
//!
//! Any listing or read failure aborts the scan. A file that cannot be read
//! is never silently left out, since that would hide real duplicates.
//!
//! # Example
//!
//! ```no_run
//! use dirdupe::duplicates::DuplicateFinder;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::new();
//! let (groups, summary) = finder.find_duplicates(Path::new(".")).unwrap();
//! println!("Found {} duplicate groups", summary.duplicate_groups);
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use bytesize::ByteSize;

use super::groups::{group_by_fingerprint, DuplicateGroup};
use crate::scanner::{fingerprint, HashError, ScanError, Walker};

/// Summary statistics from a completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Regular files listed in the directory
    pub total_files: usize,
    /// Total bytes across all listed files
    pub total_size: u64,
    /// Number of duplicate groups found
    pub duplicate_groups: usize,
    /// Files that are extra copies (group size minus one, summed)
    pub duplicate_files: usize,
    /// Bytes reclaimable by keeping one copy per group
    pub reclaimable_space: u64,
    /// Wall-clock time of the scan
    pub scan_duration: Duration,
}

impl ScanSummary {
    /// Reclaimable space in human-readable form.
    #[must_use]
    pub fn reclaimable_display(&self) -> String {
        ByteSize::b(self.reclaimable_space).to_string()
    }

    /// Total scanned size in human-readable form.
    #[must_use]
    pub fn total_size_display(&self) -> String {
        ByteSize::b(self.total_size).to_string()
    }
}

/// Errors that can occur during duplicate finding.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// The provided path does not exist.
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// The provided path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Listing the directory failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Reading a file's content failed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Duplicate finder for a single directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct DuplicateFinder;

impl DuplicateFinder {
    /// Create a new duplicate finder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Find all duplicate files directly inside `path`.
    ///
    /// # Returns
    ///
    /// A tuple of:
    /// - `Vec<DuplicateGroup>` - ordered duplicate groups
    /// - `ScanSummary` - statistics about the scan
    ///
    /// # Errors
    ///
    /// Returns `FinderError` if:
    /// - The path does not exist or is not a directory
    /// - The directory cannot be listed
    /// - Any file cannot be opened or read to the end
    pub fn find_duplicates(
        &self,
        path: &Path,
    ) -> Result<(Vec<DuplicateGroup>, ScanSummary), FinderError> {
        let start_time = Instant::now();

        if !path.exists() {
            return Err(FinderError::PathNotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(FinderError::NotADirectory(path.to_path_buf()));
        }

        log::info!("Starting duplicate scan of {}", path.display());

        let files = Walker::new(path).list()?;
        let mut summary = ScanSummary {
            total_files: files.len(),
            total_size: files.iter().map(|f| f.size).sum(),
            ..ScanSummary::default()
        };

        let mut fingerprinted = Vec::with_capacity(files.len());
        for file in files {
            let fp = fingerprint(&file.path)?;
            fingerprinted.push((file, fp));
        }

        let groups = group_by_fingerprint(fingerprinted);

        summary.duplicate_groups = groups.len();
        summary.duplicate_files = groups.iter().map(|g| g.len() - 1).sum();
        summary.reclaimable_space = groups.iter().map(DuplicateGroup::wasted_space).sum();
        summary.scan_duration = start_time.elapsed();

        log::info!(
            "Scan complete: {} files ({}), {} duplicate groups, {} reclaimable in {:.2?}",
            summary.total_files,
            summary.total_size_display(),
            summary.duplicate_groups,
            summary.reclaimable_display(),
            summary.scan_duration
        );

        Ok((groups, summary))
    }
}

/// Scan `path` and return its ordered duplicate groups.
///
/// # Errors
///
/// See [`DuplicateFinder::find_duplicates`].
pub fn group_duplicates(path: &Path) -> Result<Vec<DuplicateGroup>, FinderError> {
    DuplicateFinder::new().find_duplicates(path).map(|(groups, _)| groups)
}
