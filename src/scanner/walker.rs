//! Single-level directory listing using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct, which collects the regular
//! files sitting directly inside one directory. Subdirectories are not
//! descended into, and symbolic links are neither followed nor reported.
//!
//! # Example
//!
//! ```no_run
//! use dirdupe::scanner::Walker;
//! use std::path::Path;
//!
//! let files = Walker::new(Path::new("/home/user/Downloads")).list().unwrap();
//! println!("{} files", files.len());
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError};

/// Directory lister for one level of a directory.
#[derive(Debug)]
pub struct Walker {
    /// Directory to list
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given directory.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// List the regular files directly inside the root directory.
    ///
    /// Entries come back in file-name order. Each path is canonicalized.
    ///
    /// # Errors
    ///
    /// Any failure to read the directory, stat an entry, or canonicalize
    /// its path aborts the listing.
    pub fn list(&self) -> Result<Vec<FileEntry>, ScanError> {
        let mut files = Vec::new();

        let walk = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for result in walk {
            let entry = result.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                match e.into_io_error() {
                    Some(io) => ScanError::from_io(&path, io),
                    None => ScanError::Io {
                        path,
                        source: std::io::Error::other("directory walk failed"),
                    },
                }
            })?;

            if !entry.file_type().is_file() {
                log::trace!("Skipping non-regular entry {}", entry.path().display());
                continue;
            }

            let metadata = entry
                .metadata()
                .map_err(|e| match e.into_io_error() {
                    Some(io) => ScanError::from_io(entry.path(), io),
                    None => ScanError::Io {
                        path: entry.path().to_path_buf(),
                        source: std::io::Error::other("metadata unavailable"),
                    },
                })?;

            let path = std::fs::canonicalize(entry.path())
                .map_err(|e| ScanError::from_io(entry.path(), e))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            files.push(FileEntry::new(path, name, metadata.len()));
        }

        log::debug!("Listed {} files in {}", files.len(), self.root.display());
        Ok(files)
    }
}
