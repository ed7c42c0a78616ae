//! Duplicate groups and their ordering rules.
//!
//! # Overview
//!
//! Files are bucketed by [`Fingerprint`]. Buckets holding a single file are
//! not duplicates and are dropped. Members of each surviving group are
//! sorted by canonical path, and the groups themselves are sorted by the
//! name of their first member. Both orderings are load-bearing: member
//! order defines the 1-based positions an operator selects from.
//!
//! # Example
//!
//! ```
//! use dirdupe::duplicates::group_by_fingerprint;
//! use dirdupe::scanner::{FileEntry, Fingerprint};
//! use std::path::PathBuf;
//!
//! let same = Fingerprint::from_bytes([1; 32]);
//! let other = Fingerprint::from_bytes([2; 32]);
//! let files = vec![
//!     (FileEntry::new(PathBuf::from("/d/b.txt"), "b.txt", 5), same),
//!     (FileEntry::new(PathBuf::from("/d/a.txt"), "a.txt", 5), same),
//!     (FileEntry::new(PathBuf::from("/d/c.txt"), "c.txt", 5), other),
//! ];
//!
//! let groups = group_by_fingerprint(files);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].files()[0].name, "a.txt");
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use crate::scanner::{FileEntry, Fingerprint};

/// Confirmed duplicate group of files.
///
/// Always holds at least two files, sorted by canonical path. Fields are
/// only reachable through accessors so that holds after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    fingerprint: Fingerprint,
    files: Vec<FileEntry>,
}

impl DuplicateGroup {
    /// Create a group, sorting `files` by path.
    ///
    /// Returns `None` when fewer than two files are given.
    #[must_use]
    pub fn new(fingerprint: Fingerprint, mut files: Vec<FileEntry>) -> Option<Self> {
        if files.len() < 2 {
            return None;
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Some(Self { fingerprint, files })
    }

    /// Fingerprint shared by every member.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Members, ascending by canonical path.
    #[must_use]
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Always false for a constructed group; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Member at a 1-based position, as shown to the operator.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&FileEntry> {
        position.checked_sub(1).and_then(|i| self.files.get(i))
    }

    /// The member groups are ordered by.
    #[must_use]
    pub fn first(&self) -> &FileEntry {
        &self.files[0]
    }

    /// Size of one copy in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.files[0].size
    }

    /// Bytes that would be freed by keeping only one copy.
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size() * (self.files.len() as u64 - 1)
    }

    /// Get just the paths of files in this group.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }
}

/// Partition fingerprinted files into ordered duplicate groups.
///
/// Input order does not matter; the output is fully determined by the
/// file paths, names, and fingerprints.
#[must_use]
pub fn group_by_fingerprint(
    files: impl IntoIterator<Item = (FileEntry, Fingerprint)>,
) -> Vec<DuplicateGroup> {
    let mut buckets: HashMap<Fingerprint, Vec<FileEntry>> = HashMap::new();
    for (file, fp) in files {
        buckets.entry(fp).or_default().push(file);
    }

    let mut groups: Vec<DuplicateGroup> = buckets
        .into_iter()
        .filter_map(|(fp, files)| DuplicateGroup::new(fp, files))
        .collect();

    sort_groups(&mut groups);
    groups
}

/// Order groups by their first member's name, then its path.
pub fn sort_groups(groups: &mut [DuplicateGroup]) {
    groups.sort_by(|a, b| {
        a.first()
            .name
            .cmp(&b.first().name)
            .then_with(|| a.first().path.cmp(&b.first().path))
    });
}
