//! Deletion reports emitted by a session.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A file the operator selected for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    /// Canonical path of the selected file
    pub path: PathBuf,
}

impl DeletionReport {
    /// Create a report for `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl fmt::Display for DeletionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deleting: {}", self.path.display())
    }
}
