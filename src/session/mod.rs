//! Session module driving one end-to-end run.
//!
//! A session validates the target directory, scans it once, then walks the
//! duplicate groups in order and asks the operator about each. Every file
//! the operator picks becomes a [`DeletionReport`], written to the console
//! as `Deleting: <path>` and returned to the caller.
//!
//! Nothing is removed from disk here. Acting on the reports is up to
//! whoever consumes them.
//!
//! # Example
//!
//! ```no_run
//! use dirdupe::resolver::LineConsole;
//! use dirdupe::session::Session;
//! use std::path::Path;
//!
//! let mut console = LineConsole::stdio();
//! let outcome = Session::default().run(Path::new("."), &mut console).unwrap();
//! println!("{} file(s) selected", outcome.reports.len());
//! ```

pub mod report;

use std::path::{Path, PathBuf};

use crate::duplicates::{DuplicateFinder, FinderError, ScanSummary};
use crate::resolver::{Console, Resolver};

pub use report::DeletionReport;

/// Runtime settings for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Style prompts with ANSI colors
    pub color: bool,
}

/// Result of a completed (or operator-aborted) session.
#[derive(Debug, Clone, Default)]
pub struct SessionOutcome {
    /// Files selected for deletion, in group order then position order
    pub reports: Vec<DeletionReport>,
    /// Statistics from the scan
    pub summary: ScanSummary,
    /// Groups that received a decision
    pub groups_resolved: usize,
    /// Whether the operator stopped before the last group
    pub aborted: bool,
}

/// Errors that end a session.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// The target is missing or not a directory.
    #[error("Target must be a directory: {0}")]
    InvalidTarget(PathBuf),

    /// Scanning the directory failed.
    #[error(transparent)]
    Scan(#[from] FinderError),

    /// The operator console failed.
    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),
}

/// One scan-and-resolve run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
}

impl Session {
    /// Create a session with the given settings.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Scan `dir` and resolve each duplicate group through `console`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InvalidTarget`] before any scanning if `dir` is
    ///   not an existing directory
    /// - [`SessionError::Scan`] if listing or reading any file fails
    /// - [`SessionError::Console`] if the console cannot be read or written
    pub fn run<C: Console + ?Sized>(
        &self,
        dir: &Path,
        console: &mut C,
    ) -> Result<SessionOutcome, SessionError> {
        if !dir.is_dir() {
            return Err(SessionError::InvalidTarget(dir.to_path_buf()));
        }

        let (groups, summary) = DuplicateFinder::new().find_duplicates(dir)?;
        console.write_line(&format!("Duplicate groups found: {}", groups.len()))?;

        let resolver = Resolver::new(self.config.color);
        let mut outcome = SessionOutcome {
            summary,
            ..SessionOutcome::default()
        };

        let total = groups.len();
        for (i, group) in groups.iter().enumerate() {
            console.write_line(&format!(
                "\nGroup {} of {} ({} copies, {})",
                i + 1,
                total,
                group.len(),
                group.fingerprint().short()
            ))?;

            let decision = resolver.resolve(group, console)?;
            if decision.is_abort() {
                log::info!("Session aborted by operator at group {} of {}", i + 1, total);
                outcome.aborted = true;
                break;
            }

            for file in decision.selection(group) {
                let report = DeletionReport::new(file.path.clone());
                console.write_line(&report.to_string())?;
                outcome.reports.push(report);
            }
            outcome.groups_resolved += 1;
        }

        log::info!(
            "{} of {} groups resolved, {} file(s) selected for deletion",
            outcome.groups_resolved,
            total,
            outcome.reports.len()
        );
        Ok(outcome)
    }
}

/// Run a session with default settings.
///
/// # Errors
///
/// See [`Session::run`].
pub fn run<C: Console + ?Sized>(
    dir: &Path,
    console: &mut C,
) -> Result<SessionOutcome, SessionError> {
    Session::default().run(dir, console)
}
