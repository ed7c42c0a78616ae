//! Command-line interface definitions for dirdupe.
//!
//! # Example
//!
//! ```bash
//! # Review duplicates in the current directory
//! dirdupe
//!
//! # Review duplicates in another directory, with debug logging on stderr
//! dirdupe -vv ~/Pictures/imports
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Find files with identical content in one directory and pick which to delete.
///
/// Only the files directly inside PATH are compared. For each group of
/// duplicates you are asked which copy to delete: a number selects that
/// file, XX selects all, N keeps all, Q stops. Selected files are reported
/// as "Deleting: <path>" lines; nothing is removed from disk.
#[derive(Debug, Parser)]
#[command(name = "dirdupe")]
#[command(author, version, about)]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

impl Cli {
    /// Directory to scan, relative paths being relative to the working directory.
    #[must_use]
    pub fn target(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
