//! dirdupe - Interactive Duplicate File Finder
//!
//! Finds files with identical content directly inside one directory
//! (BLAKE3 fingerprints), then asks an operator, group by group, which
//! copies to delete. Selected files are reported, never removed.

pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod scanner;
pub mod session;

use std::io::IsTerminal;

use anyhow::Result;

use crate::cli::Cli;
use crate::error::ExitCode;
use crate::resolver::LineConsole;
use crate::session::{Session, SessionConfig};

/// Run the application for parsed CLI arguments.
///
/// # Errors
///
/// Returns the session's error when the target is invalid or I/O fails.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    // Styling is applied per value through `Resolver`'s condition.
    let color = !cli.no_color && std::io::stdout().is_terminal();

    let target = cli.target();
    log::debug!("Target directory: {}", target.display());

    let session = Session::new(SessionConfig { color });
    let mut console = LineConsole::stdio();
    let outcome = session.run(&target, &mut console)?;

    if outcome.aborted {
        log::info!("Stopped by operator");
    }
    Ok(ExitCode::Success)
}
