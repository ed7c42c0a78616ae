//! Interactive resolution of duplicate groups.
//!
//! # Overview
//!
//! For one [`DuplicateGroup`], the [`Resolver`] shows the members numbered
//! from 1, reads a response from the [`Console`], and repeats until the
//! response is a valid [`Decision`]. Rejected input is reported and the
//! group is shown again; there is no retry limit.
//!
//! # State machine
//!
//! ```text
//! Prompting --line--> Validating --valid--> Resolved
//!     ^                   |      --Q------> Aborted
//!     +-----invalid-------+
//! ```
//!
//! End of input is treated as `Q`: once the channel is closed no response
//! can ever arrive, so re-prompting would never terminate.
//!
//! # Example
//!
//! ```
//! use dirdupe::duplicates::DuplicateGroup;
//! use dirdupe::resolver::{Decision, LineConsole, Resolver};
//! use dirdupe::scanner::{FileEntry, Fingerprint};
//! use std::io::Cursor;
//! use std::path::PathBuf;
//!
//! let group = DuplicateGroup::new(
//!     Fingerprint::from_bytes([0; 32]),
//!     vec![
//!         FileEntry::new(PathBuf::from("/d/a.txt"), "a.txt", 5),
//!         FileEntry::new(PathBuf::from("/d/b.txt"), "b.txt", 5),
//!     ],
//! )
//! .unwrap();
//!
//! let mut console = LineConsole::new(Cursor::new("7\n2\n"), Vec::new());
//! let decision = Resolver::new(false).resolve(&group, &mut console).unwrap();
//! assert_eq!(decision, Decision::single(2));
//! ```

pub mod console;
pub mod decision;

use std::io;

use bytesize::ByteSize;
use yansi::{Condition, Paint};

use crate::duplicates::DuplicateGroup;

pub use console::{Console, LineConsole};
pub use decision::{parse_response, Decision, InputError};

/// Where a single group's resolution currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverState {
    /// The group is being shown and a response awaited
    #[default]
    Prompting,
    /// A response was read and is being checked
    Validating,
    /// A keep/delete decision was reached
    Resolved,
    /// The operator asked to stop the session
    Aborted,
}

impl ResolverState {
    /// Check if no further input is needed for this group.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Aborted)
    }
}

/// Prompts the operator until each group gets a decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    color: bool,
}

impl Resolver {
    /// Create a resolver; `color` enables ANSI styling of the query.
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn condition(&self) -> Condition {
        if self.color {
            Condition::ALWAYS
        } else {
            Condition::NEVER
        }
    }

    /// Render the query for `group`: numbered members and the options line.
    #[must_use]
    pub fn render_query(&self, group: &DuplicateGroup) -> String {
        let when = self.condition();
        let mut out = String::new();

        for (i, file) in group.files().iter().enumerate() {
            let number = format!("[{}]", i + 1);
            out.push_str(&format!(
                "  {} {} ({})\n",
                number.cyan().bold().whenever(when),
                file.path.display(),
                ByteSize::b(file.size)
            ));
        }

        let options = format!(
            "Delete which? 1-{} = that file, XX = all, N = none, Q = quit:",
            group.len()
        );
        out.push_str(&options.bold().whenever(when).to_string());
        out.push('\n');
        out
    }

    /// Run the prompt loop for one group.
    ///
    /// # Errors
    ///
    /// Only channel I/O failures are returned; invalid responses are
    /// handled by prompting again.
    pub fn resolve<C: Console + ?Sized>(
        &self,
        group: &DuplicateGroup,
        console: &mut C,
    ) -> io::Result<Decision> {
        let mut state = ResolverState::Prompting;
        let mut line = String::new();
        let mut decision = Decision::Abort;
        let mut attempts = 0usize;

        while !state.is_terminal() {
            state = match state {
                ResolverState::Prompting => {
                    console.write(&self.render_query(group))?;
                    attempts += 1;
                    match console.read_line()? {
                        Some(input) => {
                            line = input;
                            ResolverState::Validating
                        }
                        None => {
                            log::warn!("Input closed while awaiting a decision; stopping");
                            decision = Decision::Abort;
                            ResolverState::Aborted
                        }
                    }
                }
                ResolverState::Validating => match parse_response(&line, group.len()) {
                    Ok(parsed) => {
                        decision = parsed;
                        if decision.is_abort() {
                            ResolverState::Aborted
                        } else {
                            ResolverState::Resolved
                        }
                    }
                    Err(e) => {
                        log::debug!("Rejected response {:?}: {}", line, e);
                        let notice = format!("Invalid input: {}", e);
                        console.write_line(&notice.red().whenever(self.condition()).to_string())?;
                        ResolverState::Prompting
                    }
                },
                ResolverState::Resolved | ResolverState::Aborted => state,
            };
        }

        log::debug!("Group {:?} after {} prompt(s)", state, attempts);
        Ok(decision)
    }
}

/// Resolve one group with an uncolored [`Resolver`].
///
/// # Errors
///
/// See [`Resolver::resolve`].
pub fn resolve<C: Console + ?Sized>(
    group: &DuplicateGroup,
    console: &mut C,
) -> io::Result<Decision> {
    Resolver::default().resolve(group, console)
}
