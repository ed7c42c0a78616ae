//! Operator decisions and response parsing.

use std::collections::BTreeSet;

use crate::duplicates::DuplicateGroup;
use crate::scanner::FileEntry;

/// Terminal outcome of resolving one duplicate group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Keep every member.
    DeleteNone,
    /// Delete every member.
    DeleteAll,
    /// Delete the members at these 1-based positions.
    DeleteIndices(BTreeSet<usize>),
    /// Stop the whole session; no further groups are offered.
    Abort,
}

impl Decision {
    /// Select exactly one member by its 1-based position.
    #[must_use]
    pub fn single(position: usize) -> Self {
        Self::DeleteIndices(BTreeSet::from([position]))
    }

    /// Whether this decision ends the session.
    #[must_use]
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Abort)
    }

    /// Members of `group` chosen for deletion, in group order.
    ///
    /// Positions outside the group select nothing.
    #[must_use]
    pub fn selection<'g>(&self, group: &'g DuplicateGroup) -> Vec<&'g FileEntry> {
        match self {
            Self::DeleteNone | Self::Abort => Vec::new(),
            Self::DeleteAll => group.files().iter().collect(),
            Self::DeleteIndices(positions) => {
                positions.iter().filter_map(|&p| group.get(p)).collect()
            }
        }
    }
}

/// Why an operator response was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing but whitespace was entered.
    #[error("No selection entered")]
    Empty,

    /// A number outside `1..=len` was entered.
    #[error("{input} is not between 1 and {len}")]
    OutOfRange {
        /// The digits as typed
        input: String,
        /// Group size
        len: usize,
    },

    /// Input matched none of the accepted forms.
    #[error("Unrecognized option: {0}")]
    Unrecognized(String),
}

/// Parse one operator response against a group of `len` members.
///
/// Accepted forms, ignoring surrounding whitespace and letter case:
/// a 1-based position, `XX` (delete all), `N` (keep all), `Q` (quit).
///
/// # Errors
///
/// Returns [`InputError`] for empty, out-of-range, or unrecognized input.
pub fn parse_response(line: &str, len: usize) -> Result<Decision, InputError> {
    let input = line.trim();

    if input.is_empty() {
        return Err(InputError::Empty);
    }

    if input.bytes().all(|b| b.is_ascii_digit()) {
        return match input.parse::<usize>() {
            Ok(position) if (1..=len).contains(&position) => Ok(Decision::single(position)),
            _ => Err(InputError::OutOfRange {
                input: input.to_string(),
                len,
            }),
        };
    }

    match input.to_ascii_uppercase().as_str() {
        "XX" => Ok(Decision::DeleteAll),
        "N" => Ok(Decision::DeleteNone),
        "Q" => Ok(Decision::Abort),
        _ => Err(InputError::Unrecognized(input.to_string())),
    }
}
