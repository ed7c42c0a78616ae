//! Structured error handling and exit codes.

use serde::Serialize;

use crate::session::SessionError;

/// Exit codes for the dirdupe binary.
///
/// - 0: Success (including an operator-requested stop)
/// - 1: Target is not a directory
/// - 2: I/O failure while scanning or talking to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Completed normally.
    Success = 0,
    /// The target path does not name a directory.
    InvalidTarget = 1,
    /// Listing, reading, or console I/O failed.
    IoFailure = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DD000",
            Self::InvalidTarget => "DD001",
            Self::IoFailure => "DD002",
        }
    }

    /// Pick the exit code for a fatal error.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<SessionError>() {
            Some(SessionError::InvalidTarget(_)) => Self::InvalidTarget,
            _ => Self::IoFailure,
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DD001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}
