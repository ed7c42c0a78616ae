//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Fingerprint-based grouping of files
//! - Deterministic ordering of groups and their members
//! - The single-directory scan pipeline

pub mod finder;
pub mod groups;

pub use finder::{group_duplicates, DuplicateFinder, FinderError, ScanSummary};
pub use groups::{group_by_fingerprint, sort_groups, DuplicateGroup};
