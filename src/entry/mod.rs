//! Listing data model.
//!
//! ## Main Parts
//!
//! - [`DirectoryEntry`] - one measured child of the listed directory
//! - [`EntryKind`] - file or directory classification
//! - [`Report`] - the categorized listing with its grand total and printer

#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for entry types
pub mod entry;
pub mod report;

pub use entry::{DirectoryEntry, EntryKind};
pub use report::Report;
