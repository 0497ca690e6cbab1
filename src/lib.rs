//! # dir-weight
//!
//! List the entries of a directory with human-readable sizes.
//!
//! Every child of the listed directory is classified as a file or a
//! directory. Files are measured by their metadata length, directories by the
//! recursive sum of everything they contain. The report prints files first,
//! then directories, then the grand total.
//!
//! ## Modules
//!
//! - [`aggregator`] - recursive directory size computation
//! - [`lister`] - enumeration of a directory's immediate children
//! - [`entry`] - the listing data model and report printer
//! - [`utils`] - size formatting
//! - [`config`] - traversal and display options, and the config file
//! - [`error`] - the error taxonomy for failed filesystem calls

pub mod aggregator;
pub mod config;
pub mod entry;
pub mod error;
pub mod lister;
pub mod utils;

pub use aggregator::{DirSize, SizeAggregator};
pub use config::{DisplayOptions, FileConfig, ScanOptions};
pub use entry::{DirectoryEntry, EntryKind, Report};
pub use error::ScanError;
pub use lister::EntryLister;
pub use utils::format_size;
