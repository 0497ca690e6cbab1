//! Listing of a directory's immediate children.
//!
//! [`EntryLister`] enumerates one directory, classifies each child as a file
//! or a directory, measures it, and gathers everything into a [`Report`].

use std::{
    fs::{self, Metadata},
    io,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{
    aggregator::SizeAggregator,
    config::ScanOptions,
    entry::{DirectoryEntry, EntryKind, Report},
    error::ScanError,
};

/// Lists and measures the immediate children of a root directory.
#[derive(Debug)]
pub struct EntryLister {
    /// Directory whose children are listed
    root: PathBuf,

    /// Traversal behavior, shared with the aggregator
    scan_options: ScanOptions,

    aggregator: SizeAggregator,
}

impl EntryLister {
    /// Create a lister for `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, scan_options: ScanOptions) -> Self {
        Self {
            root: root.into(),
            scan_options,
            aggregator: SizeAggregator::new(scan_options),
        }
    }

    /// Create a lister for the process's working directory.
    #[must_use]
    pub fn current_dir(scan_options: ScanOptions) -> Self {
        Self::new(".", scan_options)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate and measure every child of the root.
    ///
    /// Files are measured by their metadata length. Directories are measured
    /// by the recursive sum of their contents, never by their own metadata
    /// size. Children are kept in filesystem enumeration order, grouped by
    /// kind.
    ///
    /// An entry whose metadata cannot be read is skipped and recorded in
    /// [`Report::errors`] together with every problem raised while measuring
    /// subdirectories.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::DirectoryOpen`] if the root itself cannot be read.
    pub fn list(&self) -> Result<Report, ScanError> {
        let read_dir = fs::read_dir(&self.root).map_err(|source| ScanError::DirectoryOpen {
            path: self.root.clone(),
            source,
        })?;

        let mut report = Report::default();

        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(source) => {
                    skip_entry(
                        &mut report,
                        ScanError::Metadata {
                            path: self.root.clone(),
                            source,
                        },
                    );
                    continue;
                }
            };

            let path = dir_entry.path();
            let name = dir_entry.file_name().to_string_lossy().into_owned();

            let metadata = match self.metadata(&path) {
                Ok(metadata) => metadata,
                Err(source) => {
                    skip_entry(&mut report, ScanError::Metadata { path, source });
                    continue;
                }
            };

            let entry = if metadata.is_dir() {
                debug!("Measuring directory {}", path.display());
                let subtree = self.aggregator.directory_size(&path);
                report.errors.extend(subtree.errors);
                DirectoryEntry::new(name, EntryKind::Directory, subtree.bytes)
            } else {
                DirectoryEntry::new(name, EntryKind::File, metadata.len())
            };

            report.push(entry);
        }

        Ok(report)
    }

    /// List the root and print the report to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be read or stdout cannot be
    /// written to.
    pub fn run(&self) -> anyhow::Result<Report> {
        let report = self.list()?;
        report.print()?;
        Ok(report)
    }

    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        if self.scan_options.follow_symlinks {
            fs::metadata(path)
        } else {
            fs::symlink_metadata(path)
        }
    }
}

fn skip_entry(report: &mut Report, err: ScanError) {
    warn!("{err}");
    report.errors.push(err);
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_directory_report() {
        let tmp = TempDir::new().unwrap();

        let report = EntryLister::new(tmp.path(), ScanOptions::default())
            .list()
            .unwrap();

        assert!(report.is_empty());
        assert_eq!(report.total_size, 0);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");

        let err = EntryLister::new(&missing, ScanOptions::default())
            .list()
            .unwrap_err();

        assert!(matches!(err, ScanError::DirectoryOpen { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[test]
    fn test_file_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "hi").unwrap();

        let result = EntryLister::new(&file, ScanOptions::default()).list();

        assert!(matches!(result, Err(ScanError::DirectoryOpen { .. })));
    }

    #[test]
    fn test_run_returns_printed_report() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("one.txt"), "12345").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("two.txt"), "123").unwrap();

        let report = EntryLister::new(tmp.path(), ScanOptions::default())
            .run()
            .unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.directories.len(), 1);
        assert_eq!(report.total_size, 8);
    }

    #[test]
    fn test_run_fails_for_missing_root() {
        let tmp = TempDir::new().unwrap();

        let result = EntryLister::new(tmp.path().join("missing"), ScanOptions::default()).run();

        assert!(result.is_err());
    }

    #[test]
    fn test_current_dir_root() {
        let lister = EntryLister::current_dir(ScanOptions::default());
        assert_eq!(lister.root(), Path::new("."));
    }

    #[test]
    fn test_directory_uses_content_size_not_own_size() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("empty")).unwrap();

        let report = EntryLister::new(tmp.path(), ScanOptions::default())
            .list()
            .unwrap();

        assert_eq!(report.directories.len(), 1);
        assert_eq!(report.directories[0].size, 0);
        assert_eq!(report.total_size, 0);
    }
}
