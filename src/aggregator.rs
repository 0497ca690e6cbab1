//! Recursive directory size aggregation.
//!
//! This module sums the sizes of every file below a directory. Problems with
//! individual entries are logged and recorded but never abort the walk: an
//! unreadable subtree simply contributes zero bytes.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::{config::ScanOptions, error::ScanError};

/// The measured size of a directory subtree.
#[derive(Debug, Default)]
pub struct DirSize {
    /// Sum of the sizes of every non-directory entry below the root
    pub bytes: u64,

    /// Problems encountered during the walk, in the order they were hit
    pub errors: Vec<ScanError>,
}

impl DirSize {
    fn record(&mut self, err: ScanError) {
        warn!("{err}");
        self.errors.push(err);
    }
}

/// Computes the total byte size of directory subtrees.
#[derive(Clone, Copy, Debug, Default)]
pub struct SizeAggregator {
    scan_options: ScanOptions,
}

impl SizeAggregator {
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self { scan_options }
    }

    /// Calculate the total size of a directory and all its contents, in bytes.
    ///
    /// Traverses the tree depth-first and adds the metadata length of every
    /// entry that is not a directory. The root's own metadata size and those
    /// of nested directories are never counted.
    ///
    /// A root that is missing or is not a directory (under the current
    /// symlink policy) yields zero bytes and a single
    /// [`ScanError::DirectoryOpen`].
    ///
    /// A directory that cannot be opened contributes zero, as does an entry
    /// whose metadata cannot be read; both are reported in
    /// [`DirSize::errors`]. When symlinks are followed, a link back to one of
    /// its ancestors is reported as [`ScanError::SymlinkLoop`] and not entered.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use std::path::Path;
    /// # use dir_weight::{SizeAggregator, ScanOptions};
    /// let size = SizeAggregator::new(ScanOptions::default()).directory_size(Path::new("src"));
    /// println!("src/ holds {} bytes", size.bytes);
    /// ```
    pub fn directory_size(&self, path: &Path) -> DirSize {
        let mut size = DirSize::default();

        if let Err(err) = self.check_root(path) {
            size.record(err);
            return size;
        }

        let walker = WalkDir::new(path)
            .min_depth(1)
            .follow_links(self.scan_options.follow_symlinks);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    size.record(err.into());
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                debug!("Descending into {}", entry.path().display());
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => size.bytes += metadata.len(),
                Err(err) => size.record(err.into()),
            }
        }

        size
    }

    /// Make sure `path` is a directory under the current symlink policy.
    ///
    /// walkdir with `min_depth(1)` silently yields nothing for a regular file,
    /// so a non-directory root has to be caught before walking.
    fn check_root(&self, path: &Path) -> Result<(), ScanError> {
        let metadata = if self.scan_options.follow_symlinks {
            fs::metadata(path)
        } else {
            fs::symlink_metadata(path)
        };

        match metadata {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(ScanError::DirectoryOpen {
                path: PathBuf::from(path),
                source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            }),
            Err(source) => Err(ScanError::DirectoryOpen {
                path: PathBuf::from(path),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_bytes(path: &Path, len: usize) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, vec![b'x'; len]).unwrap();
    }

    #[test]
    fn test_empty_directory_is_zero() {
        let tmp = TempDir::new().unwrap();

        let size = SizeAggregator::default().directory_size(tmp.path());

        assert_eq!(size.bytes, 0);
        assert!(size.errors.is_empty());
    }

    #[test]
    fn test_flat_directory_sums_files() {
        let tmp = TempDir::new().unwrap();
        write_bytes(&tmp.path().join("a"), 10);
        write_bytes(&tmp.path().join("b"), 20);
        write_bytes(&tmp.path().join("c"), 30);

        let size = SizeAggregator::default().directory_size(tmp.path());

        assert_eq!(size.bytes, 60);
    }

    #[test]
    fn test_nested_directory_is_recursive() {
        let tmp = TempDir::new().unwrap();
        write_bytes(&tmp.path().join("top.bin"), 5);
        write_bytes(&tmp.path().join("sub").join("inner.bin"), 7);

        let size = SizeAggregator::default().directory_size(tmp.path());

        assert_eq!(size.bytes, 12);
    }

    #[test]
    fn test_empty_nested_directories_add_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a").join("b").join("c")).unwrap();

        let size = SizeAggregator::default().directory_size(tmp.path());

        assert_eq!(size.bytes, 0);
        assert!(size.errors.is_empty());
    }

    #[test]
    fn test_missing_directory_is_zero_with_error() {
        let tmp = TempDir::new().unwrap();

        let size = SizeAggregator::default().directory_size(&tmp.path().join("missing"));

        assert_eq!(size.bytes, 0);
        assert_eq!(size.errors.len(), 1);
        assert!(matches!(size.errors[0], ScanError::DirectoryOpen { .. }));
    }

    #[test]
    fn test_file_root_is_zero_with_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.bin");
        write_bytes(&file, 99);

        let size = SizeAggregator::default().directory_size(&file);

        assert_eq!(size.bytes, 0);
        assert_eq!(size.errors.len(), 1);
        match &size.errors[0] {
            ScanError::DirectoryOpen { path, source } => {
                assert_eq!(path, &file);
                assert_eq!(source.kind(), io::ErrorKind::NotADirectory);
            }
            other => panic!("expected DirectoryOpen, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_root_respects_policy() {
        let tmp = TempDir::new().unwrap();
        write_bytes(&tmp.path().join("real").join("data"), 40);
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(tmp.path().join("real"), &link).unwrap();

        let skipped = SizeAggregator::default().directory_size(&link);
        assert_eq!(skipped.bytes, 0);
        assert!(matches!(skipped.errors[0], ScanError::DirectoryOpen { .. }));

        let following = SizeAggregator::new(ScanOptions::default().with_follow_symlinks(true));
        let followed = following.directory_size(&link);
        assert_eq!(followed.bytes, 40);
        assert!(followed.errors.is_empty());
    }
}
