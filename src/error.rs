//! Errors raised while measuring directories.
//!
//! Every variant except a failure to open the listing root is recoverable:
//! the affected entry or subtree contributes zero bytes, the error is logged
//! and recorded, and the walk carries on.

use std::{
    error::Error,
    fmt, io,
    path::{Path, PathBuf},
};

/// A problem encountered while enumerating or measuring filesystem entries.
#[derive(Debug)]
pub enum ScanError {
    /// A directory could not be opened or read.
    DirectoryOpen { path: PathBuf, source: io::Error },

    /// Metadata for a single entry could not be obtained.
    Metadata { path: PathBuf, source: io::Error },

    /// A followed symlink points back to one of its own ancestors.
    SymlinkLoop { path: PathBuf, ancestor: PathBuf },
}

impl ScanError {
    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryOpen { path, .. }
            | Self::Metadata { path, .. }
            | Self::SymlinkLoop { path, .. } => path,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryOpen { path, source } => {
                write!(f, "Failed to open directory {}: {source}", path.display())
            }
            Self::Metadata { path, source } => {
                write!(f, "Failed to read metadata for {}: {source}", path.display())
            }
            Self::SymlinkLoop { path, ancestor } => write!(
                f,
                "Symlink loop at {} (points back to {})",
                path.display(),
                ancestor.display()
            ),
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DirectoryOpen { source, .. } | Self::Metadata { source, .. } => Some(source),
            Self::SymlinkLoop { .. } => None,
        }
    }
}

impl From<walkdir::Error> for ScanError {
    /// Classify a walkdir error.
    ///
    /// Any failure on the walk root is an open failure, whether the root is
    /// missing, unreadable or gone. Below the root, walkdir reports a failed
    /// `read_dir` against the directory itself and a failed `stat` against the
    /// entry, so an error whose path is still a directory is an open failure.
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();

        if let Some(ancestor) = err.loop_ancestor() {
            return Self::SymlinkLoop {
                path,
                ancestor: ancestor.to_path_buf(),
            };
        }

        let at_root = err.depth() == 0;
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("directory walk failed"));

        if at_root || path.is_dir() {
            Self::DirectoryOpen { path, source }
        } else {
            Self::Metadata { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_directory_open() {
        let err = ScanError::DirectoryOpen {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };

        assert_eq!(err.to_string(), "Failed to open directory /nope: not found");
        assert_eq!(err.path(), Path::new("/nope"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display_metadata() {
        let err = ScanError::Metadata {
            path: PathBuf::from("dangling"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        assert_eq!(err.to_string(), "Failed to read metadata for dangling: gone");
    }

    #[test]
    fn test_display_symlink_loop() {
        let err = ScanError::SymlinkLoop {
            path: PathBuf::from("a/b/back"),
            ancestor: PathBuf::from("a"),
        };

        assert_eq!(err.to_string(), "Symlink loop at a/b/back (points back to a)");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_walkdir_missing_root() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("missing");

        let walk_err = walkdir::WalkDir::new(&missing)
            .into_iter()
            .find_map(Result::err)
            .unwrap();
        let err = ScanError::from(walk_err);

        assert!(matches!(err, ScanError::DirectoryOpen { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_from_walkdir_broken_link_below_root() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("dangling")).unwrap();

        let walk_err = walkdir::WalkDir::new(tmp.path())
            .follow_links(true)
            .into_iter()
            .find_map(Result::err)
            .unwrap();
        let err = ScanError::from(walk_err);

        assert!(matches!(err, ScanError::Metadata { .. }));
        assert_eq!(err.path(), tmp.path().join("dangling").as_path());
    }
}
