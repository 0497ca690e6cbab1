//! A single measured child of the listed directory.

use std::fmt;

use crate::utils::format_size;

/// Whether an entry was measured as a file or as a directory subtree.
///
/// Anything that is not a directory (regular files, symlinks that are not
/// followed, devices, sockets, ...) is a [`EntryKind::File`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Marker printed in front of the entry's line.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::File => "FILE",
            Self::Directory => "DIR",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// A named entry with its measured size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File name of the entry, lossily converted to UTF-8
    pub name: String,

    /// File or directory
    pub kind: EntryKind,

    /// Size in bytes: the metadata length for files, the recursive content sum
    /// for directories
    pub size: u64,
}

impl DirectoryEntry {
    #[must_use]
    pub const fn new(name: String, kind: EntryKind, size: u64) -> Self {
        Self { name, kind, size }
    }

    /// `"<name>: <formatted size>"`, without the kind marker.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, format_size(self.size))
    }

    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}
