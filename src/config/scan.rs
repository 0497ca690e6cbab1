//! Traversal configuration.
//!
//! This module defines the options that control how directory trees are
//! walked while sizes are aggregated.

/// Configuration for directory traversal behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether symbolic links are resolved and their targets measured.
    ///
    /// Off by default: a link counts as a non-directory entry with the size of
    /// the link itself. When on, cycles are detected and reported instead of
    /// being followed forever.
    pub follow_symlinks: bool,
}

impl ScanOptions {
    /// Enable or disable symlink following.
    #[must_use]
    pub const fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}
