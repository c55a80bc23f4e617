//! Configuration types for the tree scanner

/// How symbolic links are represented in the scanned tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymlinkPolicy {
    /// Record a `Link` and also follow it: a link to a regular file adds a
    /// `File` entry, a link to a directory adds a recursive `Dir` entry.
    /// Links that re-enter a directory on the current ancestor chain are
    /// recorded but not descended.
    #[default]
    Follow,
    /// Record a `Link` only, never follow.
    LinkOnly,
}

/// Configuration for tree scanning behavior.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    pub symlinks: SymlinkPolicy,
}
