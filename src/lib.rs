//! Sumtree - a directory tree with file sizes and valid/blank line counts

pub mod config;
pub mod entity;
pub mod error;
pub mod filter;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::FilterConfig;
pub use entity::{Dir, EntryKind, File, FileEntry, Link};
pub use error::{Error, Result};
pub use filter::{Filter, FilterChain, FilterKind};
pub use output::{OutputConfig, TreeFormatter};
pub use stats::{Totals, aggregate};
pub use tree::{ScanConfig, SymlinkPolicy, TreeScanner};
