//! Directory tree scanning
//!
//! `TreeScanner` walks a directory depth-first, applies the exclusion
//! filters and builds an immutable [`Dir`](crate::entity::Dir) snapshot.

mod config;
mod scanner;
pub(crate) mod utils;

pub use config::{ScanConfig, SymlinkPolicy};
pub use scanner::TreeScanner;
pub use utils::{normalize_lexically, resolve_real_path};
