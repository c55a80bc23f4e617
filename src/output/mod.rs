//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `utils` - Branch glyphs and prefix calculation
//! - `tree` - Formatter for a complete scanned tree

mod config;
mod tree;
mod utils;

pub use config::{DEFAULT_ROOT_PREFIX, OutputConfig};
pub use tree::{LineStyle, TreeFormatter, TreeLine};
pub use utils::{BRANCH, BRANCH_LAST, branch_prefix, continuation_prefix};
