//! Output configuration types

/// Prefix placed before every top-level line of the tree.
pub const DEFAULT_ROOT_PREFIX: &str = "  ";

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub root_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            root_prefix: DEFAULT_ROOT_PREFIX.to_string(),
        }
    }
}
