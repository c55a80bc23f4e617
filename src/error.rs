//! Error types for scanning and filter set-up

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building filters or the entity tree.
///
/// Any scan error aborts the whole run: a partial tree would produce
/// silently wrong totals.
#[derive(Debug, Error)]
pub enum Error {
    /// A directory's contents could not be enumerated.
    #[error("cannot list '{}': {source}", path.display())]
    List { path: PathBuf, source: io::Error },

    /// A file's bytes could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// A symbolic link's target could not be resolved.
    #[error("cannot resolve link '{}': {source}", path.display())]
    Resolve { path: PathBuf, source: io::Error },

    /// An exclusion pattern is not a valid regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    /// The filter configuration file could not be loaded.
    #[error("invalid filter file '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// Short name of the error kind, used in user-facing reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::List { .. } => "ListError",
            Error::Read { .. } => "ReadError",
            Error::Resolve { .. } => "ResolveError",
            Error::Pattern { .. } => "PatternError",
            Error::Config { .. } => "ConfigError",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = Error::Read {
            path: PathBuf::from("src/main.rs"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("src/main.rs"), "{}", msg);
        assert!(msg.contains("denied"), "{}", msg);
        assert_eq!(err.kind(), "ReadError");
    }

    #[test]
    fn test_kind_names() {
        let list = Error::List {
            path: PathBuf::from("x"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let resolve = Error::Resolve {
            path: PathBuf::from("x"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(list.kind(), "ListError");
        assert_eq!(resolve.kind(), "ResolveError");
    }
}
