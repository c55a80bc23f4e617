//! Filter configuration: built-in defaults, JSON filter files, CLI additions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::{FilterChain, FilterKind};

/// Patterns excluded unless defaults are disabled.
pub const DEFAULT_PATTERNS: &[&str] = &[r"\.pyc$"];

/// Names excluded unless defaults are disabled.
pub const DEFAULT_NAMES: &[&str] = &[".git", ".gitignore"];

/// Serializable set of exclusions.
///
/// A JSON filter file looks like
/// `{"names": [".git"], "paths": ["build/out"], "patterns": ["\\.log$"]}`;
/// every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub names: Vec<String>,
    pub paths: Vec<String>,
    pub patterns: Vec<String>,
}

impl FilterConfig {
    /// The built-in exclusions.
    pub fn defaults() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().map(|s| s.to_string()).collect(),
            paths: Vec::new(),
            patterns: DEFAULT_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse a JSON filter file.
    pub fn from_json(path: &Path, text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a JSON filter file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(path, &text)
    }

    /// Append another configuration after this one.
    pub fn extend(&mut self, other: FilterConfig) {
        self.names.extend(other.names);
        self.paths.extend(other.paths);
        self.patterns.extend(other.patterns);
    }

    /// Register every exclusion into `chain`: patterns, then names, then paths.
    pub fn register_into(&self, chain: &mut FilterChain) -> Result<()> {
        chain.register(FilterKind::Pattern, &self.patterns)?;
        chain.register(FilterKind::Name, &self.names)?;
        chain.register(FilterKind::Path, &self.paths)?;
        Ok(())
    }

    /// Build a fresh chain from this configuration.
    pub fn to_chain(&self) -> Result<FilterChain> {
        let mut chain = FilterChain::new();
        self.register_into(&mut chain)?;
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_exclude_git_and_pyc() {
        let chain = FilterConfig::defaults().to_chain().unwrap();
        assert!(chain.is_excluded(".git", ".git"));
        assert!(chain.is_excluded(".gitignore", ".gitignore"));
        assert!(chain.is_excluded("mod.pyc", "mod.pyc"));
        assert!(!chain.is_excluded("mod.py", "mod.py"));
    }

    #[test]
    fn test_from_json_partial_keys() {
        let cfg = FilterConfig::from_json(Path::new("f.json"), r#"{"names": ["target"]}"#).unwrap();
        assert_eq!(cfg.names, vec!["target"]);
        assert!(cfg.paths.is_empty());
        assert!(cfg.patterns.is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = FilterConfig::from_json(Path::new("f.json"), r#"{"globs": ["*"]}"#).unwrap_err();
        assert_eq!(err.kind(), "ConfigError");
        assert!(err.to_string().contains("f.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FilterConfig::load(&PathBuf::from("/nonexistent/filters.json")).unwrap_err();
        assert_eq!(err.kind(), "ConfigError");
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("filters.json");
        std::fs::write(&path, r#"{"patterns": ["\\.log$"], "paths": ["a"]}"#).unwrap();
        let cfg = FilterConfig::load(&path).unwrap();
        assert_eq!(cfg.patterns, vec![r"\.log$"]);
        assert_eq!(cfg.paths, vec!["a"]);
    }

    #[test]
    fn test_extend_appends() {
        let mut cfg = FilterConfig::defaults();
        cfg.extend(FilterConfig {
            names: vec!["node_modules".into()],
            ..Default::default()
        });
        assert_eq!(cfg.names, vec![".git", ".gitignore", "node_modules"]);
    }

    #[test]
    fn test_invalid_pattern_propagates() {
        let cfg = FilterConfig {
            patterns: vec!["[".into()],
            ..Default::default()
        };
        assert!(cfg.to_chain().is_err());
    }
}
