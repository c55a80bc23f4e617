//! Exclusion filters applied to every directory entry during a scan

use std::path::MAIN_SEPARATOR;

use regex::Regex;

use crate::error::{Error, Result};

/// Which field of an entry a filter is registered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Exact basename match
    Name,
    /// Exact relative path match
    Path,
    /// Regular expression search
    Pattern,
}

/// A single exclusion predicate over (name, relative path).
#[derive(Debug, Clone)]
pub enum Filter {
    Name(String),
    Path(String),
    /// `match_path` is fixed at construction: patterns containing a path
    /// separator are searched in the full path, all others in the name.
    Pattern { regex: Regex, match_path: bool },
}

impl Filter {
    pub fn name(name: impl Into<String>) -> Self {
        Filter::Name(name.into())
    }

    pub fn path(path: impl Into<String>) -> Self {
        Filter::Path(path.into())
    }

    /// Compile a pattern filter. Fails only on an invalid regular expression.
    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Filter::Pattern {
            regex,
            match_path: pattern.contains(MAIN_SEPARATOR),
        })
    }

    /// Check if an entry matches this filter.
    pub fn matches(&self, name: &str, path: &str) -> bool {
        match self {
            Filter::Name(n) => n == name,
            Filter::Path(p) => p == path,
            Filter::Pattern { regex, match_path } => {
                if *match_path {
                    regex.is_match(path)
                } else {
                    regex.is_match(name)
                }
            }
        }
    }
}

/// Ordered list of exclusion filters.
///
/// Built once before scanning and handed to the scanner by shared
/// reference, so every scan observes the same filter set.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    filters: Vec<Filter>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one filter per item, in order.
    pub fn register<I, S>(&mut self, kind: FilterKind, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            let item = item.as_ref();
            let filter = match kind {
                FilterKind::Name => Filter::name(item),
                FilterKind::Path => Filter::path(item),
                FilterKind::Pattern => Filter::pattern(item)?,
            };
            self.filters.push(filter);
        }
        Ok(())
    }

    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// True if any registered filter matches. Evaluation stops at the first match.
    pub fn is_excluded(&self, name: &str, path: &str) -> bool {
        self.filters.iter().any(|f| f.matches(name, path))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }
}
