//! Shared path helpers for tree scanning

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Get the display name of a path, defaulting to "." for a root like "." or "/".
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Resolve a path the way `realpath` does: symlinks are followed as far as
/// they exist, and a dangling target is still turned into an absolute path.
///
/// Only fails if the link itself cannot be read or its parent cannot be
/// canonicalized.
pub fn resolve_real_path(path: &Path) -> io::Result<PathBuf> {
    if let Ok(real) = fs::canonicalize(path) {
        return Ok(real);
    }

    let target = fs::read_link(path)?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let base = fs::canonicalize(parent)?;
    let joined = if target.is_absolute() {
        target
    } else {
        base.join(target)
    };

    Ok(normalize_lexically(&joined))
}

/// Collapse `.` and `..` components without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays at `/`
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
