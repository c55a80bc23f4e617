//! TreeScanner - builds the full entity tree in memory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::entity::{Dir, EntryKind, File, FileEntry, Link};
use crate::error::{Error, Result};
use crate::filter::FilterChain;

use super::config::{ScanConfig, SymlinkPolicy};
use super::utils::entry_name;

/// Recursive directory scanner.
///
/// Children are listed in name order, files and links before
/// subdirectories, so the resulting tree is stable across runs on the same
/// filesystem state. Any listing, read or resolve failure aborts the scan.
pub struct TreeScanner<'a> {
    config: ScanConfig,
    filters: &'a FilterChain,
}

impl<'a> TreeScanner<'a> {
    pub fn new(config: ScanConfig, filters: &'a FilterChain) -> Self {
        Self { config, filters }
    }

    /// Scan `root` and everything below it.
    pub fn scan(&self, root: &Path) -> Result<Dir> {
        let list_err = |source: io::Error| Error::List {
            path: root.to_path_buf(),
            source,
        };
        let meta = fs::metadata(root).map_err(list_err)?;
        if !meta.is_dir() {
            return Err(list_err(io::Error::from(io::ErrorKind::NotADirectory)));
        }
        let canonical = fs::canonicalize(root).map_err(list_err)?;

        let mut ancestors = vec![canonical];
        self.scan_dir(
            root,
            PathBuf::new(),
            entry_name(root),
            EntryKind::Plain,
            &mut ancestors,
        )
    }

    /// `ancestors` holds the canonical path of every directory from the root
    /// down to and including `full_path`.
    fn scan_dir(
        &self,
        full_path: &Path,
        rel_path: PathBuf,
        name: String,
        kind: EntryKind,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<Dir> {
        debug!(path = %full_path.display(), "scanning directory");

        let list_err = |source: io::Error| Error::List {
            path: full_path.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(full_path).map_err(list_err)? {
            names.push(entry.map_err(list_err)?.file_name());
        }
        names.sort();

        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for file_name in names {
            let name = file_name.to_string_lossy().to_string();
            let entry_full = full_path.join(&file_name);
            let entry_rel = rel_path.join(&file_name);

            if self
                .filters
                .is_excluded(&name, &entry_rel.to_string_lossy())
            {
                trace!(path = %entry_rel.display(), "excluded");
                continue;
            }

            let link_meta = fs::symlink_metadata(&entry_full).map_err(|source| Error::List {
                path: entry_full.clone(),
                source,
            })?;
            let is_link = link_meta.file_type().is_symlink();

            let target_meta = if is_link {
                files.push(FileEntry::Link(Link::resolve(
                    &entry_full,
                    name.clone(),
                    entry_rel.clone(),
                )?));
                if self.config.symlinks == SymlinkPolicy::LinkOnly {
                    continue;
                }
                match fs::metadata(&entry_full) {
                    Ok(meta) => meta,
                    Err(e) => {
                        debug!(path = %entry_rel.display(), error = %e, "dangling link");
                        continue;
                    }
                }
            } else {
                link_meta
            };

            if target_meta.is_file() {
                let kind = if is_link {
                    EntryKind::SymlinkToFile
                } else {
                    EntryKind::Plain
                };
                files.push(FileEntry::File(File::read(
                    &entry_full,
                    name,
                    entry_rel,
                    kind,
                )?));
            } else if target_meta.is_dir() {
                let (kind, canonical) = if is_link {
                    let canonical =
                        fs::canonicalize(&entry_full).map_err(|source| Error::Resolve {
                            path: entry_full.clone(),
                            source,
                        })?;
                    (EntryKind::SymlinkToDir, canonical)
                } else {
                    // Parent is canonical and this entry is no link
                    let parent = ancestors.last().cloned().unwrap_or_default();
                    (EntryKind::Plain, parent.join(&file_name))
                };

                if ancestors.contains(&canonical) {
                    warn!(
                        path = %entry_rel.display(),
                        target = %canonical.display(),
                        "not descending into symlink cycle"
                    );
                    continue;
                }

                ancestors.push(canonical);
                let dir = self.scan_dir(&entry_full, entry_rel, name, kind, ancestors);
                ancestors.pop();
                dirs.push(dir?);
            }
        }

        Ok(Dir::new(name, rel_path, kind, files, dirs))
    }
}
