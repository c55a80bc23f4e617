//! Scanned filesystem entities: files, symbolic links and directories
//!
//! Every entity is an immutable snapshot taken when it was constructed.
//! Paths are relative to the scan root; names are basenames.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::tree::utils::resolve_real_path;

/// How an entity was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file or directory
    Plain,
    /// A regular file reached through a symbolic link
    SymlinkToFile,
    /// A directory reached through a symbolic link
    SymlinkToDir,
}

/// A regular file with size and line metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    name: String,
    path: PathBuf,
    kind: EntryKind,
    size_bytes: u64,
    valid_lines: usize,
    blank_lines: usize,
}

impl File {
    /// Read `full_path` once and compute its metrics.
    pub fn read(full_path: &Path, name: String, path: PathBuf, kind: EntryKind) -> Result<Self> {
        let data = fs::read(full_path).map_err(|source| Error::Read {
            path: full_path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(name, path, kind, &data))
    }

    pub fn from_bytes(name: String, path: PathBuf, kind: EntryKind, data: &[u8]) -> Self {
        let (valid_lines, blank_lines) = count_lines(data);
        Self {
            name,
            path,
            kind,
            size_bytes: data.len() as u64,
            valid_lines,
            blank_lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size in kibibytes.
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }

    pub fn valid_lines(&self) -> usize {
        self.valid_lines
    }

    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }

    /// One report line with the name padded to `width`.
    pub fn render(&self, width: usize) -> String {
        format!(
            "{:<width$}: {:>4.1} KB, {:>4} valid lines, {:>4} blank lines",
            self.name,
            self.size_kb(),
            self.valid_lines,
            self.blank_lines,
            width = width
        )
    }
}

/// Count (valid, blank) lines.
///
/// Lines are split on `\n` only, so trailing content after the final newline
/// (including the empty remainder) is a line of its own. A line is valid if
/// it is non-empty after trimming ASCII whitespace.
pub fn count_lines(data: &[u8]) -> (usize, usize) {
    let mut total = 0;
    let mut valid = 0;
    for line in data.split(|&b| b == b'\n') {
        total += 1;
        if !line.trim_ascii().is_empty() {
            valid += 1;
        }
    }
    (valid, total - valid)
}

/// A symbolic link and its resolved target. The target may not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    name: String,
    path: PathBuf,
    real_path: PathBuf,
}

impl Link {
    pub fn resolve(full_path: &Path, name: String, path: PathBuf) -> Result<Self> {
        let real_path = resolve_real_path(full_path).map_err(|source| Error::Resolve {
            path: full_path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            name,
            path,
            real_path,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn real_path(&self) -> &Path {
        &self.real_path
    }

    /// Whether the resolved target currently exists.
    pub fn is_dangling(&self) -> bool {
        fs::symlink_metadata(&self.real_path).is_err()
    }

    pub fn render(&self, width: usize) -> String {
        format!(
            "{:<width$}: link to {}",
            self.name,
            self.real_path.display(),
            width = width
        )
    }
}

/// Entry of a directory's file listing.
#[derive(Debug, Clone, PartialEq)]
pub enum FileEntry {
    File(File),
    Link(Link),
}

impl FileEntry {
    pub fn name(&self) -> &str {
        match self {
            FileEntry::File(f) => f.name(),
            FileEntry::Link(l) => l.name(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FileEntry::File(f) => f.path(),
            FileEntry::Link(l) => l.path(),
        }
    }

    /// The file metrics, if this entry has any.
    pub fn as_file(&self) -> Option<&File> {
        match self {
            FileEntry::File(f) => Some(f),
            FileEntry::Link(_) => None,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, FileEntry::Link(_))
    }

    pub fn render(&self, width: usize) -> String {
        match self {
            FileEntry::File(f) => f.render(width),
            FileEntry::Link(l) => l.render(width),
        }
    }
}

/// A directory and its non-excluded children, in scan order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dir {
    name: String,
    path: PathBuf,
    kind: EntryKind,
    files: Vec<FileEntry>,
    dirs: Vec<Dir>,
}

impl Dir {
    pub fn new(
        name: String,
        path: PathBuf,
        kind: EntryKind,
        files: Vec<FileEntry>,
        dirs: Vec<Dir>,
    ) -> Self {
        Self {
            name,
            path,
            kind,
            files,
            dirs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Files and links directly inside this directory.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Subdirectories directly inside this directory.
    pub fn dirs(&self) -> &[Dir] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// The header line printed above the nested block.
    pub fn render(&self) -> String {
        format!("{}:", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, data: &[u8]) -> File {
        File::from_bytes(name.to_string(), PathBuf::from(name), EntryKind::Plain, data)
    }

    #[test]
    fn test_count_lines_trailing_newline() {
        // "a\nb\n" splits into "a", "b", ""
        assert_eq!(count_lines(b"a\nb\n"), (2, 1));
    }

    #[test]
    fn test_count_lines_empty_file() {
        assert_eq!(count_lines(b""), (0, 1));
    }

    #[test]
    fn test_count_lines_whitespace_only_is_blank() {
        assert_eq!(count_lines(b"  \t\r\nx\r\n   "), (1, 2));
    }

    #[test]
    fn test_count_lines_non_utf8() {
        assert_eq!(count_lines(&[0xff, 0xfe, b'\n', b' ']), (1, 1));
    }

    #[test]
    fn test_file_render_known_size() {
        // 3 valid lines and 2 blank lines padded to exactly 1024 bytes
        let mut data = Vec::new();
        data.extend_from_slice(b"one\n\ntwo\n\n");
        let tail = 1024 - data.len();
        data.extend(std::iter::repeat_n(b'x', tail));
        assert_eq!(data.len(), 1024);

        let f = file("data.txt", &data);
        assert_eq!(f.valid_lines(), 3);
        assert_eq!(f.blank_lines(), 2);
        assert_eq!(f.size_kb(), 1.0);
        assert_eq!(
            f.render(10),
            "data.txt  :  1.0 KB,    3 valid lines,    2 blank lines"
        );
    }

    #[test]
    fn test_link_render() {
        let link = Link {
            name: "l".to_string(),
            path: PathBuf::from("l"),
            real_path: PathBuf::from("/tmp/target"),
        };
        assert_eq!(link.render(3), "l  : link to /tmp/target");
    }

    #[test]
    fn test_file_entry_as_file() {
        let entry = FileEntry::File(file("a", b"x"));
        assert!(entry.as_file().is_some());
        assert!(!entry.is_link());

        let link = FileEntry::Link(Link {
            name: "b".to_string(),
            path: PathBuf::from("b"),
            real_path: PathBuf::from("/b"),
        });
        assert!(link.as_file().is_none());
        assert!(link.is_link());
        assert_eq!(link.name(), "b");
    }

    #[test]
    fn test_read_missing_file_is_read_error() {
        let err = File::read(
            Path::new("/nonexistent/file.txt"),
            "file.txt".to_string(),
            PathBuf::from("file.txt"),
            EntryKind::Plain,
        )
        .unwrap_err();
        assert_eq!(err.kind(), "ReadError");
    }

    #[test]
    fn test_dir_render() {
        let d = Dir::new(
            "src".to_string(),
            PathBuf::from("src"),
            EntryKind::Plain,
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(d.render(), "src:");
        assert!(d.is_empty());
    }
}
