//! Subtree totals: file count, size and line counts
//!
//! Only `File` entries contribute; links carry no metrics. Sizes are summed
//! as whole bytes and converted to kibibytes at the end, so the result does
//! not depend on traversal order.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::entity::{Dir, File};

/// Totals over a directory subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub files: usize,
    pub size_bytes: u64,
    pub valid_lines: usize,
    pub blank_lines: usize,
}

impl Totals {
    /// Totals for a single file.
    pub fn of_file(file: &File) -> Self {
        Self {
            files: 1,
            size_bytes: file.size_bytes(),
            valid_lines: file.valid_lines(),
            blank_lines: file.blank_lines(),
        }
    }

    /// Total size in kibibytes.
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }

    /// (file_count, size_kb, valid_lines, blank_lines)
    pub fn as_tuple(&self) -> (usize, f64, usize, usize) {
        (self.files, self.size_kb(), self.valid_lines, self.blank_lines)
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals {
            files: self.files + other.files,
            size_bytes: self.size_bytes + other.size_bytes,
            valid_lines: self.valid_lines + other.valid_lines,
            blank_lines: self.blank_lines + other.blank_lines,
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, other: Totals) {
        *self = *self + other;
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Totals {
        iter.fold(Totals::default(), Add::add)
    }
}

/// The summary line printed under the tree.
impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files, {:.1} KB, {} valid lines, {} blank lines",
            self.files,
            self.size_kb(),
            self.valid_lines,
            self.blank_lines
        )
    }
}

/// Reduce a directory to its subtree totals.
pub fn aggregate(dir: &Dir) -> Totals {
    let own: Totals = dir
        .files()
        .iter()
        .filter_map(|entry| entry.as_file())
        .map(Totals::of_file)
        .sum();
    own + dir.dirs().iter().map(aggregate).sum::<Totals>()
}
