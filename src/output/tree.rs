//! Tree formatter for a scanned directory
//!
//! This module provides `TreeFormatter` which turns a complete `Dir` tree
//! into display lines, a string, or colored stdout output.

use std::fmt;
use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::entity::{Dir, FileEntry};
use crate::stats::aggregate;

use super::config::OutputConfig;
use super::utils::{branch_prefix, continuation_prefix, name_width};

/// What a display line shows, used to pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    File,
    Link,
    Dir,
}

impl LineStyle {
    fn color_spec(self) -> Option<ColorSpec> {
        match self {
            LineStyle::File => None,
            LineStyle::Link => {
                let mut spec = ColorSpec::new();
                spec.set_fg(Some(Color::Cyan));
                Some(spec)
            }
            LineStyle::Dir => {
                let mut spec = ColorSpec::new();
                spec.set_fg(Some(Color::Blue)).set_bold(true);
                Some(spec)
            }
        }
    }
}

/// One line of the tree: branch art followed by the entity's own text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub branch: String,
    pub text: String,
    pub style: LineStyle,
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.branch, self.text)
    }
}

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Display lines for everything below `dir`. The root itself has no line.
    pub fn lines(&self, dir: &Dir) -> Vec<TreeLine> {
        let mut out = Vec::new();
        self.push_dir_lines(dir, &self.config.root_prefix, &mut out);
        out
    }

    fn push_dir_lines(&self, dir: &Dir, prefix: &str, out: &mut Vec<TreeLine>) {
        let mut remaining = dir.files().len() + dir.dirs().len();
        // Column width is per directory, over files and links only
        let width = name_width(dir.files().iter().map(FileEntry::name));

        for entry in dir.files() {
            let style = if entry.is_link() {
                LineStyle::Link
            } else {
                LineStyle::File
            };
            out.push(TreeLine {
                branch: branch_prefix(prefix, remaining == 1),
                text: entry.render(width),
                style,
            });
            remaining -= 1;
        }

        for sub in dir.dirs() {
            let is_last = remaining == 1;
            out.push(TreeLine {
                branch: branch_prefix(prefix, is_last),
                text: sub.render(),
                style: LineStyle::Dir,
            });
            self.push_dir_lines(sub, &continuation_prefix(prefix, is_last), out);
            remaining -= 1;
        }
    }

    /// The tree followed by the summary line, uncolored.
    pub fn format(&self, dir: &Dir) -> String {
        let mut output = String::new();
        for line in self.lines(dir) {
            output.push_str(&line.to_string());
            output.push('\n');
        }
        output.push_str(&aggregate(dir).to_string());
        output.push('\n');
        output
    }

    pub fn print(&self, dir: &Dir) -> io::Result<()> {
        // Terminal detection already happened when `use_color` was decided
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_to(&mut stdout, dir)
    }

    /// Write the tree and summary to any color-capable writer.
    pub fn write_to<W: WriteColor>(&self, out: &mut W, dir: &Dir) -> io::Result<()> {
        for line in self.lines(dir) {
            write!(out, "{}", line.branch)?;
            match line.style.color_spec() {
                Some(spec) => {
                    out.set_color(&spec)?;
                    write!(out, "{}", line.text)?;
                    out.reset()?;
                }
                None => write!(out, "{}", line.text)?,
            }
            writeln!(out)?;
        }

        let mut bold = ColorSpec::new();
        bold.set_bold(true);
        out.set_color(&bold)?;
        write!(out, "{}", aggregate(dir))?;
        out.reset()?;
        writeln!(out)?;
        out.flush()
    }

    /// Render into a plain byte buffer, discarding color codes.
    pub fn render_plain(&self, dir: &Dir) -> io::Result<String> {
        let mut buf = NoColor::new(Vec::new());
        self.write_to(&mut buf, dir)?;
        Ok(String::from_utf8_lossy(&buf.into_inner()).into_owned())
    }
}
