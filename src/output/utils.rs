//! Branch-art helpers shared by the formatters

/// Glyph for every sibling except the last.
pub const BRANCH: &str = "├─";
/// Glyph for the last sibling at a level.
pub const BRANCH_LAST: &str = "└─";

/// Prefix for an entry line at the current level.
pub fn branch_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BRANCH_LAST)
    } else {
        format!("{}{}", prefix, BRANCH)
    }
}

/// Prefix handed down to the children of a nested directory.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}   ", prefix)
    } else {
        format!("{}│  ", prefix)
    }
}

/// Width of the name column: the longest name, counted in characters.
pub fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0)
}
