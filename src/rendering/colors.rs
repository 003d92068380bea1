//! ANSI color utilities for terminal tree display.
//!
//! Color scheme follows the usual `ls` conventions so trees read at a
//! glance:
//! - Directories: bold bright blue (the things you can descend into)
//! - Symlinks: cyan (present but never expanded)
//! - Files: default terminal color
//!
//! Connectors and prefixes are never styled; only the entry name is. The
//! rendered line structure stays byte-identical to the plain form apart
//! from the escape codes around names.

use owo_colors::OwoColorize;

use crate::types::EntryKind;

/// Colorize entry names for terminal display.
pub struct Colorizer;

impl Colorizer {
    /// Colorize a directory name (bold bright blue).
    pub fn dir_name(s: &str) -> String {
        s.bright_blue().bold().to_string()
    }

    /// Colorize a symlink name (cyan).
    pub fn symlink_name(s: &str) -> String {
        s.cyan().to_string()
    }

    /// Files keep the terminal's default color.
    pub fn file_name(s: &str) -> String {
        s.to_string()
    }

    /// Style a name according to its entry kind.
    pub fn entry_name(kind: EntryKind, name: &str) -> String {
        match kind {
            EntryKind::Dir => Self::dir_name(name),
            EntryKind::Symlink => Self::symlink_name(name),
            EntryKind::File => Self::file_name(name),
        }
    }
}
