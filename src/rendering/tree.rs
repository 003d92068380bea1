//! The tree renderer: recursive descent producing connector-drawn lines.
//!
//! One line per visible entry:
//!
//! ```text
//! ├── src
//! │   ├── lib.rs
//! │   └── main.rs
//! └── Cargo.toml
//! ```
//!
//! Key properties:
//! - Deterministic: children render in sorted name order, so a fixed
//!   snapshot always produces the same lines
//! - Bounded: the depth budget strictly decreases per descent; negative
//!   budget renders nothing
//! - Honest: a refused filesystem access aborts the whole render (never a
//!   partial tree); a non-directory root is a quiet empty result
//! - Read-only: directory listings and type checks, nothing else

use std::fs;
use std::path::Path;

use crate::config::IgnoreSet;
use crate::discovery::list_children;
use crate::error::AccessError;
use crate::rendering::Colorizer;

/// Connector for every child except the last in sort order.
const TEE: &str = "├── ";
/// Connector for the last child in sort order.
const ELBOW: &str = "└── ";
/// Prefix continuation under a non-last directory (the branch goes on).
const PIPE: &str = "│   ";
/// Prefix continuation under a last directory (the branch has ended).
const BLANK: &str = "    ";

/// Renders a directory hierarchy as indented, connector-drawn text lines.
///
/// Construction chooses the ignore-set and whether entry names are styled
/// for terminal display; [`TreeRenderer::render`] is then a pure read of
/// the filesystem.
pub struct TreeRenderer {
    ignores: IgnoreSet,
    color: bool,
}

impl TreeRenderer {
    /// Create a renderer filtering against the given ignore-set.
    pub fn new(ignores: IgnoreSet) -> Self {
        Self {
            ignores,
            color: false,
        }
    }

    /// Enable ANSI styling of entry names (terminal display only; written
    /// reports stay plain).
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render the tree under `root`, up to `max_depth` levels of descent.
    ///
    /// Returns one string per visible entry, top to bottom, without
    /// trailing newlines. Two base cases produce an empty vec and no error:
    /// a negative `max_depth`, and a `root` that exists but is not a
    /// directory. A missing `root`, or any directory in the descent that
    /// cannot be listed, is an [`AccessError`] carrying the offending path.
    pub fn render(&self, root: &Path, max_depth: i64) -> Result<Vec<String>, AccessError> {
        let mut lines = Vec::new();
        self.render_into(root, max_depth, "", &mut lines)?;
        Ok(lines)
    }

    /// One level of descent: list, filter, sort, emit, recurse.
    fn render_into(
        &self,
        dir: &Path,
        depth: i64,
        prefix: &str,
        lines: &mut Vec<String>,
    ) -> Result<(), AccessError> {
        if depth < 0 || !probe_directory(dir)? {
            return Ok(());
        }

        let children = list_children(dir, &self.ignores)?;
        let last = children.len().saturating_sub(1);

        for (i, child) in children.iter().enumerate() {
            let is_last = i == last;
            let connector = if is_last { ELBOW } else { TEE };

            let name = if self.color {
                Colorizer::entry_name(child.kind, &child.name)
            } else {
                child.name.clone()
            };
            lines.push(format!("{}{}{}", prefix, connector, name));

            // Only real directories are descended into; symlinks render as
            // leaves so link cycles can never recurse unboundedly.
            if child.kind.is_dir() {
                let extension = if is_last { BLANK } else { PIPE };
                let child_prefix = format!("{}{}", prefix, extension);
                self.render_into(&child.path, depth - 1, &child_prefix, lines)?;
            }
        }

        Ok(())
    }
}

impl Default for TreeRenderer {
    /// Plain renderer over the default ignore-set.
    fn default() -> Self {
        Self::new(IgnoreSet::default())
    }
}

/// Is `path` a directory we should descend into?
///
/// `Ok(false)` for anything that exists but is not a directory (the quiet
/// base case); `Err` when the path cannot be inspected at all.
fn probe_directory(path: &Path) -> Result<bool, AccessError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_dir()),
        Err(e) => Err(AccessError::new(path, e)),
    }
}
