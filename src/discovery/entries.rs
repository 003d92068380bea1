//! Single-directory listing with ignore-set filtering.
//!
//! This is the filesystem-facing half of the tree renderer:
//! - Lists immediate children only (the renderer drives the recursion)
//! - Drops any entry whose name is in the ignore-set, file or directory
//!   alike, before touching its metadata
//! - Classifies kinds without following symlinks
//! - Returns deterministic (sorted) results
//!
//! Ordering is plain `str` comparison on the display name: a total,
//! locale-independent order (UTF-8 byte order equals code-point order), so
//! the same snapshot renders identically on every machine.

use std::fs;
use std::path::Path;

use crate::config::IgnoreSet;
use crate::error::AccessError;
use crate::types::Entry;

/// List the immediate children of `dir`, excluding ignore-set matches,
/// sorted by display name ascending.
///
/// ## Errors
///
/// Any refusal while listing (directory missing, unreadable, or an entry
/// whose type cannot be determined) returns [`AccessError`] naming
/// the path involved. Callers abort on it; a partially listed directory is
/// never returned.
pub fn list_children(dir: &Path, ignores: &IgnoreSet) -> Result<Vec<Entry>, AccessError> {
    let read_dir = fs::read_dir(dir).map_err(|e| AccessError::new(dir, e))?;

    let mut entries = Vec::new();
    for item in read_dir {
        let item = item.map_err(|e| AccessError::new(dir, e))?;

        // Filter on the name first: ignored entries are skipped without
        // ever reading their metadata, so an unreadable node_modules
        // cannot fail a listing it was excluded from anyway.
        let name = item.file_name();
        if ignores.contains(&name.to_string_lossy()) {
            continue;
        }

        let entry = Entry::from_dir_entry(&item).map_err(|e| AccessError::new(item.path(), e))?;
        entries.push(entry);
    }

    // Sort for reproducibility: the tree contract is deterministic output
    // for a fixed snapshot, and read_dir order is filesystem-dependent.
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(entries)
}
