//! Core types for dirmap.
//!
//! The model is deliberately thin: the filesystem owns the hierarchy, the
//! renderer only reads it. An [`Entry`] is one directory child as the
//! renderer sees it: a display name, the real path for descending, and a
//! kind classified *without* following symlinks so that link cycles can
//! never pull the traversal under.

use std::fs;
use std::io;
use std::path::PathBuf;

/// What a directory child is, classified without following symlinks.
///
/// Only [`EntryKind::Dir`] is ever descended into. A symlink that points at
/// a directory still renders as a single entry; its target's contents are
/// never visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file (or anything that is neither directory nor symlink).
    File,
    /// Real directory, the only kind the renderer recurses into.
    Dir,
    /// Symbolic link, regardless of what it points at.
    Symlink,
}

impl EntryKind {
    /// Classify a `FileType` as obtained from `DirEntry::file_type`,
    /// which does not follow symlinks.
    pub fn of(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        }
    }

    /// Whether the renderer descends into this entry.
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Dir)
    }

    pub fn is_symlink(self) -> bool {
        matches!(self, EntryKind::Symlink)
    }
}

/// One directory child: display name, real path, kind.
///
/// `name` is the lossy UTF-8 rendering of the file name; it is what appears
/// in the tree and serves as the sort key. `path` keeps the real `OsStr`
/// bytes so traversal still works for names that are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Absolute or root-relative path, used to descend into directories.
    pub path: PathBuf,
    /// Display name; also the deterministic sort key.
    pub name: String,
    /// Classification, symlinks not followed.
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            kind,
        }
    }

    /// Build an entry from a raw `read_dir` item.
    ///
    /// Fails only if the file type cannot be read; the caller decides how to
    /// surface that (dirmap aborts the report rather than guessing a kind).
    pub fn from_dir_entry(entry: &fs::DirEntry) -> io::Result<Self> {
        let file_type = entry.file_type()?;
        Ok(Self {
            path: entry.path(),
            name: entry.file_name().to_string_lossy().into_owned(),
            kind: EntryKind::of(file_type),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_kind_helpers() {
        assert!(EntryKind::Dir.is_dir());
        assert!(!EntryKind::File.is_dir());
        assert!(!EntryKind::Symlink.is_dir());
        assert!(EntryKind::Symlink.is_symlink());
        assert!(!EntryKind::Dir.is_symlink());
    }

    #[test]
    fn test_classification_from_read_dir() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::create_dir(tmp.path().join("sub"))?;
        fs::write(tmp.path().join("plain.txt"), "x")?;
        #[cfg(unix)]
        std::os::unix::fs::symlink(tmp.path().join("sub"), tmp.path().join("link"))?;

        for item in fs::read_dir(tmp.path())? {
            let entry = Entry::from_dir_entry(&item?)?;
            match entry.name.as_str() {
                "sub" => assert_eq!(entry.kind, EntryKind::Dir),
                "plain.txt" => assert_eq!(entry.kind, EntryKind::File),
                // Symlink-to-directory must classify as Symlink, not Dir:
                // the renderer keys recursion off this.
                "link" => assert_eq!(entry.kind, EntryKind::Symlink),
                other => panic!("unexpected entry {}", other),
            }
        }

        Ok(())
    }

    #[test]
    fn test_entry_keeps_real_path() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub)?;

        let item = fs::read_dir(tmp.path())?.next().expect("one entry")?;
        let entry = Entry::from_dir_entry(&item)?;

        assert_eq!(entry.path, sub);
        assert_eq!(entry.name, "sub");
        Ok(())
    }
}
