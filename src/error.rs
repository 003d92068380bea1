//! Error taxonomy for dirmap.
//!
//! There is exactly one failure class in the traversal contract: the
//! filesystem refused an access the renderer needed. Everything else that
//! stops a descent (a root that exists but is not a directory, an exhausted
//! depth budget) is a normal empty-output base case, not an error.

use std::io;
use std::path::{Path, PathBuf};

/// A filesystem access the renderer needed was refused.
///
/// Raised when the root does not exist or a directory cannot be listed.
/// Carries the offending path so the failure is reported once, with context,
/// at the CLI boundary. The first such error aborts the whole report; a
/// partial tree is never emitted.
#[derive(Debug, thiserror::Error)]
#[error("cannot access {}: {}", .path.display(), .source)]
pub struct AccessError {
    /// The path the filesystem refused.
    pub path: PathBuf,
    /// The underlying I/O failure.
    #[source]
    pub source: io::Error,
}

impl AccessError {
    /// Wrap an I/O failure with the path it occurred on.
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The I/O error kind underneath (useful for matching in callers/tests).
    pub fn io_kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

impl AsRef<Path> for AccessError {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_path() {
        let err = AccessError::new(
            "/tmp/does-not-exist",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );

        let rendered = err.to_string();
        assert!(rendered.contains("/tmp/does-not-exist"));
        assert!(rendered.starts_with("cannot access"));
    }

    #[test]
    fn test_io_kind_is_preserved() {
        let err = AccessError::new(
            "/denied",
            io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        );

        assert_eq!(err.io_kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_converts_into_anyhow() {
        // The CLI boundary propagates these through anyhow::Result.
        fn fails() -> anyhow::Result<()> {
            Err(AccessError::new(
                "/gone",
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            ))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(err.to_string().contains("/gone"));
        assert!(err.downcast_ref::<AccessError>().is_some());
    }
}
