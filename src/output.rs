//! Report assembly and emission.
//!
//! A report is a small, stable text document:
//!
//! ```text
//! # Folder structure for /abs/path/to/root
//!
//! ├── src
//! │   └── main.rs
//! └── Cargo.toml
//! ```
//!
//! The same bytes go to a file or to stdout; the destination never
//! changes the content, so piped output and written output are
//! interchangeable.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Assemble the report document for `root` from rendered tree lines.
///
/// The header names the root and a blank line separates it from the tree;
/// every line, the report's last included, ends in a newline. An empty
/// tree still gets its header and blank line, so a report is never the
/// empty string.
pub fn format_report(root: &Path, lines: &[String]) -> String {
    let mut report = format!("# Folder structure for {}\n\n", root.display());
    for line in lines {
        report.push_str(line);
        report.push('\n');
    }
    report
}

/// Deliver a report to its destination.
///
/// With `Some(path)` the report is written as UTF-8, creating missing
/// parent directories and replacing any existing file, then a
/// confirmation goes to stderr. With `None` the report goes to stdout
/// byte-for-byte.
pub fn write_report(report: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory {}", parent.display())
                    })?;
                }
            }
            fs::write(path, report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!("✓ Folder structure written to {}", path.display());
        }
        None => {
            emit_to(io::stdout().lock(), report).context("Failed to write report to stdout")?;
        }
    }
    Ok(())
}

/// Write the report bytes to any sink, unmodified.
fn emit_to(mut sink: impl Write, report: &str) -> io::Result<()> {
    sink.write_all(report.as_bytes())?;
    sink.flush()
}
