//! dirmap CLI - Clean, deterministic folder-structure trees
//!
//! This is the command-line entry point for dirmap. It orchestrates the
//! full pipeline:
//!
//! 1. Resolve Root: Turn the user's path into an absolute one
//! 2. Load Config: Nearest dirmap.toml adjusts the ignore-set
//! 3. Render Tree: Sorted, filtered, depth-bounded descent
//! 4. Emit Report: File (with confirmation) or stdout
//!
//! Design philosophy:
//! - Same snapshot, same bytes (deterministic by construction)
//! - Fail fast with clear error messages, never a partial tree
//! - Status goes to stderr, the report owns stdout
//! - Make defaults sane (--path=., --depth=5)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Clean, deterministic folder-structure trees
///
/// dirmap renders a directory hierarchy as a connector-drawn text tree
/// wrapped in a small markdown report. Noise directories (.git, caches,
/// build output) are filtered out and children render in sorted order,
/// so the same tree always yields the same bytes.
///
/// Examples:
///   dirmap                                # Tree of the current directory
///   dirmap --path ../api --depth 2        # Shallow map of a sibling project
///   dirmap --output docs/structure.md     # Write the report to a file
///   dirmap --depth 0                      # Top-level entries only
#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Root directory to render
    ///
    /// The report header shows the resolved absolute path. A root that
    /// exists but is not a directory yields an empty tree; a root that
    /// cannot be accessed at all aborts with an error.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Write the report to this file instead of stdout
    ///
    /// Missing parent directories are created and an existing file is
    /// replaced. Omit this to print the report to stdout for piping.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum depth to descend below the root
    ///
    /// Each directory level spends one unit of budget:
    ///    0  - list the root's entries, expand nothing
    ///    5  - the default, enough for most project layouts
    ///   -1  - render nothing (still a valid, empty report)
    #[arg(long, default_value_t = 5, allow_hyphen_values = true)]
    pub depth: i64,

    /// Colorize entry names on stdout
    ///
    /// Directories render bold blue, symlinks cyan. Ignored when writing
    /// to a file so reports stay plain text.
    #[arg(long)]
    pub color: bool,

    /// Verbose output
    ///
    /// Shows progress messages on stderr:
    ///   "📂 Rendering: /path/to/root"
    ///   "✓ Rendered 42 entries"
    ///
    /// Stderr only, so piped reports stay clean.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

/// Execute the full dirmap pipeline
///
/// Resolve the root, load configuration, render the tree, and emit the
/// report to its destination. Any refused filesystem access bubbles up
/// as an error and nothing is emitted.
fn run(cli: &Cli) -> Result<()> {
    use dirmap::config::Config;
    use dirmap::output::{format_report, write_report};
    use dirmap::rendering::TreeRenderer;
    use std::time::Instant;

    let start = Instant::now();

    let root = resolve_path(&cli.path)?;
    let output = cli.output.as_deref().map(resolve_path).transpose()?;
    let config = Config::load(&root);

    if cli.verbose {
        eprintln!("🌳 dirmap v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("📂 Rendering: {}", root.display());
        eprintln!("{}", config.display_summary());
    }

    // Color is terminal-only; written reports stay plain.
    let colored = cli.color && output.is_none();
    let renderer = TreeRenderer::new(config.ignore_set()).with_color(colored);

    let lines = renderer.render(&root, cli.depth)?;

    if cli.verbose {
        eprintln!("✓ Rendered {} entries ({:.2?})", lines.len(), start.elapsed());
    }

    let report = format_report(&root, &lines);
    write_report(&report, output.as_deref())?;

    Ok(())
}

/// Resolve a user-supplied path to an absolute one.
///
/// An existing path is canonicalized (symlinks and `..` resolved by the
/// filesystem). A missing path is still resolved lexically against the
/// current directory, so the error that surfaces later names the absolute
/// path the user meant instead of dying here with a resolution error.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to determine current directory")?
            .join(path)
    };
    Ok(normalize_lexically(&absolute))
}

/// Collapse `.` and `..` components without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_cli_parse_minimal() {
        let cli = Cli::parse_from(&["dirmap"]);
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.depth, 5);
        assert!(cli.output.is_none());
        assert!(!cli.color);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_path_and_output() {
        let cli = Cli::parse_from(&["dirmap", "--path", "/srv/app", "--output", "docs/tree.md"]);
        assert_eq!(cli.path, PathBuf::from("/srv/app"));
        assert_eq!(cli.output, Some(PathBuf::from("docs/tree.md")));
    }

    #[test]
    fn test_cli_parse_depth() {
        let cli = Cli::parse_from(&["dirmap", "--depth", "2"]);
        assert_eq!(cli.depth, 2);
    }

    #[test]
    fn test_cli_parse_negative_depth() {
        let cli = Cli::parse_from(&["dirmap", "--depth", "-1"]);
        assert_eq!(cli.depth, -1);
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from(&["dirmap", "--color", "--verbose"]);
        assert!(cli.color);
        assert!(cli.verbose);
    }

    #[test]
    fn test_resolve_path_canonicalizes_existing() -> Result<()> {
        let tmp = tempfile::tempdir()?;

        let resolved = resolve_path(tmp.path())?;

        assert_eq!(resolved, tmp.path().canonicalize()?);
        assert!(resolved.is_absolute());
        Ok(())
    }

    #[test]
    fn test_resolve_path_keeps_missing_absolute_path() -> Result<()> {
        let resolved = resolve_path(Path::new("/no/such/dir/../place"))?;

        assert_eq!(resolved, PathBuf::from("/no/such/place"));
        Ok(())
    }

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize_lexically(Path::new("/a/b/..")), PathBuf::from("/a"));
    }

    #[test]
    fn test_run_writes_report_file() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let x = tmp.path().join("x");
        fs::create_dir(&x)?;
        fs::write(x.join("y.txt"), "")?;
        fs::write(tmp.path().join("z.txt"), "")?;
        let out = tmp.path().join("out").join("tree.md");

        let cli = Cli {
            path: tmp.path().to_path_buf(),
            output: Some(out.clone()),
            depth: 5,
            color: false,
            verbose: false,
        };
        run(&cli)?;

        let root = tmp.path().canonicalize()?;
        let expected = format!(
            "# Folder structure for {}\n\n├── x\n│   └── y.txt\n└── z.txt\n",
            root.display()
        );
        assert_eq!(fs::read_to_string(&out)?, expected);
        Ok(())
    }

    #[test]
    fn test_run_missing_root_fails_with_path() {
        let cli = Cli {
            path: PathBuf::from("/definitely/not/here"),
            output: None,
            depth: 5,
            color: false,
            verbose: false,
        };

        let err = run(&cli).expect_err("missing root must abort");
        assert!(err.to_string().contains("/definitely/not/here"));
    }

    #[test]
    fn test_run_non_directory_root_is_empty_report() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "")?;
        let out = tmp.path().join("tree.md");

        let cli = Cli {
            path: file.clone(),
            output: Some(out.clone()),
            depth: 5,
            color: false,
            verbose: false,
        };
        run(&cli)?;

        let header = format!(
            "# Folder structure for {}\n\n",
            file.canonicalize()?.display()
        );
        assert_eq!(fs::read_to_string(&out)?, header);
        Ok(())
    }

    #[test]
    fn test_run_color_is_dropped_for_file_output() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::create_dir(tmp.path().join("sub"))?;
        let out = tmp.path().join("tree.md");

        let cli = Cli {
            path: tmp.path().to_path_buf(),
            output: Some(out.clone()),
            depth: 5,
            color: true,
            verbose: false,
        };
        run(&cli)?;

        assert!(!fs::read_to_string(&out)?.contains('\u{1b}'));
        Ok(())
    }
}
