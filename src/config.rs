//! Ignore-set configuration, optionally loaded from `dirmap.toml`.
//!
//! Out of the box the ignore-set is a fixed list of noise folders; a
//! project can tune it with a `dirmap.toml` next to (or above) the render
//! root:
//!
//! ```toml
//! ignore = ["target", "out"]            # replaces the defaults entirely
//! ```
//!
//! ```toml
//! extend-ignore = ["target", ".cache"]  # keeps the defaults, adds more
//! ```
//!
//! Matching is whole-name equality: `dist` excludes an entry literally
//! named `dist`, nothing else. No glob or gitignore syntax, so the output
//! never depends on matcher details.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Names excluded from traversal and rendering by default.
///
/// These never appear in a tree and their contents are never visited.
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    "dist",
    "coverage",
    ".nx",
    ".angular",
    ".git",
    ".idea",
    ".vscode",
    "__pycache__",
    "venv",
];

/// Resolved ignore-set: whole-name matching, no pattern syntax.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    /// Build a set from any collection of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether an entry with this exact name is excluded.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for IgnoreSet {
    /// The fixed default set.
    fn default() -> Self {
        Self::from_names(DEFAULT_IGNORES.iter().copied())
    }
}

/// dirmap configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source file for this config (for display).
    pub source: Option<PathBuf>,

    /// Names to ignore. Replaces the defaults if non-empty.
    pub ignore: Vec<String>,

    /// Additional names to ignore (extends the defaults).
    pub extend_ignore: Vec<String>,
}

/// Raw config as deserialized from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
    ignore: Option<Vec<String>>,
    extend_ignore: Option<Vec<String>>,
}

impl Config {
    /// Load configuration for the given render root.
    ///
    /// Search order:
    /// 1. dirmap.toml in the root itself
    /// 2. dirmap.toml in the nearest ancestor (so rendering a subdirectory
    ///    of a configured project picks up the project's settings)
    /// 3. Default config if nothing found
    pub fn load(directory: &Path) -> Self {
        let local = directory.join("dirmap.toml");
        if local.exists() {
            if let Some(config) = Self::load_file(&local) {
                return config;
            }
        }

        let mut current = directory.to_path_buf();
        while let Some(parent) = current.parent() {
            let candidate = parent.join("dirmap.toml");
            if candidate.exists() {
                if let Some(config) = Self::load_file(&candidate) {
                    return config;
                }
            }
            current = parent.to_path_buf();
        }

        Self::default()
    }

    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let raw: RawConfig = toml::from_str(&content).ok()?;
        Some(Self::from_raw(raw, path.to_path_buf()))
    }

    fn from_raw(raw: RawConfig, source: PathBuf) -> Self {
        Self {
            source: Some(source),
            ignore: raw.ignore.unwrap_or_default(),
            extend_ignore: raw.extend_ignore.unwrap_or_default(),
        }
    }

    /// Effective ignore names (custom `ignore`, or defaults + `extend-ignore`).
    pub fn effective_ignores(&self) -> Vec<String> {
        if !self.ignore.is_empty() {
            // Custom ignore replaces the defaults
            self.ignore.clone()
        } else {
            let mut names: Vec<String> = DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect();
            names.extend(self.extend_ignore.clone());
            names
        }
    }

    /// The resolved set the renderer filters against.
    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::from_names(self.effective_ignores())
    }

    /// Format config for verbose display.
    pub fn display_summary(&self) -> String {
        let mut lines = Vec::new();

        if let Some(ref source) = self.source {
            lines.push(format!("   Config: {}", source.display()));
        } else {
            lines.push("   Config: (defaults)".to_string());
        }

        let ignores = self.effective_ignores();
        if !ignores.is_empty() {
            // Show first few, then count
            if ignores.len() <= 3 {
                lines.push(format!("   Ignore: {}", ignores.join(", ")));
            } else {
                lines.push(format!(
                    "   Ignore: {}, ... (+{} more)",
                    ignores[..2].join(", "),
                    ignores.len() - 2
                ));
            }
        }

        lines.join("\n")
    }
}
