//! dirmap - Clean, deterministic folder-structure trees
//!
//! Renders a directory hierarchy as a connector-drawn text tree wrapped
//! in a small markdown report, ready for project docs, READMEs, or an
//! LLM context window.
//!
//! # Architecture
//!
//! ```text
//! Resolve Root → Load Config → Discover Children → Render Tree → Emit Report
//!      ↓             ↓               ↓                  ↓             ↓
//!   absolute     dirmap.toml      read_dir          connectors     file or
//!    path         walk-up       filter + sort       + prefixes      stdout
//! ```
//!
//! # Guarantees
//!
//! - Deterministic output: lexicographic child order, no timestamps
//! - Bounded descent: a strictly decreasing depth budget, symlinks never
//!   expanded
//! - All-or-nothing: an unreadable directory aborts the report instead of
//!   producing a partial tree
//! - Destination-independent bytes: stdout and `--output` receive the
//!   identical report

pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod rendering;
pub mod types;

// Re-export core types
pub use types::{Entry, EntryKind};

// Re-export the pipeline surface
pub use config::{Config, IgnoreSet, DEFAULT_IGNORES};
pub use discovery::list_children;
pub use error::AccessError;
pub use output::{format_report, write_report};
pub use rendering::{Colorizer, TreeRenderer};
