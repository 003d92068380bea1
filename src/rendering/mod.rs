//! Output rendering: from filesystem entries to tree text.
//!
//! - tree: the connector-drawn tree renderer (the heart of dirmap)
//! - colors: ANSI styling for terminal display, opt-in and stdout-only
//!
//! The plain rendering is the contract: written reports are always plain,
//! and color never changes line structure, only entry names.

mod colors;
mod tree;

pub use colors::Colorizer;
pub use tree::TreeRenderer;
