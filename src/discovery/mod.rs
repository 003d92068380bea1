//! Filesystem discovery, one directory level at a time.
//!
//! The renderer descends directory by directory; discovery owns the
//! list/classify/filter/sort step and keeps it deterministic. Sorting by
//! display name means the same snapshot always yields the same tree.

mod entries;

pub use entries::list_children;
