//! Data collection: walk a tree and tally matched files.
//!
//! This module handles the counting side of the crate:
//!
//! - **Lines**: count the lines of a single file or reader
//! - **Statistics**: the `Tally` accumulator and per-file records
//! - **Walking**: depth-first traversal that ties filtering and counting together
//!
//! ## Example
//!
//! ```rust,ignore
//! use srcloclib::data::walk_tree;
//! use srcloclib::WalkOptions;
//!
//! let result = walk_tree(".", &WalkOptions::new())?;
//! println!("{}", result.total.summary());
//! ```

pub mod lines;
pub mod stats;
pub mod walker;

pub use lines::{count_lines, count_lines_in, count_lines_str};
pub use stats::{FileTally, SkippedEntry, Tally, WalkResult};
pub use walker::{walk_tree, walk_tree_with};
