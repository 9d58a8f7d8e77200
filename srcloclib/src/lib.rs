//! # srcloclib
//!
//! Walk a directory tree, pick out source files by extension, and tally how
//! many there are and how many lines they hold.
//!
//! ## Overview
//!
//! The walk is a single depth-first, pre-order pass:
//!
//! - **Directories** are descended immediately unless their path contains an
//!   excluded substring (`.svn` by default) or matches an excluded glob
//! - **Files** count when their extension is in the allow-list
//!   (`cs`, `fx`, `fxh` by default) and their path is not excluded
//! - **Everything else** (symlinks unless followed, sockets, devices) is ignored
//!
//! Results are plain data: a [`Tally`] of files and lines plus the list of
//! matched files in traversal order. Nothing is printed; callers that want a
//! live trace pass a callback to [`walk_tree_with`].
//!
//! ## Example
//!
//! ```rust
//! use srcloclib::{walk_tree, walk_tree_with, ErrorPolicy, FilterConfig, WalkOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("sub")).unwrap();
//! fs::create_dir(dir.path().join(".svn")).unwrap();
//! fs::write(dir.path().join("a.cs"), "a\nb\nc\n").unwrap();
//! fs::write(dir.path().join("sub/c.fx"), "x\ny\n").unwrap();
//! fs::write(dir.path().join(".svn/d.cs"), "ignored\n").unwrap();
//!
//! let result = walk_tree(dir.path(), &WalkOptions::new()).unwrap();
//! assert_eq!(result.total.summary(), "5 lines in 2 classes");
//!
//! // Print a trace while walking, skipping unreadable entries
//! let options = WalkOptions::new().on_error(ErrorPolicy::Skip);
//! walk_tree_with(dir.path(), &options, |f| println!("{}", f.trace_line())).unwrap();
//!
//! // Count other languages
//! let filter = FilterConfig::new().extensions(["rs"]).excludes([".git", "target"]);
//! let result = walk_tree(dir.path(), &WalkOptions::new().filter(filter)).unwrap();
//! assert_eq!(result.total.files, 0);
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod source;

pub use data::{
    count_lines, count_lines_in, count_lines_str, walk_tree, walk_tree_with, FileTally,
    SkippedEntry, Tally, WalkResult,
};
pub use error::SrclocError;
pub use options::{ErrorPolicy, WalkOptions, DEFAULT_MAX_DEPTH};
pub use source::{extension_of, FilterConfig, DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS};

/// Result type for srcloclib operations
pub type Result<T> = std::result::Result<T, SrclocError>;
