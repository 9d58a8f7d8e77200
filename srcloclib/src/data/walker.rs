//! The tree walker: depth-first traversal, filtering, and tallying.
//!
//! Traversal is pre-order. A directory's contents are visited as soon as the
//! directory is encountered, before its remaining siblings. Excluded
//! directories are pruned without being read. Entries that are neither regular
//! files nor directories are ignored, which includes symlinks unless
//! [`WalkOptions::follow_links`] is set.
//!
//! Walking is iterative, so deep trees cannot exhaust the call stack. Nesting
//! is still bounded by [`WalkOptions::max_depth`], and when links are followed
//! a link back to an ancestor is reported as [`SrclocError::SymlinkLoop`].

use std::path::Path;

use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::error::SrclocError;
use crate::options::{ErrorPolicy, WalkOptions};
use crate::Result;

use super::lines::count_lines;
use super::stats::{FileTally, WalkResult};

/// Walk `root` and tally every matched file.
///
/// # Example
///
/// ```rust
/// use srcloclib::{walk_tree, WalkOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.cs"), "class A\n{\n}\n").unwrap();
/// fs::write(dir.path().join("b.txt"), "ignored\n").unwrap();
///
/// let result = walk_tree(dir.path(), &WalkOptions::new()).unwrap();
/// assert_eq!(result.total.files, 1);
/// assert_eq!(result.total.lines, 3);
/// assert_eq!(result.total.summary(), "3 lines in 1 classes");
/// ```
pub fn walk_tree(root: impl AsRef<Path>, options: &WalkOptions) -> Result<WalkResult> {
    walk_tree_with(root, options, |_| {})
}

/// Walk `root`, calling `on_file` for each matched file as soon as it has
/// been counted.
///
/// Calls happen in traversal order, so the callback sees exactly the files
/// that end up in [`WalkResult::files`], in the same order.
pub fn walk_tree_with<F>(
    root: impl AsRef<Path>,
    options: &WalkOptions,
    mut on_file: F,
) -> Result<WalkResult>
where
    F: FnMut(&FileTally),
{
    let root = root.as_ref();

    if !root.exists() {
        return Err(SrclocError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(SrclocError::NotADirectory(root.to_path_buf()));
    }

    let filter = &options.filter;
    let mut result = WalkResult::new(root);

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(options.follow_links);
    if options.sorted {
        walker = walker.sort_by_file_name();
    }

    debug!(root = %root.display(), "walking tree");

    // The root itself is never yielded, so it is walked even when excluded
    let mut entries = walker
        .into_iter()
        .filter_entry(|e| !e.file_type().is_dir() || filter.allows_dir(e.path()));

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                handle_error(options.on_error, &mut result, SrclocError::from(err))?;
                continue;
            }
        };

        let path = entry.path();
        let file_type = entry.file_type();

        if file_type.is_dir() {
            if entry.depth() > options.max_depth {
                entries.skip_current_dir();
                let err = SrclocError::DepthExceeded {
                    path: path.to_path_buf(),
                    max_depth: options.max_depth,
                };
                handle_error(options.on_error, &mut result, err)?;
                continue;
            }
            debug!(dir = %path.display(), "entering directory");
        } else if file_type.is_file() {
            if !filter.matches_file(path) {
                trace!(file = %path.display(), "not matched");
                continue;
            }

            match count_lines(path) {
                Ok(lines) => {
                    let file = FileTally {
                        path: path.to_path_buf(),
                        depth: entry.depth() - 1,
                        lines,
                    };
                    trace!(file = %path.display(), lines, "counted");
                    on_file(&file);
                    result.push_file(file);
                }
                Err(err) => handle_error(options.on_error, &mut result, err)?,
            }
        } else {
            trace!(entry = %path.display(), "neither file nor directory");
        }
    }

    debug!(
        files = result.total.files,
        lines = result.total.lines,
        skipped = result.skipped.len(),
        "walk finished"
    );

    Ok(result)
}

/// Apply the error policy: propagate, or record and carry on.
fn handle_error(policy: ErrorPolicy, result: &mut WalkResult, err: SrclocError) -> Result<()> {
    match policy {
        ErrorPolicy::Fail => Err(err),
        ErrorPolicy::Skip => {
            let path = err.path().map(Path::to_path_buf).unwrap_or_default();
            warn!(path = %path.display(), error = %err, "skipping entry");
            result.push_skipped(path, err.to_string());
            Ok(())
        }
    }
}
