//! Core data structures for walk results.
//!
//! The accumulator is a plain pair of counters. Sub-results combine by
//! summation, so a directory's tally is the sum of its files and of its
//! subdirectories' tallies.

use serde::{Deserialize, Serialize, Serializer};
use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

/// Serialize a path as a string, replacing bytes that are not UTF-8.
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Matched-file count and total line count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Number of matched files
    pub files: u64,
    /// Total lines across matched files
    pub lines: u64,
}

impl Tally {
    /// Create a new Tally with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally for a single file with `lines` lines.
    pub fn single(lines: u64) -> Self {
        Self { files: 1, lines }
    }

    /// Summary line in the form `"<lines> lines in <files> classes"`.
    pub fn summary(&self) -> String {
        format!("{} lines in {} classes", self.lines, self.files)
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            files: self.files + other.files,
            lines: self.lines + other.lines,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.lines += other.lines;
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, t| acc + t)
    }
}

/// A matched file and its line count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTally {
    /// Path as built by joining the root with entry names
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Nesting level below the root (files directly in the root are 0)
    pub depth: usize,
    /// Number of lines in the file
    pub lines: u64,
}

impl FileTally {
    /// Indentation for trace output: one space per nesting level.
    pub fn indent(&self) -> String {
        " ".repeat(self.depth)
    }

    /// Trace line in the form `<indent><path>`.
    pub fn trace_line(&self) -> String {
        format!("{}{}", self.indent(), self.path.display())
    }
}

/// An entry abandoned under [`ErrorPolicy::Skip`](crate::options::ErrorPolicy::Skip).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    /// Entry that could not be processed
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Human-readable reason
    pub reason: String,
}

/// Result of walking a tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkResult {
    /// Root the walk started from
    #[serde(serialize_with = "serialize_path_lossy")]
    pub root: PathBuf,
    /// Totals over the whole tree
    pub total: Tally,
    /// Matched files in traversal order
    pub files: Vec<FileTally>,
    /// Entries skipped because of errors
    pub skipped: Vec<SkippedEntry>,
}

impl WalkResult {
    /// Create an empty result for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Record a matched file.
    pub fn push_file(&mut self, file: FileTally) {
        self.total += Tally::single(file.lines);
        self.files.push(file);
    }

    /// Record a skipped entry.
    pub fn push_skipped(&mut self, path: impl Into<PathBuf>, reason: impl Into<String>) {
        self.skipped.push(SkippedEntry {
            path: path.into(),
            reason: reason.into(),
        });
    }
}
