//! Input options for walking a tree.
//!
//! This module contains the configuration types that control how the walker
//! traverses directories and what it does when something goes wrong.

use crate::source::FilterConfig;

/// Default bound on directory nesting below the root.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What to do when an entry cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the walk and return the first error
    #[default]
    Fail,
    /// Log the failure, record it in the result, and keep walking
    Skip,
}

/// Options for walking a tree.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Which files count and which paths are skipped
    pub filter: FilterConfig,
    /// Behaviour on unreadable entries
    pub on_error: ErrorPolicy,
    /// Maximum directory nesting below the root
    pub max_depth: usize,
    /// Follow symbolic links instead of skipping them
    pub follow_links: bool,
    /// Visit siblings in file-name order
    pub sorted: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            filter: FilterConfig::new(),
            on_error: ErrorPolicy::Fail,
            max_depth: DEFAULT_MAX_DEPTH,
            follow_links: false,
            sorted: false,
        }
    }
}

impl WalkOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Set error policy.
    pub fn on_error(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    /// Set the depth guard.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Follow symbolic links.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Visit siblings in file-name order.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}
