//! Error types for srcloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while walking a tree and counting lines
#[derive(Error, Debug)]
pub enum SrclocError {
    /// Root path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Failed to open or read a matched file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to list a directory or resolve an entry
    #[error("failed to read entry '{path}': {source}")]
    EntryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A followed symlink points back at one of its ancestors
    #[error("symlink loop at '{path}' (points to ancestor '{ancestor}')")]
    SymlinkLoop { path: PathBuf, ancestor: PathBuf },

    /// Descent went deeper than the configured guard
    #[error("directory '{path}' is deeper than the maximum depth of {max_depth}")]
    DepthExceeded { path: PathBuf, max_depth: usize },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },
}

impl SrclocError {
    /// Path the error refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::PathNotFound(path)
            | Self::NotADirectory(path)
            | Self::FileRead { path, .. }
            | Self::EntryRead { path, .. }
            | Self::SymlinkLoop { path, .. }
            | Self::DepthExceeded { path, .. } => Some(path),
            Self::InvalidGlob { .. } => None,
        }
    }
}

impl From<walkdir::Error> for SrclocError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();

        if let Some(ancestor) = err.loop_ancestor() {
            return Self::SymlinkLoop {
                path,
                ancestor: ancestor.to_path_buf(),
            };
        }

        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
        Self::EntryRead { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = SrclocError::FileRead {
            path: PathBuf::from("./a.cs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("./a.cs"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_path_accessor() {
        let err = SrclocError::DepthExceeded {
            path: PathBuf::from("deep"),
            max_depth: 3,
        };
        assert_eq!(err.path(), Some(std::path::Path::new("deep")));

        let err = SrclocError::InvalidGlob {
            pattern: "[".to_string(),
            message: "bad".to_string(),
        };
        assert!(err.path().is_none());
    }
}
