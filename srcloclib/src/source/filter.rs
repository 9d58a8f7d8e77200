//! Extension allow-list and path exclusion.
//!
//! A file is a candidate when the suffix after the last `.` of its name is in
//! the allow-list. Any path (file or directory) is rejected when it contains
//! one of the exclusion substrings or matches one of the exclusion globs.

use std::path::Path;

use glob::Pattern;

use crate::error::SrclocError;
use crate::Result;

/// Extensions recognized when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["cs", "fx", "fxh"];

/// Path substrings excluded when none are configured.
pub const DEFAULT_EXCLUDES: &[&str] = &[".svn"];

/// Configuration for file filtering.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Allowed extensions, no leading dot, compared case-sensitively
    pub extensions: Vec<String>,
    /// Any path containing one of these substrings is skipped
    pub exclude: Vec<String>,
    /// Any path matching one of these globs is skipped
    pub exclude_globs: Vec<Pattern>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            exclude_globs: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Create the default filter (`cs`, `fx`, `fxh`, skipping `.svn`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the allow-list.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext: String = ext.into();
                ext.trim_start_matches('.').to_string()
            })
            .collect();
        self
    }

    /// Replace the exclusion substrings.
    pub fn excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = excludes.into_iter().map(Into::into).collect();
        self
    }

    /// Add an exclusion glob.
    pub fn exclude_glob(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| SrclocError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude_globs.push(pat);
        Ok(self)
    }

    /// Add multiple exclusion globs.
    pub fn exclude_globs(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude_glob(pattern)?;
        }
        Ok(self)
    }

    /// Check whether a path is excluded by substring or glob.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        if self
            .exclude
            .iter()
            .any(|needle| path_str.contains(needle.as_str()))
        {
            return true;
        }

        self.exclude_globs
            .iter()
            .any(|pattern| pattern.matches(&path_str))
    }

    /// Check whether the extension of `path` is in the allow-list.
    pub fn has_allowed_extension(&self, path: &Path) -> bool {
        match extension_of(path) {
            Some(ext) => self
                .extensions
                .iter()
                .any(|allowed| allowed.as_bytes() == ext),
            None => false,
        }
    }

    /// Check if a regular file should be counted.
    pub fn matches_file(&self, path: &Path) -> bool {
        self.has_allowed_extension(path) && !self.is_excluded(path)
    }

    /// Check if a directory should be descended into.
    pub fn allows_dir(&self, path: &Path) -> bool {
        !self.is_excluded(path)
    }
}

/// Extension of the final path component: everything after its last `.`.
///
/// Works on the raw bytes of the name, so names that are not valid UTF-8
/// still have an extension. Returns `None` when the name has no `.`. A
/// trailing `.` yields `Some(b"")`, and a dot-file like `.cs` yields
/// `Some(b"cs")`.
pub fn extension_of(path: &Path) -> Option<&[u8]> {
    let name = path.file_name()?.as_encoded_bytes();
    name.iter()
        .rposition(|&b| b == b'.')
        .map(|idx| &name[idx + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("a.cs")), Some(&b"cs"[..]));
        assert_eq!(extension_of(Path::new("./dir/shader.fxh")), Some(&b"fxh"[..]));
        assert_eq!(extension_of(Path::new("archive.tar.gz")), Some(&b"gz"[..]));
        assert_eq!(extension_of(Path::new(".cs")), Some(&b"cs"[..]));
        assert_eq!(extension_of(Path::new("trailing.")), Some(&b""[..]));
    }

    #[test]
    fn test_extension_of_without_dot() {
        assert_eq!(extension_of(Path::new("Makefile")), None);
        // A dot in a parent directory does not leak into the file's extension
        assert_eq!(extension_of(Path::new("./sub.cs/Makefile")), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_extension_of_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("./sub").join(OsStr::from_bytes(b"caf\xe9.cs"));
        assert_eq!(extension_of(&path), Some(&b"cs"[..]));
        assert!(FilterConfig::new().matches_file(&path));

        let path = Path::new(OsStr::from_bytes(b"\xff.\xfe"));
        assert_eq!(extension_of(path), Some(&b"\xfe"[..]));
        assert!(!FilterConfig::new().matches_file(path));
    }

    #[test]
    fn test_default_allow_list() {
        let filter = FilterConfig::new();

        assert!(filter.matches_file(Path::new("./a.cs")));
        assert!(filter.matches_file(Path::new("./fx/effect.fx")));
        assert!(filter.matches_file(Path::new("./common.fxh")));
        assert!(!filter.matches_file(Path::new("./b.txt")));
        assert!(!filter.matches_file(Path::new("./README")));
        assert!(!filter.matches_file(Path::new("./trailing.")));
    }

    #[test]
    fn test_extension_match_is_exact_and_case_sensitive() {
        let filter = FilterConfig::new();

        assert!(!filter.matches_file(Path::new("Foo.CS")));
        assert!(!filter.matches_file(Path::new("foo.fxhx")));
        assert!(!filter.matches_file(Path::new("foo.c")));
    }

    #[test]
    fn test_svn_substring_excludes_files_and_dirs() {
        let filter = FilterConfig::new();

        assert!(!filter.matches_file(Path::new("./.svn/d.cs")));
        assert!(!filter.matches_file(Path::new("./sub/.svn/text-base/e.cs")));
        assert!(!filter.matches_file(Path::new("./a.svn.cs")));
        assert!(!filter.allows_dir(Path::new("./.svn")));
        assert!(!filter.allows_dir(Path::new("./old.svn-backup")));
        assert!(filter.allows_dir(Path::new("./sub")));
    }

    #[test]
    fn test_custom_extensions() {
        let filter = FilterConfig::new().extensions([".rs", "toml"]);

        assert!(filter.matches_file(Path::new("src/lib.rs")));
        assert!(filter.matches_file(Path::new("Cargo.toml")));
        assert!(!filter.matches_file(Path::new("a.cs")));
    }

    #[test]
    fn test_custom_excludes_replace_default() {
        let filter = FilterConfig::new().excludes([".git", "target"]);

        assert!(filter.matches_file(Path::new("./.svn/d.cs")));
        assert!(!filter.allows_dir(Path::new("./.git")));
        assert!(!filter.allows_dir(Path::new("./target")));
    }

    #[test]
    fn test_exclude_glob() {
        let filter = FilterConfig::new()
            .exclude_globs(&["**/generated/**", "*.Designer.cs"])
            .unwrap();

        assert!(!filter.matches_file(Path::new("./src/generated/a.cs")));
        assert!(!filter.matches_file(Path::new("Form1.Designer.cs")));
        assert!(filter.matches_file(Path::new("./src/Form1.cs")));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new().exclude_glob("[invalid");

        assert!(result.is_err());
        if let Err(SrclocError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }
}
