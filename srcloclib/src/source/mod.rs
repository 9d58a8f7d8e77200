//! Source selection: decide which entries the walker visits.
//!
//! - **Allow-list**: files count only when their extension is listed
//! - **Exclusion**: paths containing an excluded substring, or matching an
//!   excluded glob, are skipped along with everything beneath them
//!
//! ## Example
//!
//! ```rust
//! use srcloclib::source::FilterConfig;
//! use std::path::Path;
//!
//! let filter = FilterConfig::new().extensions(["rs"]).excludes(["target"]);
//! assert!(filter.matches_file(Path::new("src/lib.rs")));
//! assert!(!filter.allows_dir(Path::new("./target")));
//! ```

pub mod filter;

pub use filter::{extension_of, FilterConfig, DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS};
