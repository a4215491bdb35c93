//! The [`Path`] value type and the algorithms behind it.
//!
//! # Key Concepts
//!
//! ## Raw storage
//!
//! A `Path` stores exactly the string it was built from. Nothing is
//! normalized on construction, and equality compares the stored strings.
//!
//! ## Standardization
//!
//! Standardization rewrites a path without touching the filesystem:
//! - Expanding tilde (~) to the home directory (provider dependent)
//! - Removing `.` segments and redundant separators
//! - Folding `name/..` pairs
//!
//! ## Resolution
//!
//! Resolution follows symlinks to get the "real" path on the filesystem. The
//! longest existing prefix is resolved and the rest is kept as written.
//!
//! # Examples
//!
//! ```
//! use fspath::Path;
//!
//! let path = Path::new("/srv/app/../data/./report.csv");
//! assert_eq!(path.extension(), "csv");
//! assert_eq!(path.standardized(), Path::new("/srv/data/report.csv"));
//! assert_eq!(path.prefix(1), Path::new("/srv"));
//! ```

pub mod canonicalize;
mod ops;
pub mod search;
pub mod standardize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use search::SearchDepth;
pub use types::{Path, SEPARATOR, SEPARATOR_STR};
