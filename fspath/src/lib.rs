#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fspath
//!
//! An ergonomic, string-backed filesystem path type.
//!
//! This library provides a [`Path`] value type with path manipulation
//! (components, standardization, symlink resolution, absolute conversion)
//! and thin wrappers over operating system file operations.
//!
//! ## Core Types
//!
//! - [`Path`]: The path value type, compared by its raw string
//! - [`FileManager`]: Filesystem operations through a chosen provider
//! - [`FileSystemProvider`] and [`OsProvider`]: The filesystem seam
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use fspath::Path;
//!
//! let file = Path::new("/var/log") + "app/../system.log";
//! assert_eq!(file.as_str(), "/var/log/app/../system.log");
//! assert_eq!(file.extension(), "log");
//!
//! let file = file.standardized();
//! assert_eq!(file.as_str(), "/var/log/system.log");
//! assert_eq!(file.components().len(), 4);
//! assert_eq!(file.parent(), Path::new("/var/log"));
//! ```

pub mod error;
pub mod logging;
pub mod manager;
pub mod path;
pub mod provider;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, resolve_level, LogLevel, Logger};
pub use manager::FileManager;
pub use path::{Path, SearchDepth, SEPARATOR, SEPARATOR_STR};
pub use provider::{DirectoryKind, DirectoryScope, FileSystemProvider, OsProvider};
