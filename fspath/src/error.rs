//! Error types for the fspath library.
//!
//! Every filesystem-mutating operation either completes or fails with exactly
//! one variant of [`Error`]. Variants carry the paths involved and, where the
//! provider reported one, the underlying I/O error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::path::Path;

/// Result type alias for operations that may fail with an fspath error.
///
/// # Examples
///
/// ```
/// use fspath::{Error, Path, Result};
///
/// fn example_operation() -> Result<Path> {
///     Ok(Path::new("/tmp"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A source path that must exist does not.
    #[error("file does not exist: {path}")]
    FileDoesNotExist {
        /// The missing path.
        path: Path,
    },

    /// A symbolic link could not be created.
    #[error("cannot create symlink from {from} to {to}: {source}")]
    CreateSymlinkFail {
        /// The path the link would point to.
        from: Path,
        /// The location of the link.
        to: Path,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A file or directory could not be created.
    #[error("cannot create {path}: {source}")]
    CreateFileFail {
        /// The path that could not be created.
        path: Path,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A file or directory could not be removed.
    #[error("cannot delete {path}: {source}")]
    DeleteFileFail {
        /// The path that could not be removed.
        path: Path,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A move failed, or its destination already existed.
    #[error("cannot move {from} to {to}: {source}")]
    MoveFileFail {
        /// The source path.
        from: Path,
        /// The destination path.
        to: Path,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A copy failed, or its destination already existed.
    #[error("cannot copy {from} to {to}: {source}")]
    CopyFileFail {
        /// The source path.
        from: Path,
        /// The destination path.
        to: Path,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The current working directory could not be read.
    #[error("cannot read current directory: {source}")]
    CurrentDirectory {
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The current working directory could not be changed.
    #[error("cannot change current directory to {path}: {source}")]
    ChangeDirectoryFail {
        /// The requested working directory.
        path: Path,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A native path could not be represented as a [`Path`].
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending native path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },
}

impl Error {
    /// Check if error indicates a required source path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{Error, Path};
    ///
    /// let err = Error::FileDoesNotExist { path: Path::new("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileDoesNotExist { .. })
    }

    /// Check if the failure was caused by a destination that already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{Error, Path};
    /// use std::io;
    ///
    /// let err = Error::MoveFileFail {
    ///     from: Path::new("/a"),
    ///     to: Path::new("/b"),
    ///     source: io::Error::from(io::ErrorKind::AlreadyExists),
    /// };
    /// assert!(err.is_already_exists());
    /// ```
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        self.io_source()
            .is_some_and(|source| source.kind() == io::ErrorKind::AlreadyExists)
    }

    /// The I/O error reported by the provider, if any.
    #[must_use]
    pub fn io_source(&self) -> Option<&io::Error> {
        match self {
            Self::CreateSymlinkFail { source, .. }
            | Self::CreateFileFail { source, .. }
            | Self::DeleteFileFail { source, .. }
            | Self::MoveFileFail { source, .. }
            | Self::CopyFileFail { source, .. }
            | Self::CurrentDirectory { source }
            | Self::ChangeDirectoryFail { source, .. } => Some(source),
            Self::FileDoesNotExist { .. } | Self::InvalidPath { .. } => None,
        }
    }
}

/// Builds the error reported when an operation refuses to overwrite `path`.
pub(crate) fn destination_exists(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("destination already exists: {path}"),
    )
}
