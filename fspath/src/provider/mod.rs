//! The filesystem provider seam.
//!
//! Every operation that needs the operating system goes through
//! [`FileSystemProvider`]. [`OsProvider`] is the production implementation;
//! tests substitute mocks so the path logic can run without a real
//! filesystem.

mod directories;
mod os;

use std::io;

use crate::path::{standardize, Path};

pub use directories::{DirectoryKind, DirectoryScope};
pub use os::OsProvider;

/// Primitive filesystem capabilities consumed by [`FileManager`](crate::FileManager).
///
/// Implementations report raw I/O outcomes; translating them into
/// [`Error`](crate::Error) variants, and checking preconditions such as
/// "destination must not exist", is the facade's job.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystemProvider {
    /// The process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read or is not
    /// valid UTF-8.
    fn current_directory(&self) -> io::Result<Path>;

    /// Change the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be entered.
    fn set_current_directory(&self, path: &Path) -> io::Result<()>;

    /// Whether something exists at `path`, following symlinks.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory, following symlinks.
    fn is_directory(&self, path: &Path) -> bool;

    /// Whether `path` itself is a symbolic link.
    fn is_symlink(&self, path: &Path) -> bool;

    /// Standardize a path string without touching the filesystem.
    fn standardize(&self, raw: &str) -> String {
        standardize::collapse(raw)
    }

    /// Follow symbolic links in a path string.
    ///
    /// Unresolvable input is returned unchanged.
    fn resolve_symlinks(&self, raw: &str) -> String;

    /// Names of the entries in the directory at `path`, in listing order.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a readable directory.
    fn list_directory(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Create an empty file, truncating any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    fn create_file(&self, path: &Path) -> io::Result<()>;

    /// Create a directory and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_directory(&self, path: &Path) -> io::Result<()>;

    /// Remove a file or symlink, or a directory recursively.
    ///
    /// # Errors
    ///
    /// Returns an error if the item cannot be removed.
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Move an item to a new location.
    ///
    /// # Errors
    ///
    /// Returns an error if the move fails.
    fn move_item(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Copy a file, or a directory recursively.
    ///
    /// # Errors
    ///
    /// Returns an error if the copy fails.
    fn copy_item(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Create a symbolic link at `link` pointing to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the link cannot be created.
    fn create_symlink(&self, target: &Path, link: &Path) -> io::Result<()>;

    /// The current user's home directory, if known.
    fn home_directory(&self) -> Option<Path>;

    /// The directory for temporary files.
    fn temporary_directory(&self) -> Path;

    /// Platform locations of a standard directory kind.
    ///
    /// Kinds the platform does not have yield an empty list.
    fn standard_directories(&self, kind: DirectoryKind, scope: DirectoryScope) -> Vec<Path>;
}
