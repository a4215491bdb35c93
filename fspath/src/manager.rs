//! The filesystem facade.
//!
//! [`FileManager`] binds a [`FileSystemProvider`] and turns its raw I/O
//! outcomes into [`Error`] variants. The filesystem methods on [`Path`] are
//! one-line delegations to [`FileManager::os`].
//!
//! # Examples
//!
//! ```no_run
//! use fspath::{FileManager, Path};
//!
//! let manager = FileManager::os();
//! let scratch = manager.temporary_directory() + "scratch";
//! manager.create_directory(&scratch).unwrap();
//! manager.create_file(&(&scratch + "notes.txt")).unwrap();
//! assert_eq!(manager.children(&scratch), vec![&scratch + "notes.txt"]);
//! ```

use crate::error::{destination_exists, Error, Result};
use crate::path::{search, Path, SearchDepth};
use crate::provider::{DirectoryKind, DirectoryScope, FileSystemProvider, OsProvider};

/// Path operations that need a filesystem, performed through a provider.
#[derive(Debug, Clone, Default)]
pub struct FileManager<P = OsProvider> {
    provider: P,
}

impl FileManager<OsProvider> {
    /// A manager backed by the operating system with default settings.
    #[must_use]
    pub fn os() -> Self {
        Self::new(OsProvider::new())
    }
}

impl<P: FileSystemProvider> FileManager<P> {
    /// Create a manager that performs every operation through `provider`.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The bound provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The process working directory.
    ///
    /// The working directory is process-global; callers that change it from
    /// several threads must synchronize themselves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDirectory`] if it cannot be read.
    pub fn current_directory(&self) -> Result<Path> {
        self.provider
            .current_directory()
            .map_err(|source| Error::CurrentDirectory { source })
    }

    /// Change the process working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChangeDirectoryFail`] if `path` cannot be entered.
    pub fn set_current_directory(&self, path: &Path) -> Result<()> {
        log::debug!("changing current directory to {path}");
        self.provider
            .set_current_directory(path)
            .map_err(|source| Error::ChangeDirectoryFail {
                path: path.clone(),
                source,
            })
    }

    /// Whether `path` exists, following symlinks.
    #[must_use]
    pub fn exists(&self, path: &Path) -> bool {
        self.provider.exists(path)
    }

    /// Whether `path` is a directory, following symlinks.
    #[must_use]
    pub fn is_directory(&self, path: &Path) -> bool {
        self.provider.is_directory(path)
    }

    /// Whether `path` itself is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self, path: &Path) -> bool {
        self.provider.is_symlink(path)
    }

    /// `path` standardized by the provider.
    #[must_use]
    pub fn standardized(&self, path: &Path) -> Path {
        Path::new(self.provider.standardize(path.as_str()))
    }

    /// `path` with symlinks resolved, then standardized.
    #[must_use]
    pub fn resolved(&self, path: &Path) -> Path {
        let resolved = self.provider.resolve_symlinks(path.as_str());
        Path::new(self.provider.standardize(&resolved))
    }

    /// `path` made absolute against the working directory, standardized.
    ///
    /// A path that standardizes to an absolute path (such as `~/x` under
    /// tilde expansion) does not consult the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDirectory`] if `path` is relative and the
    /// working directory cannot be read.
    pub fn absolute(&self, path: &Path) -> Result<Path> {
        let standardized = self.standardized(path);
        if standardized.is_absolute() {
            return Ok(standardized);
        }
        let cwd = self.current_directory()?;
        Ok(self.standardized(&(cwd + path)))
    }

    /// Entries of the directory `path`, in provider order.
    #[must_use]
    pub fn children(&self, path: &Path) -> Vec<Path> {
        search::children(&self.provider, path)
    }

    /// Every descendant of `path`, each directory before its contents.
    ///
    /// Symlinked directories are listed but not entered.
    #[must_use]
    pub fn children_recursive(&self, path: &Path) -> Vec<Path> {
        search::children_recursive(&self.provider, path)
    }

    /// Descendants of `root` matching `condition`.
    ///
    /// See [`search::find_paths`] for the traversal rules.
    pub fn find_paths<F>(&self, root: &Path, depth: SearchDepth, mut condition: F) -> Vec<Path>
    where
        F: FnMut(&Path) -> bool,
    {
        search::find_paths(&self.provider, root, depth, &mut condition)
    }

    /// Create an empty file at `path`, truncating an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateFileFail`] if the file cannot be created.
    pub fn create_file(&self, path: &Path) -> Result<()> {
        log::debug!("creating file {path}");
        self.provider
            .create_file(path)
            .map_err(|source| Error::CreateFileFail {
                path: path.clone(),
                source,
            })
    }

    /// Create a directory at `path` along with any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateFileFail`] if the directory cannot be created.
    pub fn create_directory(&self, path: &Path) -> Result<()> {
        log::debug!("creating directory {path}");
        self.provider
            .create_directory(path)
            .map_err(|source| Error::CreateFileFail {
                path: path.clone(),
                source,
            })
    }

    /// Remove the file, symlink or directory tree at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeleteFileFail`] if the item cannot be removed.
    pub fn delete_file(&self, path: &Path) -> Result<()> {
        log::debug!("deleting {path}");
        self.provider
            .remove(path)
            .map_err(|source| Error::DeleteFileFail {
                path: path.clone(),
                source,
            })
    }

    /// Move `from` to `to`. An existing destination is never replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileDoesNotExist`] if `from` does not exist, and
    /// [`Error::MoveFileFail`] if `to` exists or the move fails.
    pub fn move_file(&self, from: &Path, to: &Path) -> Result<()> {
        self.require_exists(from)?;
        log::debug!("moving {from} to {to}");
        self.require_vacant(to)
            .and_then(|()| self.provider.move_item(from, to))
            .map_err(|source| Error::MoveFileFail {
                from: from.clone(),
                to: to.clone(),
                source,
            })
    }

    /// Copy `from` to `to`, recursively for directories. An existing
    /// destination is never replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileDoesNotExist`] if `from` does not exist, and
    /// [`Error::CopyFileFail`] if `to` exists or the copy fails.
    pub fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        self.require_exists(from)?;
        log::debug!("copying {from} to {to}");
        self.require_vacant(to)
            .and_then(|()| self.provider.copy_item(from, to))
            .map_err(|source| Error::CopyFileFail {
                from: from.clone(),
                to: to.clone(),
                source,
            })
    }

    /// Create a symbolic link pointing to `source`, returning the link's
    /// location.
    ///
    /// The link is created at `dest`, or at `dest + source.file_name()` when
    /// `dest` is an existing directory and `source` is not a directory. The
    /// link stores `source` exactly as written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileDoesNotExist`] if `source` does not exist, and
    /// [`Error::CreateSymlinkFail`] if the link location is already taken or
    /// the link cannot be created.
    pub fn symlink_to(&self, source: &Path, dest: &Path) -> Result<Path> {
        self.require_exists(source)?;

        let link = if self.is_directory(dest) && !self.is_directory(source) {
            dest + source.file_name()
        } else {
            dest.clone()
        };

        log::debug!("linking {link} to {source}");
        self.require_vacant(&link)
            .and_then(|()| self.provider.create_symlink(source, &link))
            .map_err(|e| Error::CreateSymlinkFail {
                from: source.clone(),
                to: link.clone(),
                source: e,
            })?;
        Ok(link)
    }

    /// The current user's home directory, if known.
    #[must_use]
    pub fn home_directory(&self) -> Option<Path> {
        self.provider.home_directory()
    }

    /// The directory for temporary files.
    #[must_use]
    pub fn temporary_directory(&self) -> Path {
        self.provider.temporary_directory()
    }

    /// Platform locations of a standard directory.
    #[must_use]
    pub fn standard_directories(&self, kind: DirectoryKind, scope: DirectoryScope) -> Vec<Path> {
        self.provider.standard_directories(kind, scope)
    }

    fn require_exists(&self, path: &Path) -> Result<()> {
        if self.exists(path) {
            Ok(())
        } else {
            Err(Error::FileDoesNotExist { path: path.clone() })
        }
    }

    /// A dangling symlink still occupies its location.
    fn require_vacant(&self, path: &Path) -> std::io::Result<()> {
        if self.exists(path) || self.is_symlink(path) {
            Err(destination_exists(path))
        } else {
            Ok(())
        }
    }
}

/// Filesystem conveniences backed by [`FileManager::os`].
impl Path {
    /// The process working directory.
    ///
    /// The working directory is process-global; callers that change it from
    /// several threads must synchronize themselves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDirectory`] if it cannot be read.
    pub fn current() -> Result<Path> {
        FileManager::os().current_directory()
    }

    /// Make `path` the process working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChangeDirectoryFail`] if `path` cannot be entered.
    pub fn set_current(path: &Path) -> Result<()> {
        FileManager::os().set_current_directory(path)
    }

    /// The current user's home directory, if known.
    #[must_use]
    pub fn home() -> Option<Path> {
        FileManager::os().home_directory()
    }

    /// The directory for temporary files.
    #[must_use]
    pub fn temporary() -> Path {
        FileManager::os().temporary_directory()
    }

    /// Platform locations of a standard directory.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fspath::{DirectoryKind, DirectoryScope, Path};
    ///
    /// for dir in Path::standard_directories(DirectoryKind::Fonts, DirectoryScope::System) {
    ///     println!("{dir}");
    /// }
    /// ```
    #[must_use]
    pub fn standard_directories(kind: DirectoryKind, scope: DirectoryScope) -> Vec<Path> {
        FileManager::os().standard_directories(kind, scope)
    }

    /// Whether the path exists, following symlinks.
    #[must_use]
    pub fn exists(&self) -> bool {
        FileManager::os().exists(self)
    }

    /// Whether the path is a directory, following symlinks.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        FileManager::os().is_directory(self)
    }

    /// Whether the path itself is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        FileManager::os().is_symlink(self)
    }

    /// The standardized form of this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("a/b/../c").standardized(), Path::new("a/c"));
    /// assert_eq!(Path::new("/x/./y/").standardized(), Path::new("/x/y"));
    /// ```
    #[must_use]
    pub fn standardized(&self) -> Path {
        FileManager::os().standardized(self)
    }

    /// Replace this path with its standardized form.
    pub fn standardize(&mut self) {
        *self = self.standardized();
    }

    /// This path with symlinks resolved, standardized.
    #[must_use]
    pub fn resolved(&self) -> Path {
        FileManager::os().resolved(self)
    }

    /// Replace this path with its resolved form.
    pub fn resolve(&mut self) {
        *self = self.resolved();
    }

    /// This path made absolute against the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDirectory`] if the working directory is needed
    /// and cannot be read.
    pub fn absolute(&self) -> Result<Path> {
        FileManager::os().absolute(self)
    }

    /// Entries of this directory; empty if it cannot be listed.
    #[must_use]
    pub fn children(&self) -> Vec<Path> {
        FileManager::os().children(self)
    }

    /// Every descendant of this directory.
    #[must_use]
    pub fn children_recursive(&self) -> Vec<Path> {
        FileManager::os().children_recursive(self)
    }

    /// Descendants of this directory matching `condition`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fspath::{Path, SearchDepth};
    ///
    /// let manifests = Path::new(".").find_paths(SearchDepth::Limited(2), |p| {
    ///     p.file_name() == "Cargo.toml"
    /// });
    /// ```
    pub fn find_paths<F>(&self, depth: SearchDepth, condition: F) -> Vec<Path>
    where
        F: FnMut(&Path) -> bool,
    {
        FileManager::os().find_paths(self, depth, condition)
    }

    /// Create an empty file at this path.
    ///
    /// # Errors
    ///
    /// See [`FileManager::create_file`].
    pub fn create_file(&self) -> Result<()> {
        FileManager::os().create_file(self)
    }

    /// Create a directory at this path, with missing parents.
    ///
    /// # Errors
    ///
    /// See [`FileManager::create_directory`].
    pub fn create_directory(&self) -> Result<()> {
        FileManager::os().create_directory(self)
    }

    /// Remove the item at this path.
    ///
    /// # Errors
    ///
    /// See [`FileManager::delete_file`].
    pub fn delete_file(&self) -> Result<()> {
        FileManager::os().delete_file(self)
    }

    /// Move the item at this path to `dest`.
    ///
    /// # Errors
    ///
    /// See [`FileManager::move_file`].
    pub fn move_file(&self, dest: &Path) -> Result<()> {
        FileManager::os().move_file(self, dest)
    }

    /// Copy the item at this path to `dest`.
    ///
    /// # Errors
    ///
    /// See [`FileManager::copy_file`].
    pub fn copy_file(&self, dest: &Path) -> Result<()> {
        FileManager::os().copy_file(self, dest)
    }

    /// Create a symbolic link at `dest` pointing to this path.
    ///
    /// # Errors
    ///
    /// See [`FileManager::symlink_to`].
    pub fn symlink_to(&self, dest: &Path) -> Result<Path> {
        FileManager::os().symlink_to(self, dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockFileSystemProvider;
    use mockall::predicate::eq;
    use std::io;

    fn manager(provider: MockFileSystemProvider) -> FileManager<MockFileSystemProvider> {
        FileManager::new(provider)
    }

    /// A provider where exactly the listed paths exist, none of them links.
    fn with_existing(paths: &'static [&'static str], directories: &'static [&'static str]) -> MockFileSystemProvider {
        let mut provider = MockFileSystemProvider::new();
        provider
            .expect_exists()
            .returning(move |path| paths.contains(&path.as_str()));
        provider
            .expect_is_directory()
            .returning(move |path| directories.contains(&path.as_str()));
        provider.expect_is_symlink().returning(|_| false);
        provider
    }

    #[test]
    fn test_move_to_existing_destination_fails() {
        let mut provider = with_existing(&["/src", "/dst"], &[]);
        provider.expect_move_item().never();

        let err = manager(provider)
            .move_file(&Path::new("/src"), &Path::new("/dst"))
            .unwrap_err();
        assert!(matches!(err, Error::MoveFileFail { .. }));
        assert!(err.is_already_exists());
    }

    #[test]
    fn test_copy_to_existing_destination_fails() {
        let mut provider = with_existing(&["/src", "/dst"], &[]);
        provider.expect_copy_item().never();

        let err = manager(provider)
            .copy_file(&Path::new("/src"), &Path::new("/dst"))
            .unwrap_err();
        assert!(matches!(err, Error::CopyFileFail { .. }));
        assert!(err.is_already_exists());
    }

    #[test]
    fn test_move_missing_source_fails() {
        let mut provider = with_existing(&[], &[]);
        provider.expect_move_item().never();

        let err = manager(provider)
            .move_file(&Path::new("/src"), &Path::new("/dst"))
            .unwrap_err();
        assert!(matches!(err, Error::FileDoesNotExist { ref path } if path == "/src"));
    }

    #[test]
    fn test_move_provider_failure_is_translated() {
        let mut provider = with_existing(&["/src"], &[]);
        provider
            .expect_move_item()
            .times(1)
            .returning(|_, _| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        let err = manager(provider)
            .move_file(&Path::new("/src"), &Path::new("/dst"))
            .unwrap_err();
        assert!(matches!(err, Error::MoveFileFail { .. }));
        assert!(!err.is_already_exists());
    }

    #[test]
    fn test_copy_succeeds() {
        let mut provider = with_existing(&["/src"], &[]);
        provider
            .expect_copy_item()
            .with(eq(Path::new("/src")), eq(Path::new("/dst")))
            .times(1)
            .returning(|_, _| Ok(()));

        manager(provider)
            .copy_file(&Path::new("/src"), &Path::new("/dst"))
            .unwrap();
    }

    #[test]
    fn test_dangling_symlink_destination_is_occupied() {
        let mut provider = MockFileSystemProvider::new();
        provider
            .expect_exists()
            .returning(|path| path.as_str() == "/src");
        provider
            .expect_is_symlink()
            .returning(|path| path.as_str() == "/dst");
        provider.expect_copy_item().never();

        let err = manager(provider)
            .copy_file(&Path::new("/src"), &Path::new("/dst"))
            .unwrap_err();
        assert!(err.is_already_exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_file_into_directory() {
        let mut provider = with_existing(&["/docs/doc.txt", "/dest"], &["/dest"]);
        provider
            .expect_create_symlink()
            .with(eq(Path::new("/docs/doc.txt")), eq(Path::new("/dest/doc.txt")))
            .times(1)
            .returning(|_, _| Ok(()));

        let link = manager(provider)
            .symlink_to(&Path::new("/docs/doc.txt"), &Path::new("/dest"))
            .unwrap();
        assert_eq!(link, Path::new("/dest/doc.txt"));
    }

    #[test]
    fn test_symlink_directory_onto_existing_directory_fails() {
        let mut provider = with_existing(&["/src", "/dest"], &["/src", "/dest"]);
        provider.expect_create_symlink().never();

        let err = manager(provider)
            .symlink_to(&Path::new("/src"), &Path::new("/dest"))
            .unwrap_err();
        assert!(matches!(err, Error::CreateSymlinkFail { ref to, .. } if to == "/dest"));
    }

    #[test]
    fn test_symlink_onto_existing_file_fails() {
        let mut provider = with_existing(&["/src", "/dest"], &[]);
        provider.expect_create_symlink().never();

        let err = manager(provider)
            .symlink_to(&Path::new("/src"), &Path::new("/dest"))
            .unwrap_err();
        assert!(matches!(err, Error::CreateSymlinkFail { .. }));
        assert!(err.is_already_exists());
    }

    #[test]
    fn test_symlink_missing_source_fails() {
        let mut provider = with_existing(&[], &[]);
        provider.expect_create_symlink().never();

        let err = manager(provider)
            .symlink_to(&Path::new("/src"), &Path::new("/dest"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_create_failure_is_create_file_fail() {
        let mut provider = MockFileSystemProvider::new();
        provider
            .expect_create_directory()
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        let err = manager(provider)
            .create_directory(&Path::new("/denied"))
            .unwrap_err();
        assert!(matches!(err, Error::CreateFileFail { ref path, .. } if path == "/denied"));
    }

    #[test]
    fn test_delete_failure_is_delete_file_fail() {
        let mut provider = MockFileSystemProvider::new();
        provider
            .expect_remove()
            .returning(|_| Err(io::Error::from(io::ErrorKind::NotFound)));

        let err = manager(provider).delete_file(&Path::new("/gone")).unwrap_err();
        assert!(matches!(err, Error::DeleteFileFail { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn test_absolute_joins_current_directory() {
        let mut provider = MockFileSystemProvider::new();
        provider
            .expect_standardize()
            .returning(crate::path::standardize::collapse);
        provider
            .expect_current_directory()
            .times(1)
            .returning(|| Ok(Path::new("/work")));

        let absolute = manager(provider).absolute(&Path::new("a/../b")).unwrap();
        assert_eq!(absolute, Path::new("/work/b"));
    }

    #[test]
    #[cfg(unix)]
    fn test_absolute_path_skips_current_directory() {
        let mut provider = MockFileSystemProvider::new();
        provider
            .expect_standardize()
            .returning(crate::path::standardize::collapse);
        provider.expect_current_directory().never();

        let absolute = manager(provider).absolute(&Path::new("/x/./y")).unwrap();
        assert_eq!(absolute, Path::new("/x/y"));
    }

    #[test]
    fn test_absolute_reports_current_directory_failure() {
        let mut provider = MockFileSystemProvider::new();
        provider
            .expect_standardize()
            .returning(crate::path::standardize::collapse);
        provider
            .expect_current_directory()
            .returning(|| Err(io::Error::from(io::ErrorKind::NotFound)));

        let err = manager(provider).absolute(&Path::new("rel")).unwrap_err();
        assert!(matches!(err, Error::CurrentDirectory { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn test_resolved_standardizes_after_resolving() {
        let mut provider = MockFileSystemProvider::new();
        provider
            .expect_resolve_symlinks()
            .with(eq("/link/x"))
            .returning(|_| "/real/./x/".to_string());
        provider
            .expect_standardize()
            .returning(crate::path::standardize::collapse);

        assert_eq!(
            manager(provider).resolved(&Path::new("/link/x")),
            Path::new("/real/x")
        );
    }

    #[test]
    fn test_set_current_directory_failure() {
        let mut provider = MockFileSystemProvider::new();
        provider
            .expect_set_current_directory()
            .returning(|_| Err(io::Error::from(io::ErrorKind::NotFound)));

        let err = manager(provider)
            .set_current_directory(&Path::new("/nowhere"))
            .unwrap_err();
        assert!(matches!(err, Error::ChangeDirectoryFail { .. }));
    }

    #[test]
    fn test_in_place_standardize() {
        let mut path = Path::new("a/./b/../c");
        path.standardize();
        assert_eq!(path, Path::new("a").join("c"));
    }
}
