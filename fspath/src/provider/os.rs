//! The operating-system backed provider.

use std::env;
use std::fs;
use std::io;

use super::directories::{self, DirectoryKind, DirectoryScope};
use super::FileSystemProvider;
use crate::path::{canonicalize, standardize, Path};

/// [`FileSystemProvider`] backed by `std::fs`, `fs_extra`, `home` and `dirs`.
///
/// # Examples
///
/// ```
/// use fspath::{FileSystemProvider, OsProvider};
///
/// let provider = OsProvider::new().with_hidden_entries(false);
/// assert_eq!(provider.standardize("a/./b/../c"), "a/c");
/// ```
#[derive(Debug, Clone)]
pub struct OsProvider {
    /// Whether standardization expands a leading `~`.
    expand_tilde: bool,
    /// Whether directory listings include dot-files.
    include_hidden: bool,
}

impl OsProvider {
    /// Copy `from` to `to` and remove the original. A symlink is recreated
    /// at `to` with the same target instead of being followed.
    fn move_across_devices(&self, from: &Path, to: &Path) -> io::Result<()> {
        let metadata = fs::symlink_metadata(from.as_std_path())?;
        if metadata.file_type().is_symlink() {
            let target = fs::read_link(from.as_std_path())?;
            let target = Path::try_from(target).map_err(io::Error::other)?;
            self.create_symlink(&target, to)?;
            fs::remove_file(from.as_std_path())
        } else if metadata.is_dir() {
            let options = fs_extra::dir::CopyOptions::new().copy_inside(true);
            fs_extra::dir::move_dir(from.as_std_path(), to.as_std_path(), &options)
                .map(drop)
                .map_err(io::Error::other)
        } else {
            let options = fs_extra::file::CopyOptions::new();
            fs_extra::file::move_file(from.as_std_path(), to.as_std_path(), &options)
                .map(drop)
                .map_err(io::Error::other)
        }
    }
}

impl Default for OsProvider {
    fn default() -> Self {
        Self {
            expand_tilde: true,
            include_hidden: true,
        }
    }
}

impl OsProvider {
    /// Create a provider with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether [`standardize`](FileSystemProvider::standardize)
    /// expands a leading `~` to the home directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{FileSystemProvider, OsProvider};
    ///
    /// let provider = OsProvider::new().with_tilde_expansion(false);
    /// assert_eq!(provider.standardize("~/x/../y"), "~/y");
    /// ```
    #[must_use]
    pub fn with_tilde_expansion(mut self, expand: bool) -> Self {
        self.expand_tilde = expand;
        self
    }

    /// Configure whether directory listings include entries whose names
    /// start with a dot.
    #[must_use]
    pub fn with_hidden_entries(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }
}

impl FileSystemProvider for OsProvider {
    fn current_directory(&self) -> io::Result<Path> {
        let cwd = env::current_dir()?;
        Path::try_from(cwd).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }

    fn set_current_directory(&self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path.as_std_path())
    }

    fn exists(&self, path: &Path) -> bool {
        !path.is_empty() && path.as_std_path().exists()
    }

    fn is_directory(&self, path: &Path) -> bool {
        !path.is_empty() && path.as_std_path().is_dir()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path.as_std_path())
            .map(|metadata| metadata.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn standardize(&self, raw: &str) -> String {
        if self.expand_tilde {
            standardize::collapse(&standardize::expand_tilde(raw))
        } else {
            standardize::collapse(raw)
        }
    }

    fn resolve_symlinks(&self, raw: &str) -> String {
        canonicalize::resolve_symlinks(raw)
    }

    fn list_directory(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path.as_std_path())? {
            let entry = entry?;
            let Ok(name) = entry.file_name().into_string() else {
                log::debug!("skipping non-UTF-8 entry in {path}");
                continue;
            };
            if !self.include_hidden && name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        Ok(names)
    }

    fn create_file(&self, path: &Path) -> io::Result<()> {
        fs::File::create(path.as_std_path()).map(drop)
    }

    fn create_directory(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path.as_std_path())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        // symlink_metadata so a link to a directory is unlinked, not emptied
        let metadata = fs::symlink_metadata(path.as_std_path())?;
        if metadata.is_dir() {
            fs::remove_dir_all(path.as_std_path())
        } else {
            fs::remove_file(path.as_std_path())
        }
    }

    fn move_item(&self, from: &Path, to: &Path) -> io::Result<()> {
        match fs::rename(from.as_std_path(), to.as_std_path()) {
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                log::debug!("{from} and {to} are on different devices; copying instead");
                self.move_across_devices(from, to)
            }
            result => result,
        }
    }

    fn copy_item(&self, from: &Path, to: &Path) -> io::Result<()> {
        if from.as_std_path().is_dir() {
            let options = fs_extra::dir::CopyOptions::new().copy_inside(true);
            fs_extra::dir::copy(from.as_std_path(), to.as_std_path(), &options)
                .map(drop)
                .map_err(io::Error::other)
        } else {
            fs::copy(from.as_std_path(), to.as_std_path()).map(drop)
        }
    }

    #[cfg(unix)]
    fn create_symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(target.as_std_path(), link.as_std_path())
    }

    #[cfg(windows)]
    fn create_symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        if target.as_std_path().is_dir() {
            std::os::windows::fs::symlink_dir(target.as_std_path(), link.as_std_path())
        } else {
            std::os::windows::fs::symlink_file(target.as_std_path(), link.as_std_path())
        }
    }

    fn home_directory(&self) -> Option<Path> {
        home::home_dir().and_then(|home| Path::try_from(home).ok())
    }

    fn temporary_directory(&self) -> Path {
        let temp = env::temp_dir();
        match Path::try_from(temp.as_path()) {
            Ok(path) => path,
            Err(e) => {
                log::debug!("{e}; using lossy temporary directory");
                Path::new(temp.to_string_lossy())
            }
        }
    }

    fn standard_directories(&self, kind: DirectoryKind, scope: DirectoryScope) -> Vec<Path> {
        directories::lookup(kind, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn temp_path(dir: &tempfile::TempDir) -> Path {
        Path::try_from(dir.path()).unwrap()
    }

    #[test]
    fn test_standardize_expands_tilde_by_default() {
        let home = home::home_dir().unwrap();
        let standardized = OsProvider::new().standardize("~/a/../b");
        assert_eq!(std::path::PathBuf::from(standardized), home.join("b"));
    }

    #[test]
    #[cfg(unix)]
    fn test_standardize_without_tilde_expansion() {
        let provider = OsProvider::new().with_tilde_expansion(false);
        assert_eq!(provider.standardize("~/a/../b"), "~/b");
    }

    #[test]
    fn test_list_directory_hidden_entries() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("visible"), "").unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();
        let root = temp_path(&dir);

        let mut all = OsProvider::new().list_directory(&root).unwrap();
        all.sort();
        assert_eq!(all, vec![".hidden".to_string(), "visible".to_string()]);

        let visible = OsProvider::new()
            .with_hidden_entries(false)
            .list_directory(&root)
            .unwrap();
        assert_eq!(visible, vec!["visible".to_string()]);
    }

    #[test]
    fn test_list_directory_missing_fails() {
        let dir = tempdir().unwrap();
        let missing = temp_path(&dir) + "missing";
        let err = OsProvider::new().list_directory(&missing).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_directory_recursively() {
        let dir = tempdir().unwrap();
        let nested = temp_path(&dir) + "a/b/c";
        let provider = OsProvider::new();
        provider.create_directory(&nested).unwrap();
        provider.create_file(&(&nested + "f.txt")).unwrap();

        let top = temp_path(&dir) + "a";
        provider.remove(&top).unwrap();
        assert!(!provider.exists(&top));
    }

    #[test]
    fn test_copy_directory_recursively() {
        let dir = tempdir().unwrap();
        let provider = OsProvider::new();
        let src = temp_path(&dir) + "src";
        provider.create_directory(&(&src + "inner")).unwrap();
        fs::write((&src + "inner/data.txt").as_std_path(), "payload").unwrap();

        let dest = temp_path(&dir) + "dest";
        provider.copy_item(&src, &dest).unwrap();

        let copied = fs::read_to_string((&dest + "inner/data.txt").as_std_path()).unwrap();
        assert_eq!(copied, "payload");
        assert!(provider.exists(&(&src + "inner/data.txt")));
    }

    #[test]
    #[cfg(unix)]
    fn test_remove_symlink_keeps_target() {
        let dir = tempdir().unwrap();
        let provider = OsProvider::new();
        let target = temp_path(&dir) + "target";
        let link = temp_path(&dir) + "link";
        provider.create_directory(&target).unwrap();
        provider.create_file(&(&target + "kept")).unwrap();
        provider.create_symlink(&target, &link).unwrap();
        assert!(provider.is_symlink(&link));

        provider.remove(&link).unwrap();
        assert!(!provider.is_symlink(&link));
        assert!(provider.exists(&(&target + "kept")));
    }

    #[test]
    fn test_empty_path_does_not_exist() {
        let provider = OsProvider::new();
        assert!(!provider.exists(&Path::default()));
        assert!(!provider.is_directory(&Path::default()));
    }

    #[test]
    fn test_temporary_directory_exists() {
        let provider = OsProvider::new();
        assert!(provider.is_directory(&provider.temporary_directory()));
    }
}
