//! The [`Path`] value type and its pure, string-level operations.
//!
//! Nothing in this module touches the filesystem. Operations that need the
//! filesystem live on [`FileManager`](crate::FileManager) and are re-exposed on
//! `Path` as conveniences.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The platform path separator.
pub const SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// The platform path separator as a string slice.
pub const SEPARATOR_STR: &str = std::path::MAIN_SEPARATOR_STR;

/// A filesystem path stored as a plain string.
///
/// Construction never normalizes: `Path::new(s).as_str() == s` for every `s`.
/// Equality, ordering and hashing compare the raw strings, so `"a/./b"` and
/// `"a/b"` are different values until one of them is
/// [standardized](Path::standardized).
///
/// # Examples
///
/// ```
/// use fspath::Path;
///
/// let dir = Path::new("/usr/local");
/// let bin = &dir + "bin";
/// assert_eq!(bin.as_str(), "/usr/local/bin");
/// assert_eq!(bin.parent(), dir);
/// assert_eq!(bin.components().len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    raw: String,
}

impl Path {
    /// Wrap a string as a path without modifying it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("a//b/../c/").as_str(), "a//b/../c/");
    /// ```
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The root path, a single separator.
    #[must_use]
    pub fn root() -> Self {
        Self::new(SEPARATOR_STR)
    }

    /// The stored string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consume the path, returning the stored string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }

    /// View the path as a standard library path for use with `std::fs`.
    #[must_use]
    pub fn as_std_path(&self) -> &std::path::Path {
        std::path::Path::new(&self.raw)
    }

    /// Whether the stored string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether the path is absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert!(Path::new("/etc").is_absolute());
    /// assert!(!Path::new("etc").is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.raw.starts_with(SEPARATOR) || self.as_std_path().is_absolute()
    }

    /// Whether the path is relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Split the path into its components.
    ///
    /// An absolute path yields the separator as its first component. Empty
    /// and `.` segments are skipped; `..` is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(
    ///     Path::new("/a/b").components(),
    ///     vec![Path::new("/"), Path::new("a"), Path::new("b")]
    /// );
    /// assert_eq!(
    ///     Path::new("a/b").components(),
    ///     vec![Path::new("a"), Path::new("b")]
    /// );
    /// ```
    #[must_use]
    pub fn components(&self) -> Vec<Path> {
        let mut components = Vec::new();
        if self.raw.starts_with(SEPARATOR) {
            components.push(Self::root());
        }
        components.extend(
            self.raw
                .split(SEPARATOR)
                .filter(|segment| !segment.is_empty() && *segment != ".")
                .map(Self::new),
        );
        components
    }

    /// The path formed by the components `0..=index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `self.components().len()`. Use
    /// [`get_prefix`](Path::get_prefix) for a checked lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let path = Path::new("/usr/local/bin");
    /// assert_eq!(path.prefix(0), Path::new("/"));
    /// assert_eq!(path.prefix(2), Path::new("/usr/local"));
    /// ```
    #[must_use]
    pub fn prefix(&self, index: usize) -> Path {
        match self.get_prefix(index) {
            Some(prefix) => prefix,
            None => panic!(
                "component index {index} out of range for `{}` ({} components)",
                self.raw,
                self.components().len()
            ),
        }
    }

    /// Checked variant of [`prefix`](Path::prefix).
    #[must_use]
    pub fn get_prefix(&self, index: usize) -> Option<Path> {
        let components = self.components();
        let selected = components.get(..=index)?;
        Some(
            selected
                .iter()
                .fold(Path::default(), |prefix, component| prefix.join(component)),
        )
    }

    /// The path with its last component removed.
    ///
    /// Trailing separators are ignored. The parent of the root is the root,
    /// and the parent of a single relative name is the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("/a/b").parent(), Path::new("/a"));
    /// assert_eq!(Path::new("/a").parent(), Path::new("/"));
    /// assert_eq!(Path::new("a/b/").parent(), Path::new("a"));
    /// assert_eq!(Path::new("a").parent(), Path::new(""));
    /// ```
    #[must_use]
    pub fn parent(&self) -> Path {
        let trimmed = trim_trailing_separators(&self.raw);
        match trimmed.rfind(SEPARATOR) {
            None => Path::default(),
            Some(0) => Self::root(),
            Some(index) => Self::new(trim_trailing_separators(&trimmed[..index])),
        }
    }

    /// The last component as a string, ignoring trailing separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("/a/doc.txt").file_name(), "doc.txt");
    /// assert_eq!(Path::new("/a/b/").file_name(), "b");
    /// assert_eq!(Path::new("/").file_name(), "/");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &str {
        let trimmed = trim_trailing_separators(&self.raw);
        if trimmed == SEPARATOR_STR {
            return trimmed;
        }
        match trimmed.rfind(SEPARATOR) {
            Some(index) => &trimmed[index + SEPARATOR.len_utf8()..],
            None => trimmed,
        }
    }

    /// The text after the last `.` of the last component, or `""`.
    ///
    /// A leading dot (as in `.bashrc`) does not start an extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("/a/b/c.txt").extension(), "txt");
    /// assert_eq!(Path::new("/a/b").extension(), "");
    /// assert_eq!(Path::new("archive.tar.gz").extension(), "gz");
    /// ```
    #[must_use]
    pub fn extension(&self) -> &str {
        match self.extension_dot() {
            Some(dot) => &trim_trailing_separators(&self.raw)[dot + 1..],
            None => "",
        }
    }

    /// The path with the extension of its last component replaced.
    ///
    /// An empty `extension` removes it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("notes.md").with_extension("html"), Path::new("notes.html"));
    /// assert_eq!(Path::new("/a/Makefile").with_extension("bak"), Path::new("/a/Makefile.bak"));
    /// ```
    #[must_use]
    pub fn with_extension(&self, extension: &str) -> Path {
        let name = self.file_name();
        if name.is_empty() || name == SEPARATOR_STR || name == ".." {
            return self.clone();
        }
        let stem = self.without_extension();
        if extension.is_empty() {
            stem
        } else {
            Self::new(format!("{}.{extension}", stem.raw))
        }
    }

    /// The path with the extension of its last component removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("/a/b.tar.gz").without_extension(), Path::new("/a/b.tar"));
    /// assert_eq!(Path::new(".bashrc").without_extension(), Path::new(".bashrc"));
    /// ```
    #[must_use]
    pub fn without_extension(&self) -> Path {
        let trimmed = trim_trailing_separators(&self.raw);
        match self.extension_dot() {
            Some(dot) => Self::new(&trimmed[..dot]),
            None => Self::new(trimmed),
        }
    }

    /// Join `other` onto this path with exactly one separator between them.
    ///
    /// An empty or `.` operand on either side is the identity. This is the
    /// method behind the `+` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// assert_eq!(Path::new("/a").join("b"), Path::new("/a/b"));
    /// assert_eq!(Path::new("/a/").join("b"), Path::new("/a/b"));
    /// assert_eq!(Path::new("/a/").join("/b"), Path::new("/a/b"));
    /// assert_eq!(Path::new("").join("b"), Path::new("b"));
    /// ```
    #[must_use]
    pub fn join(&self, other: impl AsRef<str>) -> Path {
        let rhs = other.as_ref();
        if self.raw.is_empty() || self.raw == "." {
            return Self::new(rhs);
        }
        if rhs.is_empty() || rhs == "." {
            return self.clone();
        }
        match (self.raw.ends_with(SEPARATOR), rhs.starts_with(SEPARATOR)) {
            (true, true) => Self::new(format!("{}{}", self.raw, &rhs[SEPARATOR.len_utf8()..])),
            (false, false) => Self::new(format!("{}{SEPARATOR}{rhs}", self.raw)),
            _ => Self::new(format!("{}{rhs}", self.raw)),
        }
    }

    /// Byte offset in the trimmed raw string of the dot that starts the
    /// extension, if the last component has one.
    fn extension_dot(&self) -> Option<usize> {
        let trimmed = trim_trailing_separators(&self.raw);
        let name = self.file_name();
        match name.rfind('.') {
            None | Some(0) => None,
            Some(index) if index + 1 == name.len() => None,
            Some(index) => Some(trimmed.len() - name.len() + index),
        }
    }
}

/// Strip trailing separators, keeping a lone root separator.
fn trim_trailing_separators(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() && raw.starts_with(SEPARATOR) {
        SEPARATOR_STR
    } else {
        trimmed
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Path {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&String> for Path {
    fn from(raw: &String) -> Self {
        Self::new(raw.as_str())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.raw
    }
}

impl From<Path> for PathBuf {
    fn from(path: Path) -> Self {
        PathBuf::from(path.raw)
    }
}

impl TryFrom<PathBuf> for Path {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self> {
        path.into_os_string()
            .into_string()
            .map(Self::new)
            .map_err(|raw| Error::InvalidPath {
                path: PathBuf::from(raw),
                reason: "Path contains invalid UTF-8".to_string(),
            })
    }
}

impl TryFrom<&std::path::Path> for Path {
    type Error = Error;

    fn try_from(path: &std::path::Path) -> Result<Self> {
        path.to_str()
            .map(Self::new)
            .ok_or_else(|| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "Path contains invalid UTF-8".to_string(),
            })
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl AsRef<std::path::Path> for Path {
    fn as_ref(&self) -> &std::path::Path {
        self.as_std_path()
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}
