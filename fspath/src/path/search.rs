//! Directory traversal and recursive search.
//!
//! Everything here lists directories through a
//! [`FileSystemProvider`](crate::FileSystemProvider), so the traversal rules
//! can be exercised against a mock.

use super::types::Path;
use crate::provider::FileSystemProvider;

/// How far [`find_paths`] descends below the directory it starts from.
///
/// Depth counts directories entered after the first listing: `Limited(0)`
/// examines only direct children, `Limited(1)` also their children, and so
/// on.
///
/// # Examples
///
/// ```
/// use fspath::SearchDepth;
///
/// assert_eq!(SearchDepth::from(2_usize), SearchDepth::Limited(2));
/// assert_eq!(SearchDepth::from(-1_isize), SearchDepth::Unlimited);
/// assert_eq!(SearchDepth::default(), SearchDepth::Unlimited);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchDepth {
    /// Descend at most this many levels.
    Limited(usize),
    /// Descend until the tree ends.
    #[default]
    Unlimited,
}

impl SearchDepth {
    /// Whether no further descent is allowed.
    #[must_use]
    pub fn is_exhausted(self) -> bool {
        self == Self::Limited(0)
    }

    /// The depth left after descending one level.
    #[must_use]
    pub fn decrement(self) -> Self {
        match self {
            Self::Limited(depth) => Self::Limited(depth.saturating_sub(1)),
            Self::Unlimited => Self::Unlimited,
        }
    }
}

impl From<usize> for SearchDepth {
    fn from(depth: usize) -> Self {
        Self::Limited(depth)
    }
}

impl From<isize> for SearchDepth {
    /// Negative depths mean "never exhausted".
    fn from(depth: isize) -> Self {
        usize::try_from(depth).map_or(Self::Unlimited, Self::Limited)
    }
}

impl From<Option<usize>> for SearchDepth {
    fn from(depth: Option<usize>) -> Self {
        depth.map_or(Self::Unlimited, Self::Limited)
    }
}

/// Entries of the directory `root`, joined onto `root`, in listing order.
///
/// A path that cannot be listed has no children.
pub fn children<P>(provider: &P, root: &Path) -> Vec<Path>
where
    P: FileSystemProvider + ?Sized,
{
    match provider.list_directory(root) {
        Ok(names) => names.iter().map(|name| root.join(name)).collect(),
        Err(e) => {
            log::debug!("cannot list {root}: {e}");
            Vec::new()
        }
    }
}

/// Every descendant of `root`, each directory before its contents.
pub fn children_recursive<P>(provider: &P, root: &Path) -> Vec<Path>
where
    P: FileSystemProvider + ?Sized,
{
    let mut found = Vec::new();
    for child in children(provider, root) {
        let nested = if provider.is_directory(&child) && !provider.is_symlink(&child) {
            children_recursive(provider, &child)
        } else {
            Vec::new()
        };
        found.push(child);
        found.extend(nested);
    }
    found
}

/// Descendants of `root` for which `condition` holds.
///
/// A matching child is collected and not descended into. A non-matching
/// child is searched with one less level of depth, unless the depth is
/// exhausted or the child is a symlink. Symlinks are still offered to
/// `condition`. Results follow the provider's listing order, depth first.
///
/// # Examples
///
/// ```no_run
/// use fspath::path::search::find_paths;
/// use fspath::{OsProvider, Path, SearchDepth};
///
/// let sources = find_paths(&OsProvider::new(), &Path::new("src"), SearchDepth::Unlimited, &mut |p| {
///     p.extension() == "rs"
/// });
/// ```
pub fn find_paths<P, F>(provider: &P, root: &Path, depth: SearchDepth, condition: &mut F) -> Vec<Path>
where
    P: FileSystemProvider + ?Sized,
    F: FnMut(&Path) -> bool,
{
    let mut found = Vec::new();
    for child in children(provider, root) {
        if condition(&child) {
            found.push(child);
        } else if !depth.is_exhausted() && !provider.is_symlink(&child) {
            found.extend(find_paths(provider, &child, depth.decrement(), condition));
        }
    }
    found
}
