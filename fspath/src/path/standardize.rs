//! Path standardization functions.
//!
//! Standardization rewrites a path string without touching the filesystem:
//! - Expanding tilde (~) to the home directory
//! - Dropping `.` segments and redundant separators
//! - Folding `name/..` pairs
//!
//! [`collapse`] is the purely lexical part and is the default
//! [`FileSystemProvider::standardize`](crate::FileSystemProvider::standardize).
//! [`OsProvider`](crate::OsProvider) runs [`expand_tilde`] first.

use super::types::{SEPARATOR, SEPARATOR_STR};

/// Expand a leading tilde (~) to the home directory.
///
/// Handles `~` and `~/path`. The `~user` form, and any path when the home
/// directory cannot be determined, are returned unchanged.
///
/// # Examples
///
/// ```
/// use fspath::path::standardize::expand_tilde;
///
/// // Expands ~/path to home/path
/// let expanded = expand_tilde("~/project");
/// assert!(expanded.ends_with("project"));
/// assert!(!expanded.starts_with('~'));
///
/// // Leaves other paths unchanged
/// assert_eq!(expand_tilde("/absolute"), "/absolute");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(raw: &str) -> String {
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else if let Some(rest) = raw.strip_prefix("~\\") {
        rest
    } else {
        return raw.to_string();
    };

    // Get home directory using the home crate
    let Some(home) = home::home_dir().and_then(|home| home.to_str().map(str::to_string)) else {
        log::debug!("cannot determine home directory; leaving {raw} unexpanded");
        return raw.to_string();
    };

    if rest.is_empty() {
        home
    } else if home.ends_with(SEPARATOR) {
        format!("{home}{rest}")
    } else {
        format!("{home}{SEPARATOR}{rest}")
    }
}

/// Lexically standardize a path string.
///
/// - `.` segments and empty segments are removed
/// - `name/..` pairs are folded
/// - `..` directly under the root of an absolute path is dropped
/// - leading `..` segments of a relative path are kept
/// - trailing separators are removed
/// - a non-empty relative path that collapses to nothing becomes `.`
///
/// The result is idempotent: `collapse(&collapse(p)) == collapse(p)`.
///
/// # Examples
///
/// ```
/// use fspath::path::standardize::collapse;
///
/// assert_eq!(collapse("/a/./b/../c"), "/a/c");
/// assert_eq!(collapse("a/b/../c"), "a/c");
/// assert_eq!(collapse("../a/./b/"), "../a/b");
/// assert_eq!(collapse("/../a"), "/a");
/// assert_eq!(collapse("a/.."), ".");
/// ```
#[must_use]
pub fn collapse(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let absolute = raw.starts_with(SEPARATOR);
    let mut segments: Vec<&str> = Vec::new();

    for segment in raw.split(SEPARATOR) {
        match segment {
            // Skip "." and empty segments - they don't change the path
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // Already at root - ".." stays at root
                _ if absolute => {}
                _ => segments.push(".."),
            },
            name => segments.push(name),
        }
    }

    let joined = segments.join(SEPARATOR_STR);
    if absolute {
        format!("{SEPARATOR}{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
