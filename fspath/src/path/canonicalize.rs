//! Symlink resolution.
//!
//! This module follows symlinks to real paths, with support for paths whose
//! trailing components do not exist yet: the longest existing ancestor is
//! canonicalized and the remainder is appended unchanged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Canonicalize the existing portion of a path.
///
/// For non-existent paths, this function finds the longest existing ancestor
/// and canonicalizes it, then reports the non-existent components.
///
/// # Returns
///
/// Returns a tuple of:
/// - The canonicalized existing portion
/// - The remaining non-existent components (if any)
///
/// # Errors
///
/// Returns an error if:
/// - No existing ancestor can be found (`NotFound`)
/// - Canonicalization of the existing portion fails
///
/// # Examples
///
/// ```no_run
/// use fspath::path::canonicalize::canonicalize_existing;
/// use std::path::{Path, PathBuf};
///
/// // For a path where /tmp exists but /tmp/nonexistent/file does not:
/// let (canonical, remainder) =
///     canonicalize_existing(Path::new("/tmp/nonexistent/file")).unwrap();
/// // canonical will be the canonicalized /tmp
/// // remainder will be Some(PathBuf::from("nonexistent/file"))
/// ```
pub fn canonicalize_existing(path: &Path) -> io::Result<(PathBuf, Option<PathBuf>)> {
    // Try full canonicalization first
    if let Ok(canonical) = fs::canonicalize(path) {
        return Ok((canonical, None));
    }

    // Walk up the path to find the existing portion
    let mut current = path.to_path_buf();
    let mut non_existent = Vec::new();

    loop {
        if current.exists() {
            let canonical = fs::canonicalize(&current)?;

            let remainder = if non_existent.is_empty() {
                None
            } else {
                non_existent.reverse();
                Some(non_existent.into_iter().collect())
            };

            return Ok((canonical, remainder));
        }

        match current.file_name() {
            Some(name) => {
                non_existent.push(name.to_os_string());
                current.pop();
            }
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no existing portion of {}", path.display()),
                ));
            }
        }
    }
}

/// Resolve symlinks in `raw`, returning the input unchanged when nothing can
/// be resolved.
///
/// The result is absolute whenever some prefix of the path exists. A result
/// that is not valid UTF-8 also falls back to the input.
///
/// # Examples
///
/// ```no_run
/// use fspath::path::canonicalize::resolve_symlinks;
///
/// // Existing prefixes are resolved
/// let resolved = resolve_symlinks("/tmp/does-not-exist-yet");
/// assert!(resolved.ends_with("does-not-exist-yet"));
///
/// // Nothing exists: returned as-is
/// assert_eq!(resolve_symlinks("missing/relative"), "missing/relative");
/// ```
#[must_use]
pub fn resolve_symlinks(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let resolved = match canonicalize_existing(Path::new(raw)) {
        Ok((canonical, Some(remainder))) => canonical.join(remainder),
        Ok((canonical, None)) => canonical,
        Err(e) => {
            log::trace!("cannot resolve symlinks in {raw}: {e}");
            return raw.to_string();
        }
    };

    match resolved.into_os_string().into_string() {
        Ok(resolved) => resolved,
        Err(_) => raw.to_string(),
    }
}
